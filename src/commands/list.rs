//! Listing and the sort engine.
//!
//! Sorting is a view over the collection: the stored order never changes.
//! String fields compare by lowercased key; the date field compares by
//! parsed calendar value, and a stored post with a missing or malformed
//! date fails the sort instead of being silently mis-ordered. Both
//! directions are stable — posts comparing equal on the key keep their
//! stored relative order.

use chrono::NaiveDate;

use crate::config::Schema;
use crate::error::{BlogError, Result};
use crate::model::Post;
use crate::store::PostStore;
use crate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
    Author,
    Date,
}

impl SortField {
    /// Parse a requested sort field against the active schema. `author` and
    /// `date` are only legal fields under the extended schema.
    pub fn parse(raw: &str, schema: Schema) -> Result<Self> {
        match raw {
            "title" => Ok(SortField::Title),
            "content" => Ok(SortField::Content),
            "author" if schema.has_author_and_date() => Ok(SortField::Author),
            "date" if schema.has_author_and_date() => Ok(SortField::Date),
            _ => Err(BlogError::InvalidSortField(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(BlogError::InvalidDirection(raw.to_string())),
        }
    }
}

pub fn run<S: PostStore>(
    store: &S,
    sort: Option<SortField>,
    direction: SortDirection,
) -> Result<Vec<Post>> {
    let posts = store.load()?;
    match sort {
        None => Ok(posts),
        Some(field) => sorted(posts, field, direction),
    }
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Text(String),
    Day(NaiveDate),
}

fn sort_key(post: &Post, field: SortField) -> Result<SortKey> {
    match field {
        SortField::Title => Ok(SortKey::Text(post.title.to_lowercase())),
        SortField::Content => Ok(SortKey::Text(post.content.to_lowercase())),
        SortField::Author => Ok(SortKey::Text(
            post.author.as_deref().unwrap_or("").to_lowercase(),
        )),
        SortField::Date => {
            let raw = post
                .date
                .as_deref()
                .ok_or_else(|| BlogError::InvalidDate(String::new()))?;
            Ok(SortKey::Day(validate::parse_date(raw)?))
        }
    }
}

fn sorted(posts: Vec<Post>, field: SortField, direction: SortDirection) -> Result<Vec<Post>> {
    // Keys are computed up front so a malformed stored date fails the whole
    // sort before anything is reordered.
    let keys: Vec<SortKey> = posts
        .iter()
        .map(|p| sort_key(p, field))
        .collect::<Result<_>>()?;

    let mut paired: Vec<(SortKey, Post)> = keys.into_iter().zip(posts).collect();
    // Stable sort with a reversed comparator, so ties keep stored order in
    // both directions.
    match direction {
        SortDirection::Asc => paired.sort_by(|(a, _), (b, _)| a.cmp(b)),
        SortDirection::Desc => paired.sort_by(|(a, _), (b, _)| b.cmp(a)),
    }

    Ok(paired.into_iter().map(|(_, post)| post).collect())
}
