//! Multi-field search over the collection.
//!
//! Filters combine conjunctively: every supplied filter must match a post
//! for it to be returned. String filters match case-insensitive substrings;
//! the date filter is exact equality against the stored date. Results come
//! back in stored order — search never sorts.

use crate::error::Result;
use crate::model::Post;
use crate::store::PostStore;

/// Field filters for a search request. Absent and empty-string filters are
/// both treated as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        supplied(&self.title).is_none()
            && supplied(&self.content).is_none()
            && supplied(&self.author).is_none()
            && supplied(&self.date).is_none()
    }
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn run<S: PostStore>(store: &S, filters: &SearchFilters) -> Result<Vec<Post>> {
    // No filters means an empty result, not a full dump.
    if filters.is_empty() {
        return Ok(Vec::new());
    }

    let posts = store.load()?;
    Ok(posts.into_iter().filter(|p| matches(p, filters)).collect())
}

fn matches(post: &Post, filters: &SearchFilters) -> bool {
    if let Some(term) = supplied(&filters.title) {
        if !contains_ci(&post.title, term) {
            return false;
        }
    }
    if let Some(term) = supplied(&filters.content) {
        if !contains_ci(&post.content, term) {
            return false;
        }
    }
    if let Some(term) = supplied(&filters.author) {
        match post.author.as_deref() {
            Some(author) if contains_ci(author, term) => {}
            _ => return false,
        }
    }
    if let Some(date) = supplied(&filters.date) {
        if post.date.as_deref() != Some(date) {
            return false;
        }
    }
    true
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
