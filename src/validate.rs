//! # Post Validation
//!
//! Field validation shared by create and update. Every supplied string is
//! trimmed before checking; `title` and `content` are always required
//! non-empty, `author` and `date` only under [`Schema::Extended`]. A date,
//! wherever it appears, must be a real calendar date in fixed `YYYY-MM-DD`
//! form — `2024-02-30` is rejected, not normalized.
//!
//! Under [`Schema::Minimal`], `author` and `date` inputs are ignored
//! entirely: the fields are not part of the schema and are never stored.

use chrono::NaiveDate;

use crate::config::Schema;
use crate::error::{BlogError, Result};
use crate::model::{Post, PostDraft, PostPatch};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in fixed `YYYY-MM-DD` calendar form.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| BlogError::InvalidDate(raw.to_string()))
}

/// Trim a field and require it to be non-empty.
fn required(field: &'static str, value: Option<&str>) -> Result<String> {
    let trimmed = value.unwrap_or("").trim();
    if trimmed.is_empty() {
        return Err(BlogError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Validate a draft and build the post it describes.
///
/// The caller supplies the id; assignment is the collection manager's job.
pub fn validated_post(id: u64, draft: &PostDraft, schema: Schema) -> Result<Post> {
    let title = required("title", draft.title.as_deref())?;
    let content = required("content", draft.content.as_deref())?;

    let (author, date) = if schema.has_author_and_date() {
        let author = required("author", draft.author.as_deref())?;
        let date = required("date", draft.date.as_deref())?;
        parse_date(&date)?;
        (Some(author), Some(date))
    } else {
        (None, None)
    };

    Ok(Post {
        id,
        title,
        content,
        author,
        date,
    })
}

/// Validate the supplied fields of a patch, then apply them to the post.
///
/// Validation of every supplied field happens before the first write, so a
/// patch with any invalid field leaves the post exactly as it was.
pub fn apply_patch(post: &mut Post, patch: &PostPatch, schema: Schema) -> Result<()> {
    let title = match patch.title.as_deref() {
        Some(raw) => Some(required("title", Some(raw))?),
        None => None,
    };
    let content = match patch.content.as_deref() {
        Some(raw) => Some(required("content", Some(raw))?),
        None => None,
    };

    let (author, date) = if schema.has_author_and_date() {
        let author = match patch.author.as_deref() {
            Some(raw) => Some(required("author", Some(raw))?),
            None => None,
        };
        let date = match patch.date.as_deref() {
            Some(raw) => {
                let trimmed = raw.trim();
                parse_date(trimmed)?;
                Some(trimmed.to_string())
            }
            None => None,
        };
        (author, date)
    } else {
        (None, None)
    };

    if let Some(title) = title {
        post.title = title;
    }
    if let Some(content) = content {
        post.content = content;
    }
    if let Some(author) = author {
        post.author = Some(author);
    }
    if let Some(date) = date {
        post.date = Some(date);
    }
    Ok(())
}
