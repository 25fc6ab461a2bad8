//! # Domain Model: Posts and Input Shapes
//!
//! This module defines the core data structures for blogstore: [`Post`],
//! [`PostDraft`], and [`PostPatch`].
//!
//! ## The Post Shape
//!
//! A post always carries `id`, `title`, and `content`. `author` and `date`
//! exist only under the extended schema (see [`crate::config::Schema`]);
//! under the minimal schema they stay `None` and are skipped on
//! serialization, so a minimal collection round-trips as two-field JSON
//! objects and an extended collection as four-field objects.
//!
//! Dates are stored as the validated `YYYY-MM-DD` string, not as a parsed
//! date type. The stored form is exactly what the client sent (after
//! trimming); parsing happens at validation and date-sort time.
//!
//! ## Identity
//!
//! `id` is a positive integer assigned at create time as one past the
//! current maximum in the collection. It is immutable afterwards: updates
//! never touch it, and it is the sole lookup key for update/delete.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Raw fields of a create request, exactly as the client sent them.
///
/// Every field is optional at this stage; the validator decides what is
/// required under the active schema. Deserializes directly from a JSON
/// request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            author: None,
            date: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Partial fields of an update request.
///
/// A `None` field is left untouched on the stored post. A supplied field is
/// validated before any field is applied, so an invalid patch changes
/// nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl PostPatch {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}
