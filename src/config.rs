//! # Configuration
//!
//! Blogstore configuration is managed by [`confique`], which handles layered
//! loading from TOML files, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `BLOG_DATA_FILE`, `BLOG_SCHEMA`.
//! 2. **Config file**: a `blogstore.toml` passed to [`BlogConfig::load`].
//! 3. **Compiled Defaults**: built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `storage.json` | Path of the JSON file backing the collection |
//! | `schema` | `extended` | Post field-set: `minimal` (title, content) or `extended` (plus author, date) |
//!
//! The schema decides which fields the validator requires, which sort fields
//! are legal, and whether `author`/`date` inputs are stored at all. It is a
//! deployment-wide choice: a collection written under one schema should not
//! be served under the other.

use std::path::{Path, PathBuf};

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::{BlogError, Result};

/// The post field-set in effect for validation, sorting, and storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// Two-field posts: `title` and `content`.
    Minimal,
    /// Four-field posts: `title`, `content`, `author`, `date`.
    Extended,
}

impl Schema {
    pub fn has_author_and_date(self) -> bool {
        matches!(self, Schema::Extended)
    }
}

/// Configuration for blogstore, stored in `blogstore.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlogConfig {
    /// Path of the JSON file backing the collection (file-backed stores only).
    #[config(env = "BLOG_DATA_FILE", default = "storage.json")]
    pub data_file: String,

    /// Active post field-set. When absent, defaults to `extended`.
    #[config(env = "BLOG_SCHEMA")]
    #[serde(default)]
    pub schema: Option<Schema>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            data_file: "storage.json".to_string(),
            schema: None,
        }
    }
}

impl BlogConfig {
    /// Load configuration from the environment, layered over an optional
    /// TOML file, layered over compiled defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| BlogError::Store(e.to_string()))
    }

    /// Get the active schema, using the default if not configured.
    pub fn schema(&self) -> Schema {
        self.schema.unwrap_or(Schema::Extended)
    }

    /// Get the data file path.
    pub fn data_file(&self) -> PathBuf {
        PathBuf::from(&self.data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlogConfig::default();
        assert_eq!(config.data_file, "storage.json");
        assert_eq!(config.schema(), Schema::Extended);
    }

    #[test]
    fn test_schema_from_toml() {
        let config: BlogConfig = toml::from_str(
            r#"
            data_file = "posts.json"
            schema = "minimal"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_file(), PathBuf::from("posts.json"));
        assert_eq!(config.schema(), Schema::Minimal);
    }

    #[test]
    fn test_schema_defaults_to_extended_when_absent() {
        let config: BlogConfig = toml::from_str(r#"data_file = "posts.json""#).unwrap();
        assert_eq!(config.schema(), Schema::Extended);
    }

    #[test]
    fn test_minimal_schema_has_no_author_and_date() {
        assert!(!Schema::Minimal.has_author_and_date());
        assert!(Schema::Extended.has_author_and_date());
    }
}
