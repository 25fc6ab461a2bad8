//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all blogstore operations, regardless of the
//! transport sitting on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (stringly-typed sort field and direction into
//!   their enums, against the configured schema)
//! - **Returns structured types** (`Result<Post>`, `Result<Vec<Post>>`, ...)
//!
//! ## What the API Does NOT Do
//!
//! The API explicitly avoids:
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Transport concerns**: no HTTP status codes, no JSON bodies — the
//!   caller maps [`BlogError`](crate::error::BlogError) variants onto its
//!   wire format
//!
//! ## Generic Over PostStore
//!
//! `BlogApi<S: PostStore>` is generic over the storage backend:
//! - Production: `BlogApi<JsonFileStore>`
//! - Testing, or the in-memory deployment: `BlogApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::commands;
use crate::commands::{DeleteReceipt, SearchFilters, SortDirection, SortField};
use crate::config::BlogConfig;
use crate::error::Result;
use crate::model::{Post, PostDraft, PostPatch};
use crate::store::PostStore;

/// The main API facade for blogstore operations.
///
/// Owns the store and the configuration; all transports should interact
/// through this type.
pub struct BlogApi<S: PostStore> {
    store: S,
    config: BlogConfig,
}

impl<S: PostStore> BlogApi<S> {
    pub fn new(store: S, config: BlogConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &BlogConfig {
        &self.config
    }

    /// List posts, optionally sorted.
    ///
    /// With no sort field the collection comes back in stored order and the
    /// direction argument is not consulted. With a sort field, an
    /// unrecognized direction is an error; an absent one defaults to
    /// ascending.
    pub fn list_posts(&self, sort: Option<&str>, direction: Option<&str>) -> Result<Vec<Post>> {
        match sort {
            None => commands::list::run(&self.store, None, SortDirection::default()),
            Some(raw_field) => {
                let field = SortField::parse(raw_field, self.config.schema())?;
                let direction = match direction {
                    Some(raw) => SortDirection::parse(raw)?,
                    None => SortDirection::default(),
                };
                commands::list::run(&self.store, Some(field), direction)
            }
        }
    }

    pub fn create_post(&self, draft: &PostDraft) -> Result<Post> {
        commands::create::run(&self.store, self.config.schema(), draft)
    }

    pub fn update_post(&self, id: u64, patch: &PostPatch) -> Result<Post> {
        commands::update::run(&self.store, self.config.schema(), id, patch)
    }

    pub fn delete_post(&self, id: u64) -> Result<DeleteReceipt> {
        commands::delete::run(&self.store, id)
    }

    pub fn search_posts(&self, filters: &SearchFilters) -> Result<Vec<Post>> {
        commands::search::run(&self.store, filters)
    }
}
