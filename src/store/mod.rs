//! # Storage Layer
//!
//! This module defines the storage abstraction for blogstore. The
//! [`PostStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Whole-Collection Load/Save
//!
//! The contract is deliberately coarse: the full collection is loaded at the
//! start of every operation and, for mutations, written back in full right
//! after the in-memory change. There is no in-process caching across
//! operations and no per-record access. This keeps the seam small enough
//! that a future swap to a real database only touches this module.
//!
//! The model accepts lost updates: two overlapping read-modify-write
//! operations resolve last-writer-wins. What implementations must rule out
//! is *tearing* — a reader must never observe a partially written
//! collection.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production implementation, one pretty-printed
//!   JSON array file rewritten atomically per mutation.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O,
//!   and for deployments that accept state living and dying with the
//!   process.

use crate::error::Result;
use crate::model::Post;

pub mod fs;
pub mod memory;

/// Abstract interface for post collection storage.
pub trait PostStore {
    /// Load the full collection.
    ///
    /// Missing persisted state is the expected first-run case and loads as
    /// an empty collection, not an error. Structurally invalid persisted
    /// state also loads as an empty collection, keeping the service
    /// available over a corrupt file.
    fn load(&self) -> Result<Vec<Post>>;

    /// Persist the full collection, replacing prior state.
    ///
    /// MUST be atomic from the caller's perspective (e.g. write to tmp then
    /// rename) so no partial write is ever observable. A rejected write
    /// (permissions, capacity) surfaces as an error the caller can recover
    /// from; previously persisted state stays intact.
    fn save(&self, posts: &[Post]) -> Result<()>;
}
