//! # Command Layer
//!
//! This module contains the **core business logic** of blogstore. Each
//! operation lives in its own submodule and implements pure Rust functions
//! that operate on data types.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Implement the actual logic for each operation
//! - Operate on `Post` and the other domain types
//! - Are generic over [`PostStore`](crate::store::PostStore), so the same
//!   logic runs against the file store and the in-memory store
//! - Are completely transport-agnostic: no HTTP, no stdout, no exit codes
//!
//! ## The Read-Modify-Write Discipline
//!
//! Every mutating command loads the collection fresh from the store,
//! mutates its own in-memory copy, and saves the whole collection back
//! before returning. Nothing is cached between operations; the store is the
//! only state. Two overlapping mutations resolve last-writer-wins, which is
//! the accepted deployment model.
//!
//! ## Command Modules
//!
//! - [`list`]: list posts, optionally sorted (the sort engine lives here)
//! - [`create`]: validate, assign an id, append, persist
//! - [`update`]: partial update with validate-then-apply semantics
//! - [`delete`]: remove a post by id
//! - [`search`]: multi-field conjunctive filtering
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! [`InMemoryStore`](crate::store::memory::InMemoryStore) to avoid
//! filesystem dependencies and cover all logic branches, including store
//! write failures via the simulated-error hook.

pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;

pub use delete::DeleteReceipt;
pub use list::{SortDirection, SortField};
pub use search::SearchFilters;
