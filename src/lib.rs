//! # Blogstore Architecture
//!
//! Blogstore is a **transport-agnostic blog post library**. This is not a web
//! application that happens to have some library code—it's a library that a
//! web (or any other) frontend wires up.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transport Layer (not in this crate)                        │
//! │  - Routes, status codes, CORS, API docs                     │
//! │  - Maps BlogError variants onto its wire format             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (sort/direction strings → enums)       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: CRUD, sorting, search               │
//! │  - Read-modify-write over the whole collection              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract PostStore trait: load / save, nothing else      │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: The Store Is the Only State
//!
//! There is no global collection and no cross-operation cache. Every
//! operation loads the collection fresh from the store; mutations save it
//! back in full before returning. For the file-backed store, state lives
//! entirely in the JSON file and the in-memory copy is transient per
//! operation.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Post`, `PostDraft`, `PostPatch`)
//! - [`validate`]: Field validation shared by create and update
//! - [`config`]: Configuration (schema mode, data file path)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
