//! # Libris Architecture
//!
//! Libris is a **UI-agnostic book-library core**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client. The same core previously drove a browser
//! UI; nothing below the CLI layer assumes a terminal.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the session state (collection, filter, navigation)  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: filtering, toggles, pagination      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract KeyValueStore trait + AnnotationStore adapter   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State ownership
//!
//! All mutable session state lives in [`api::LibraryApi`] and is only
//! changed through its entry points. Query functions (`commands::filter`,
//! `paginate`) are pure: state in, data out. The persisted annotation keys
//! (`favorite_<id>`, `bookmark_<id>`) have a single owner in
//! [`store::AnnotationStore`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Book`, `Bookmark`, `FilterState`)
//! - [`nav`]: Navigation state machine and stale-fetch guard
//! - [`paginate`]: Document text extraction and pagination
//! - [`provider`]: Book catalog sources
//! - [`fetch`]: Document retrieval seam
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod nav;
pub mod paginate;
pub mod provider;
pub mod store;
