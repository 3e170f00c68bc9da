//! # Storage Layer
//!
//! This module defines the storage abstraction for libris. The
//! [`KeyValueStore`] trait models the browser-style durable store the
//! original application persisted into: a flat namespace of string keys and
//! string values with enumeration.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (real localStorage bridge, database, etc.)
//!   without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage — the whole key space
//!   lives in `annotations.json` in the data directory
//! - [`memory::InMemoryStore`]: In-memory storage for testing, with
//!   deterministic key enumeration
//!
//! ## Key convention
//!
//! Annotations are keyed `favorite_<book id>` and `bookmark_<book id>`.
//! This format is the persisted-state contract (stores written by older
//! versions of the app use it) and has exactly one owner:
//! [`AnnotationStore`]. No other code builds annotation keys.

use crate::error::{LibrisError, Result};
use crate::model::{Book, Bookmark};

pub mod fs;
pub mod memory;

const FAVORITE_PREFIX: &str = "favorite_";
const BOOKMARK_PREFIX: &str = "bookmark_";

/// Abstract interface for the durable key-value store.
///
/// Writes are atomic at single-key granularity; every read reflects the
/// latest write (all access is single-threaded).
pub trait KeyValueStore {
    /// Get a value, or `None` if the key is absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value (create or overwrite)
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a key; absent keys are not an error
    fn delete(&mut self, key: &str) -> Result<()>;

    /// Enumerate all keys currently in the store
    fn keys(&self) -> Result<Vec<String>>;
}

/// Typed adapter over the raw store for the two annotation kinds.
///
/// Favorites persist a full [`Book`] snapshot so the favorites view can be
/// rebuilt from the store alone, even for books no longer in the catalog.
pub struct AnnotationStore<S> {
    inner: S,
}

impl<S: KeyValueStore> AnnotationStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn favorite_key(id: &str) -> String {
        format!("{}{}", FAVORITE_PREFIX, id)
    }

    fn bookmark_key(id: &str) -> String {
        format!("{}{}", BOOKMARK_PREFIX, id)
    }

    pub fn favorite(&self, id: &str) -> Result<Option<Book>> {
        match self.inner.get(&Self::favorite_key(id))? {
            Some(raw) => {
                let book = serde_json::from_str(&raw)
                    .map_err(|e| LibrisError::StoreRead(format!("favorite {}: {}", id, e)))?;
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    pub fn is_favorite(&self, id: &str) -> Result<bool> {
        Ok(self.inner.get(&Self::favorite_key(id))?.is_some())
    }

    pub fn set_favorite(&mut self, book: &Book) -> Result<()> {
        let raw = serde_json::to_string(book)
            .map_err(|e| LibrisError::StoreWrite(format!("favorite {}: {}", book.id, e)))?;
        self.inner.set(&Self::favorite_key(&book.id), &raw)
    }

    pub fn clear_favorite(&mut self, id: &str) -> Result<()> {
        self.inner.delete(&Self::favorite_key(id))
    }

    /// All favorited books, rebuilt from stored snapshots in key order.
    pub fn favorites(&self) -> Result<Vec<Book>> {
        let mut books = Vec::new();
        for key in self.inner.keys()? {
            if let Some(id) = key.strip_prefix(FAVORITE_PREFIX) {
                if let Some(book) = self.favorite(id)? {
                    books.push(book);
                }
            }
        }
        Ok(books)
    }

    pub fn bookmark(&self, id: &str) -> Result<Option<Bookmark>> {
        match self.inner.get(&Self::bookmark_key(id))? {
            Some(raw) => {
                let bookmark = serde_json::from_str(&raw)
                    .map_err(|e| LibrisError::StoreRead(format!("bookmark {}: {}", id, e)))?;
                Ok(Some(bookmark))
            }
            None => Ok(None),
        }
    }

    pub fn has_bookmark(&self, id: &str) -> Result<bool> {
        Ok(self.inner.get(&Self::bookmark_key(id))?.is_some())
    }

    pub fn set_bookmark(&mut self, bookmark: &Bookmark) -> Result<()> {
        let raw = serde_json::to_string(bookmark).map_err(|e| {
            LibrisError::StoreWrite(format!("bookmark {}: {}", bookmark.book_id, e))
        })?;
        self.inner.set(&Self::bookmark_key(&bookmark.book_id), &raw)
    }

    pub fn clear_bookmark(&mut self, id: &str) -> Result<()> {
        self.inner.delete(&Self::bookmark_key(id))
    }
}
