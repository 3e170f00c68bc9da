use crate::error::{LibrisError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Retrieves the raw markup text of a book document. This is the one
/// asynchronous boundary of the original application (a network fetch);
/// implementations here are synchronous stand-ins behind the same seam.
pub trait DocumentFetcher {
    fn fetch_text(&self, uri: &str) -> Result<String>;
}

/// Resolves document URIs against the shelf directory and reads them from
/// disk. Absolute paths are used as-is.
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, uri: &str) -> PathBuf {
        let path = PathBuf::from(uri);
        if path.is_absolute() {
            path
        } else {
            self.root.join(path)
        }
    }
}

impl DocumentFetcher for FileFetcher {
    fn fetch_text(&self, uri: &str) -> Result<String> {
        let path = self.resolve(uri);
        fs::read_to_string(&path)
            .map_err(|e| LibrisError::DocumentUnavailable(format!("{}: {}", path.display(), e)))
    }
}

/// Test double: documents served from a map, everything else unavailable.
#[derive(Default)]
pub struct InMemoryFetcher {
    documents: HashMap<String, String>,
}

impl InMemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, uri: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.insert(uri.into(), text.into());
        self
    }
}

impl DocumentFetcher for InMemoryFetcher {
    fn fetch_text(&self, uri: &str) -> Result<String> {
        self.documents
            .get(uri)
            .cloned()
            .ok_or_else(|| LibrisError::DocumentUnavailable(uri.to_string()))
    }
}
