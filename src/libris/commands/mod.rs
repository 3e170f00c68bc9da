use crate::model::{Book, Bookmark};
use crate::paginate::PageView;

pub mod bookmarks;
pub mod detail;
pub mod favorites;
pub mod filter;
pub mod reader;
pub mod scan;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A catalog entry decorated with its annotation state, ready to render.
#[derive(Debug, Clone)]
pub struct BookCard {
    pub book: Book,
    pub is_favorite: bool,
    pub has_bookmark: bool,
}

/// Everything the detail page shows for one book.
#[derive(Debug, Clone)]
pub struct BookDetail {
    pub book: Book,
    pub is_favorite: bool,
    pub bookmark: Option<Bookmark>,
}

/// Structured outcome of a command, interpreted by the UI layer.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_books: Vec<BookCard>,
    pub detail: Option<BookDetail>,
    pub page: Option<PageView>,
    /// Set by toggle commands: the annotation state after the flip
    pub toggled_on: Option<bool>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_books(mut self, books: Vec<BookCard>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_detail(mut self, detail: BookDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_page(mut self, page: PageView) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_toggled_on(mut self, on: bool) -> Self {
        self.toggled_on = Some(on);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
