//! # API Facade
//!
//! The single entry point for all libris operations, regardless of the UI
//! driving it. `LibraryApi` owns the session state container — the loaded
//! collection, the active filter, the navigator and the annotation store —
//! and every mutation goes through one of its methods. Presentation code
//! never touches this state directly; it receives `CmdResult`s and renders
//! them.
//!
//! The facade itself holds no business logic: it normalizes inputs
//! (resolving ids to books, defaulting pages) and dispatches to the
//! command layer.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};
use crate::fetch::DocumentFetcher;
use crate::model::{Book, FilterState, GenreFilter};
use crate::nav::{FetchTicket, Navigator, Route};
use crate::provider::BookProvider;
use crate::store::{AnnotationStore, KeyValueStore};

/// The main API facade.
///
/// Generic over `KeyValueStore` to allow different storage backends:
/// production uses `FileStore`, tests use `InMemoryStore`.
pub struct LibraryApi<S: KeyValueStore> {
    store: AnnotationStore<S>,
    collection: Vec<Book>,
    filter: FilterState,
    nav: Navigator,
}

impl<S: KeyValueStore> LibraryApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: AnnotationStore::new(store),
            collection: Vec::new(),
            filter: FilterState::default(),
            nav: Navigator::new(),
        }
    }

    /// Load the catalog from the provider. On scan failure the collection
    /// is left empty and the failure is reported in the result messages.
    pub fn load<P: BookProvider>(&mut self, provider: &P) -> CmdResult {
        let (books, result) = commands::scan::run(provider);
        self.collection = books;
        result
    }

    pub fn collection(&self) -> &[Book] {
        &self.collection
    }

    pub fn route(&self) -> &Route {
        self.nav.current()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_genre(&mut self, genre: &str) {
        self.filter.genre = GenreFilter::parse(genre);
    }

    /// Go to the catalog page and list the books matching the current
    /// filter state.
    pub fn browse(&mut self) -> Result<CmdResult> {
        self.nav.go_home();
        commands::filter::run(&self.store, &self.collection, &self.filter)
    }

    /// Go to the library page: the favorites view, always recomputed from
    /// the store.
    pub fn library(&mut self) -> Result<CmdResult> {
        self.nav.go_library();
        commands::favorites::list(&self.store)
    }

    /// Open the detail view for a book. An unknown id produces a
    /// displayable not-found result and leaves the navigation unchanged.
    pub fn open_book(&mut self, id: &str) -> Result<CmdResult> {
        match self.nav.open_book(id, &self.collection) {
            Ok(_) => commands::detail::run(&self.store, &self.collection, id),
            Err(LibrisError::BookNotFound(_)) => {
                Ok(CmdResult::default().with_message(CmdMessage::error("Book not found")))
            }
            Err(e) => Err(e),
        }
    }

    /// Leave the detail view and re-render whichever list page was active
    /// before it.
    pub fn back(&mut self) -> Result<CmdResult> {
        self.nav.back();
        match self.nav.current().clone() {
            Route::Home => commands::filter::run(&self.store, &self.collection, &self.filter),
            Route::Library => commands::favorites::list(&self.store),
            Route::Detail(id) => commands::detail::run(&self.store, &self.collection, &id),
        }
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<CmdResult> {
        let book = self.resolve(id)?;
        commands::favorites::toggle(&mut self.store, &book)
    }

    pub fn toggle_bookmark(&mut self, id: &str) -> Result<CmdResult> {
        if self.store.has_bookmark(id)? {
            commands::bookmarks::remove(&mut self.store, id)
        } else {
            let book = self.resolve(id)?;
            commands::bookmarks::toggle(&mut self.store, &book)
        }
    }

    pub fn add_bookmark(&mut self, id: &str, page: Option<u32>) -> Result<CmdResult> {
        commands::bookmarks::add(&mut self.store, id, page.unwrap_or(1))
    }

    pub fn remove_bookmark(&mut self, id: &str) -> Result<CmdResult> {
        commands::bookmarks::remove(&mut self.store, id)
    }

    /// Start a reader-open: resolves the book, picks the page (explicit
    /// request, else the saved bookmark, else 1) and registers the fetch.
    /// The returned URI is handed to a `DocumentFetcher`; the ticket must
    /// come back through [`complete_reader`](Self::complete_reader).
    pub fn open_reader(
        &mut self,
        id: &str,
        page: Option<usize>,
    ) -> Result<(FetchTicket, String, usize)> {
        let book = self
            .collection
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| LibrisError::BookNotFound(id.to_string()))?;

        let page = match page {
            Some(p) => p,
            None => self
                .store
                .bookmark(id)?
                .map(|bm| bm.page as usize)
                .unwrap_or(1),
        };

        let ticket = self.nav.begin_fetch();
        Ok((ticket, book.file.clone(), page))
    }

    /// Apply a completed fetch. A stale ticket (the reader was closed or
    /// navigation moved on while the fetch was in flight) discards the
    /// result without touching any state.
    pub fn complete_reader(
        &mut self,
        ticket: FetchTicket,
        page: usize,
        fetched: Result<String>,
    ) -> Result<CmdResult> {
        if !self.nav.is_current(ticket) {
            return Ok(CmdResult::default()
                .with_message(CmdMessage::info("Reader closed; discarding loaded document")));
        }
        let raw = fetched?;
        let view = commands::reader::paginate_and_select(&raw, page)?;
        Ok(CmdResult::default().with_page(view))
    }

    /// Synchronous convenience wrapping the open/fetch/complete cycle.
    pub fn read<F: DocumentFetcher>(
        &mut self,
        fetcher: &F,
        id: &str,
        page: Option<usize>,
    ) -> Result<CmdResult> {
        let (ticket, uri, page) = self.open_reader(id, page)?;
        let fetched = fetcher.fetch_text(&uri);
        self.complete_reader(ticket, page, fetched)
    }

    pub fn close_reader(&mut self) {
        self.nav.close_reader();
    }

    /// Resolve an id to a book: the collection first, then the favorite
    /// snapshot — so favorites of books gone from the shelf can still be
    /// toggled from the library view.
    fn resolve(&self, id: &str) -> Result<Book> {
        if let Some(book) = self.collection.iter().find(|b| b.id == id) {
            return Ok(book.clone());
        }
        if let Some(book) = self.store.favorite(id)? {
            return Ok(book);
        }
        Err(LibrisError::BookNotFound(id.to_string()))
    }
}
