//! Navigation state machine: which page of the app is active, which book is
//! selected, and whether an in-flight document fetch is still welcome.

use crate::error::{LibrisError, Result};
use crate::model::Book;

/// The active page of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Full catalog with search/genre filtering
    Home,
    /// "My library": favorites, rebuilt from the store
    Library,
    /// Detail view for one book
    Detail(String),
}

/// Ticket identifying one reader-open fetch. A completed fetch may only be
/// applied while its ticket is still current; navigating away or reopening
/// the reader supersedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug)]
pub struct Navigator {
    current: Route,
    last_list: Route,
    fetch_epoch: u64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Route::Home,
            last_list: Route::Home,
            fetch_epoch: 0,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn go_home(&mut self) {
        self.current = Route::Home;
        self.last_list = Route::Home;
        self.invalidate_fetch();
    }

    pub fn go_library(&mut self) {
        self.current = Route::Library;
        self.last_list = Route::Library;
        self.invalidate_fetch();
    }

    /// Transition to the detail view for `id`. Fails with `BookNotFound`
    /// and leaves the state unchanged if the id does not resolve in the
    /// collection.
    pub fn open_book<'a>(&mut self, id: &str, collection: &'a [Book]) -> Result<&'a Book> {
        let book = collection
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| LibrisError::BookNotFound(id.to_string()))?;
        self.current = Route::Detail(id.to_string());
        Ok(book)
    }

    /// From a detail view, return to whichever list page was active before
    /// it. On a list page this is a no-op.
    pub fn back(&mut self) {
        if matches!(self.current, Route::Detail(_)) {
            self.current = self.last_list.clone();
            self.invalidate_fetch();
        }
    }

    /// Register a new reader-open fetch, superseding any pending one.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_epoch += 1;
        FetchTicket(self.fetch_epoch)
    }

    /// Closing the viewer discards whatever fetch is still in flight.
    pub fn close_reader(&mut self) {
        self.invalidate_fetch();
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.fetch_epoch
    }

    fn invalidate_fetch(&mut self) {
        self.fetch_epoch += 1;
    }
}
