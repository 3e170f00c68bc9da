use crate::commands::{BookCard, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::{AnnotationStore, KeyValueStore};

/// Flip the favorite mark for a book: delete it if present, otherwise
/// persist a full snapshot. Each call flips exactly once.
pub fn toggle<S: KeyValueStore>(
    store: &mut AnnotationStore<S>,
    book: &Book,
) -> Result<CmdResult> {
    let now_favorite = if store.is_favorite(&book.id)? {
        store.clear_favorite(&book.id)?;
        false
    } else {
        store.set_favorite(book)?;
        true
    };

    let verb = if now_favorite { "added to" } else { "removed from" };
    Ok(CmdResult::default()
        .with_toggled_on(now_favorite)
        .with_message(CmdMessage::success(format!(
            "\"{}\" {} favorites",
            book.title, verb
        ))))
}

/// The favorites view, rebuilt from stored snapshots on every call. The
/// store is the source of truth here: a favorite stays visible even when
/// its book has vanished from the catalog.
pub fn list<S: KeyValueStore>(store: &AnnotationStore<S>) -> Result<CmdResult> {
    let mut cards = Vec::new();
    for book in store.favorites()? {
        cards.push(BookCard {
            is_favorite: true,
            has_bookmark: store.has_bookmark(&book.id)?,
            book,
        });
    }

    let mut result = CmdResult::default().with_listed_books(cards);
    if result.listed_books.is_empty() {
        result.add_message(CmdMessage::info("You have no favorite books yet."));
    }
    Ok(result)
}
