use crate::commands::{BookDetail, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::{AnnotationStore, KeyValueStore};

/// Assemble the detail view for a book id. An unknown id yields a
/// displayable not-found result, not an error: the action fails, the
/// application stays usable.
pub fn run<S: KeyValueStore>(
    store: &AnnotationStore<S>,
    collection: &[Book],
    book_id: &str,
) -> Result<CmdResult> {
    let Some(book) = collection.iter().find(|b| b.id == book_id) else {
        return Ok(CmdResult::default().with_message(CmdMessage::error("Book not found")));
    };

    let detail = BookDetail {
        is_favorite: store.is_favorite(book_id)?,
        bookmark: store.bookmark(book_id)?,
        book: book.clone(),
    };
    Ok(CmdResult::default().with_detail(detail))
}
