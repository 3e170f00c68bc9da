use crate::commands::{BookCard, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, FilterState, GenreFilter};
use crate::store::{AnnotationStore, KeyValueStore};

/// The catalog filter predicate: case-insensitive substring match of the
/// query against title OR author (empty query matches everything), ANDed
/// with exact genre equality when a genre tag is selected.
pub fn matches(book: &Book, state: &FilterState) -> bool {
    let query_ok = if state.query.is_empty() {
        true
    } else {
        let query = state.query.to_lowercase();
        book.title.to_lowercase().contains(&query) || book.author.to_lowercase().contains(&query)
    };

    let genre_ok = match &state.genre {
        GenreFilter::All => true,
        GenreFilter::Tag(tag) => book.genre.as_deref() == Some(tag.as_str()),
    };

    query_ok && genre_ok
}

/// Pure filtering: the matching books in collection order.
pub fn filter<'a>(collection: &'a [Book], state: &FilterState) -> Vec<&'a Book> {
    collection.iter().filter(|b| matches(b, state)).collect()
}

/// Filter the collection and decorate each match with its annotation state
/// for rendering. An empty result is a valid outcome, signalled with an
/// info message rather than an error.
pub fn run<S: KeyValueStore>(
    store: &AnnotationStore<S>,
    collection: &[Book],
    state: &FilterState,
) -> Result<CmdResult> {
    let mut cards = Vec::new();
    for book in filter(collection, state) {
        cards.push(BookCard {
            is_favorite: store.is_favorite(&book.id)?,
            has_bookmark: store.has_bookmark(&book.id)?,
            book: book.clone(),
        });
    }

    let mut result = CmdResult::default().with_listed_books(cards);
    if result.listed_books.is_empty() {
        result.add_message(CmdMessage::info(
            "No books found. Try a different query.",
        ));
    }
    Ok(result)
}
