use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, Bookmark};
use crate::store::{AnnotationStore, KeyValueStore};

/// Save a bookmark at the given page, overwriting any existing one and
/// stamping it with the current time.
pub fn add<S: KeyValueStore>(
    store: &mut AnnotationStore<S>,
    book_id: &str,
    page: u32,
) -> Result<CmdResult> {
    let bookmark = Bookmark::new(book_id, page);
    store.set_bookmark(&bookmark)?;
    Ok(CmdResult::default()
        .with_toggled_on(true)
        .with_message(CmdMessage::success(format!(
            "Bookmark saved at page {}",
            bookmark.page
        ))))
}

/// Delete the bookmark if present; deleting an absent one is fine.
pub fn remove<S: KeyValueStore>(
    store: &mut AnnotationStore<S>,
    book_id: &str,
) -> Result<CmdResult> {
    store.clear_bookmark(book_id)?;
    Ok(CmdResult::default()
        .with_toggled_on(false)
        .with_message(CmdMessage::success("Bookmark removed")))
}

/// Flip the bookmark: remove it if present, otherwise add one at page 1.
pub fn toggle<S: KeyValueStore>(
    store: &mut AnnotationStore<S>,
    book: &Book,
) -> Result<CmdResult> {
    if store.has_bookmark(&book.id)? {
        remove(store, &book.id)
    } else {
        add(store, &book.id, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn book(id: &str) -> Book {
        Book {
            id: id.to_string(),
            author: "A".to_string(),
            title: "T".to_string(),
            cover: None,
            file: "t.fb2".to_string(),
            genre: None,
            description: None,
        }
    }

    #[test]
    fn add_then_remove_leaves_no_bookmark() {
        let mut store = AnnotationStore::new(InMemoryStore::new());
        add(&mut store, "1", 3).unwrap();
        remove(&mut store, "1").unwrap();
        assert_eq!(store.bookmark("1").unwrap(), None);
    }

    #[test]
    fn toggle_after_remove_adds_at_page_one() {
        let mut store = AnnotationStore::new(InMemoryStore::new());
        add(&mut store, "1", 3).unwrap();
        remove(&mut store, "1").unwrap();

        let result = toggle(&mut store, &book("1")).unwrap();
        assert_eq!(result.toggled_on, Some(true));
        assert_eq!(store.bookmark("1").unwrap().unwrap().page, 1);
    }

    #[test]
    fn re_adding_overwrites_page_and_timestamp() {
        let mut store = AnnotationStore::new(InMemoryStore::new());
        add(&mut store, "1", 3).unwrap();
        let first = store.bookmark("1").unwrap().unwrap();

        add(&mut store, "1", 7).unwrap();
        let second = store.bookmark("1").unwrap().unwrap();

        assert_eq!(second.page, 7);
        assert!(second.saved_at >= first.saved_at);
    }

    #[test]
    fn toggle_removes_an_existing_bookmark() {
        let mut store = AnnotationStore::new(InMemoryStore::new());
        add(&mut store, "1", 5).unwrap();

        let result = toggle(&mut store, &book("1")).unwrap();
        assert_eq!(result.toggled_on, Some(false));
        assert_eq!(store.bookmark("1").unwrap(), None);
    }

    #[test]
    fn removing_absent_bookmark_is_not_an_error() {
        let mut store = AnnotationStore::new(InMemoryStore::new());
        let result = remove(&mut store, "never-marked").unwrap();
        assert_eq!(result.toggled_on, Some(false));
    }
}
