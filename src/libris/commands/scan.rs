use crate::commands::{CmdMessage, CmdResult};
use crate::model::Book;
use crate::provider::BookProvider;

/// Load the catalog from the provider. A scan failure yields an empty
/// collection plus a reported error, never a silently-empty success.
pub fn run<P: BookProvider>(provider: &P) -> (Vec<Book>, CmdResult) {
    match provider.list_books() {
        Ok(books) => {
            let mut result = CmdResult::default();
            if books.is_empty() {
                result.add_message(CmdMessage::info("The shelf is empty."));
            }
            (books, result)
        }
        Err(e) => {
            let result = CmdResult::default()
                .with_message(CmdMessage::error(format!("Could not load book list: {}", e)));
            (Vec::new(), result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LibrisError, Result};
    use crate::provider::DemoShelf;

    struct FailingShelf;

    impl BookProvider for FailingShelf {
        fn list_books(&self) -> Result<Vec<Book>> {
            Err(LibrisError::ScanFailed("disk on fire".to_string()))
        }
    }

    #[test]
    fn loads_books_from_provider() {
        let (books, result) = run(&DemoShelf);
        assert!(!books.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn scan_failure_reports_error_with_empty_collection() {
        let (books, result) = run(&FailingShelf);
        assert!(books.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("disk on fire"));
    }
}
