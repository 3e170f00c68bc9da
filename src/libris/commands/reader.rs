use crate::commands::CmdResult;
use crate::error::Result;
use crate::fetch::DocumentFetcher;
use crate::model::Book;
use crate::paginate;

/// Open the viewer on one page of a book: fetch the document, paginate,
/// select. Fetch, parse and empty-document failures all propagate typed.
pub fn open<F: DocumentFetcher>(fetcher: &F, book: &Book, page: usize) -> Result<CmdResult> {
    let raw = fetcher.fetch_text(&book.file)?;
    let view = paginate_and_select(&raw, page)?;
    Ok(CmdResult::default().with_page(view))
}

/// The pure half of the pipeline, applied to already-fetched text.
pub fn paginate_and_select(raw: &str, page: usize) -> Result<paginate::PageView> {
    let pages = paginate::paginate(raw)?;
    paginate::select_page(&pages, page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibrisError;
    use crate::fetch::InMemoryFetcher;

    fn book(file: &str) -> Book {
        Book {
            id: "1".to_string(),
            author: "A".to_string(),
            title: "T".to_string(),
            cover: None,
            file: file.to_string(),
            genre: None,
            description: None,
        }
    }

    #[test]
    fn opens_the_requested_page() {
        let fetcher = InMemoryFetcher::new()
            .with_document("b.fb2", "<body>Para one</body><body>Para two</body>");

        let result = open(&fetcher, &book("b.fb2"), 2).unwrap();
        let view = result.page.unwrap();
        assert_eq!(view.text, "Para two");
        assert_eq!(view.shown_page, 2);
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn missing_document_propagates_unavailable() {
        let fetcher = InMemoryFetcher::new();
        assert!(matches!(
            open(&fetcher, &book("void.fb2"), 1),
            Err(LibrisError::DocumentUnavailable(_))
        ));
    }

    #[test]
    fn broken_markup_propagates_malformed() {
        let fetcher = InMemoryFetcher::new().with_document("b.fb2", "<body>oops");
        assert!(matches!(
            open(&fetcher, &book("b.fb2"), 1),
            Err(LibrisError::MalformedDocument(_))
        ));
    }

    #[test]
    fn document_with_no_text_is_empty() {
        let fetcher = InMemoryFetcher::new().with_document("b.fb2", "<body> </body>");
        assert!(matches!(
            open(&fetcher, &book("b.fb2"), 1),
            Err(LibrisError::EmptyDocument)
        ));
    }
}
