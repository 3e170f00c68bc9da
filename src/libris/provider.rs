use crate::error::{LibrisError, Result};
use crate::model::Book;
use once_cell::sync::Lazy;
use std::fs;
use std::path::PathBuf;

/// Source of the book catalog. In a real deployment this would be a server
/// scanning a books folder; here it is a local stand-in.
pub trait BookProvider {
    fn list_books(&self) -> Result<Vec<Book>>;
}

/// Reads the catalog from `books.json` (an array of books) in the shelf
/// directory. Any failure to read or parse is a scan failure.
pub struct JsonShelf {
    shelf_dir: PathBuf,
}

impl JsonShelf {
    pub fn new(shelf_dir: PathBuf) -> Self {
        Self { shelf_dir }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.shelf_dir.join("books.json")
    }

    pub fn exists(&self) -> bool {
        self.catalog_path().exists()
    }
}

impl BookProvider for JsonShelf {
    fn list_books(&self) -> Result<Vec<Book>> {
        let path = self.catalog_path();
        let content = fs::read_to_string(&path)
            .map_err(|e| LibrisError::ScanFailed(format!("{}: {}", path.display(), e)))?;
        let books: Vec<Book> = serde_json::from_str(&content)
            .map_err(|e| LibrisError::ScanFailed(format!("{}: {}", path.display(), e)))?;
        Ok(books)
    }
}

static DEMO_BOOKS: Lazy<Vec<Book>> = Lazy::new(|| {
    vec![Book {
        id: "1".to_string(),
        author: "Джек Лондон".to_string(),
        title: "Сердца трех".to_string(),
        cover: Some("books/Лондон Джек/Сердца трех/Сердца трех.jpg".to_string()),
        file: "books/Лондон Джек/Сердца трех/book.fb2".to_string(),
        genre: Some("fiction".to_string()),
        description: Some(
            "Приключенческий роман Джека Лондона о поисках сокровищ и любви.".to_string(),
        ),
    }]
});

/// Built-in demo catalog, used when no shelf has been configured yet.
#[derive(Default)]
pub struct DemoShelf;

impl BookProvider for DemoShelf {
    fn list_books(&self) -> Result<Vec<Book>> {
        Ok(DEMO_BOOKS.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_shelf_lists_books() {
        let books = DemoShelf.list_books().unwrap();
        assert!(!books.is_empty());
        assert_eq!(books[0].id, "1");
    }

    #[test]
    fn json_shelf_reads_catalog() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(
            temp.path().join("books.json"),
            r#"[{"id":"7","author":"A","title":"T","file":"t.fb2"}]"#,
        )
        .unwrap();

        let shelf = JsonShelf::new(temp.path().to_path_buf());
        let books = shelf.list_books().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, "7");
        assert_eq!(books[0].genre, None);
    }

    #[test]
    fn missing_catalog_is_scan_failure() {
        let shelf = JsonShelf::new(PathBuf::from("/definitely/not/here"));
        assert!(matches!(
            shelf.list_books(),
            Err(LibrisError::ScanFailed(_))
        ));
    }

    #[test]
    fn invalid_catalog_is_scan_failure() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("books.json"), "{\"oops\":").unwrap();

        let shelf = JsonShelf::new(temp.path().to_path_buf());
        assert!(matches!(
            shelf.list_books(),
            Err(LibrisError::ScanFailed(_))
        ));
    }
}
