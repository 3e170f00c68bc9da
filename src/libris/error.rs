use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("Book scan failed: {0}")]
    ScanFailed(String),

    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Store read failed: {0}")]
    StoreRead(String),

    #[error("Store write failed: {0}")]
    StoreWrite(String),

    #[error("Document unavailable: {0}")]
    DocumentUnavailable(String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Document has no pages")]
    EmptyDocument,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, LibrisError>;
