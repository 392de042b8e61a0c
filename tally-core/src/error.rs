use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unknown item: {0}")]
    UnknownItem(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, TallyError>;
