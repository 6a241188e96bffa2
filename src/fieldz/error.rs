use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, FieldzError>;
