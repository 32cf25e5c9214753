use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldbookError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unrecognized response shape: {0}")]
    UnexpectedShape(String),

    #[error("Transport error: {0}")]
    Transport(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type FieldbookResult<T> = Result<T, FieldbookError>;
