use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorModelError>;

#[derive(Error, Debug)]
pub enum VectorModelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Malformed binary model: {0}")]
    Binary(String),

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Model contains no vectors")]
    Empty,
}
