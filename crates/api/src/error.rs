use thiserror::Error;

pub type Result<T> = std::result::Result<T, LexicalError>;

#[derive(Error, Debug)]
pub enum LexicalError {
    #[error("Operation '{operation}' is not supported by the {backend} backend: {reason}")]
    Unsupported {
        backend: &'static str,
        operation: &'static str,
        reason: String,
    },

    #[error("Model error: {0}")]
    Model(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LexicalError {
    pub fn unsupported(
        backend: &'static str,
        operation: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::Unsupported {
            backend,
            operation,
            reason: reason.into(),
        }
    }

    /// True for errors that signal a missing capability rather than a failure.
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}
