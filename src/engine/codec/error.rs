use thiserror::Error;

use crate::engine::types::LogicalType;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] bincode::Error),

    #[error("Data type mismatch in column {column}: declared {declared}, found {actual}")]
    TypeMismatch {
        declared: String,
        column: usize,
        actual: String,
    },

    /// Raised by a column codec when a value does not have the variant it
    /// encodes. The batch writer turns it into [`CodecError::TypeMismatch`].
    #[error("Expected a {expected} value, found {found}")]
    UnexpectedValue {
        expected: LogicalType,
        found: &'static str,
    },

    #[error("Invalid batch: {0}")]
    InvalidBatch(String),

    #[error("Corrupt batch: {0}")]
    Corrupt(String),

    #[error("{what} of {value} exceeds limit {limit}")]
    LimitExceeded {
        what: &'static str,
        value: usize,
        limit: usize,
    },
}

impl CodecError {
    pub fn is_eof(&self) -> bool {
        match self {
            CodecError::Io(e) => e.kind() == std::io::ErrorKind::UnexpectedEof,
            CodecError::Serialize(e) => matches!(
                e.as_ref(),
                bincode::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::UnexpectedEof
            ),
            _ => false,
        }
    }
}
