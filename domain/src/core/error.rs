//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid module: {0}")]
    InvalidModule(String),

    #[error("Message cannot be empty")]
    EmptyMessage,
}
