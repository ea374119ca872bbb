//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A user message submitted to the mentor (Value Object)
///
/// Guaranteed to contain at least one non-whitespace character. The text is
/// kept exactly as typed; only the emptiness check looks at trimmed content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Validate and wrap user text
    pub fn parse(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyMessage)
        } else {
            Ok(Self { content })
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
