//! Session domain entities

use crate::core::module::Module;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::export;
use super::window::ContextWindow;

/// Author of a turn in the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Speaker label used in the context window and the exported transcript
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Mentor",
        }
    }
}

/// One message in the transcript (Entity)
///
/// Turns are never edited after being appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: None,
        }
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A mentoring session scoped to a single module (Entity)
///
/// The transcript only grows; there is no API to remove or rewrite turns.
/// Re-selecting a module means building a new `Session`.
#[derive(Debug, Clone)]
pub struct Session {
    module: Module,
    transcript: Vec<Turn>,
}

impl Session {
    pub fn new(module: Module) -> Self {
        Self {
            module,
            transcript: Vec::new(),
        }
    }

    pub fn module(&self) -> Module {
        self.module
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    pub fn append(&mut self, turn: Turn) {
        self.transcript.push(turn);
    }

    /// The most recent `size` turns, oldest first
    pub fn context_window(&self, size: usize) -> ContextWindow<'_> {
        ContextWindow::from_transcript(&self.transcript, size)
    }

    /// Plain-text transcript for download
    pub fn export_text(&self) -> String {
        export::export_text(&self.transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new(Module::Sql);
        assert_eq!(session.module(), Module::Sql);
        assert!(session.is_empty());
        assert_eq!(session.export_text(), "");
    }

    #[test]
    fn test_append_preserves_order() {
        let mut session = Session::new(Module::Python);
        session.append(Turn::user("What is a tuple?"));
        session.append(Turn::assistant("An immutable sequence."));

        let roles: Vec<Role> = session.transcript().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
        assert_eq!(session.transcript()[1].content, "An immutable sequence.");
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "User");
        assert_eq!(Role::Assistant.label(), "Mentor");
    }

    #[test]
    fn test_turn_timestamp_is_optional_in_json() {
        let json = serde_json::to_value(Turn::user("hi")).unwrap();
        assert_eq!(json["role"], "user");
        assert!(json.get("timestamp").is_none());

        let stamped = Turn::assistant("hello").at(Utc::now());
        let json = serde_json::to_value(stamped).unwrap();
        assert!(json.get("timestamp").is_some());
    }
}
