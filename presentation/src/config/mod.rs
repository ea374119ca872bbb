//! Presentation-level configuration
//!
//! Configuration for REPL behavior and transcript downloads.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show a spinner while waiting for the first part of a reply
    pub show_progress: bool,
    /// Path to history file; without one, history lives only in memory
    pub history_file: Option<PathBuf>,
    /// Directory `/download` writes transcripts into
    pub export_dir: PathBuf,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            export_dir: PathBuf::from("."),
        }
    }
}

impl ReplConfig {
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }
}
