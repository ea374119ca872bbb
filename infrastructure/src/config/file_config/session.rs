//! Session configuration from TOML (`[session]` section)

use mentor_domain::DEFAULT_CONTEXT_WINDOW;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Number of recent turns replayed to the model
    pub context_window: usize,
    /// Module to start with instead of showing the selection screen
    pub default_module: Option<String>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            context_window: DEFAULT_CONTEXT_WINDOW,
            default_module: None,
        }
    }
}
