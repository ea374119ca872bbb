//! Export and logging configuration from TOML (`[export]`, `[logging]`)

use serde::{Deserialize, Serialize};

/// Where downloaded transcripts are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExportConfig {
    /// Target directory; the working directory when unset
    pub directory: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving structured conversation events
    pub conversation_log: Option<String>,
}
