//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on use.

mod generation;
mod output;
mod provider;
mod repl;
mod session;

pub use generation::FileGenerationConfig;
pub use output::{FileExportConfig, FileLoggingConfig};
pub use provider::FileProviderConfig;
pub use repl::FileReplConfig;
pub use session::FileSessionConfig;

use mentor_domain::{ConfigIssue, Module};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini API connection
    pub provider: FileProviderConfig,
    /// Model and sampling settings
    pub generation: FileGenerationConfig,
    /// Context window and default module
    pub session: FileSessionConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript download settings
    pub export: FileExportConfig,
    /// Structured logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.generation.to_generation_config().1;

        if self.session.context_window == 0 {
            issues.push(ConfigIssue::error(
                "session.context_window",
                "must be at least 1",
            ));
        }

        if let Some(name) = &self.session.default_module
            && name.parse::<Module>().is_err()
        {
            issues.push(ConfigIssue::error(
                "session.default_module",
                format!("unknown module '{}'", name),
            ));
        }

        if self.provider.api_key_env.trim().is_empty() && self.provider.api_key.is_none() {
            issues.push(ConfigIssue::error(
                "provider.api_key_env",
                "no API key source configured",
            ));
        }

        if self.provider.timeout_secs == Some(0) {
            issues.push(ConfigIssue::warning(
                "provider.timeout_secs",
                "a zero timeout fails every request; remove it to disable the timeout",
            ));
        }

        if self.provider.api_key.is_some() {
            issues.push(ConfigIssue::warning(
                "provider.api_key",
                "API key stored in a config file; prefer the environment variable",
            ));
        }

        issues
    }
}
