//! Configuration file loading for ai-chatbot-mentor
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `MENTOR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./mentor.toml` or `./.mentor.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ai-chatbot-mentor/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileExportConfig, FileGenerationConfig, FileLoggingConfig, FileProviderConfig,
    FileReplConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
