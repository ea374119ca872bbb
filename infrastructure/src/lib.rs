//! Infrastructure layer for ai-chatbot-mentor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Gemini gateway, the JSONL conversation
//! logger, configuration file loading and API key resolution.

pub mod config;
pub mod credentials;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileExportConfig, FileGenerationConfig, FileLoggingConfig,
    FileProviderConfig, FileReplConfig, FileSessionConfig,
};
pub use credentials::{ApiKey, CredentialError, resolve_api_key};
pub use logging::JsonlConversationLogger;
pub use providers::GeminiGateway;
