//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for ai-chatbot-mentor
#[derive(Parser, Debug)]
#[command(name = "ai-chatbot-mentor")]
#[command(author, version, about = "Module-scoped AI mentor for data and AI learners")]
#[command(long_about = r#"
AI Chatbot Mentor answers questions about one learning module at a time.

Pick a module (Python, SQL, Power BI, EDA, ML, DL, Gen AI, Agentic AI) and
chat with a Gemini-backed mentor that stays within that module. Questions
outside the module get a polite refusal.

The Gemini API key is read from GEMINI_API_KEY (a .env file in the current
directory is loaded first).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./mentor.toml       Project-level config
3. ~/.config/ai-chatbot-mentor/config.toml   Global config

Example:
  ai-chatbot-mentor
  ai-chatbot-mentor --module sql
  ai-chatbot-mentor -m "Machine Learning (ML)" --model gemini-2.5-flash
"#)]
pub struct Cli {
    /// Learning module to start with (skips the selection screen)
    #[arg(short, long, value_name = "MODULE")]
    pub module: Option<String>,

    /// List the available modules and exit
    #[arg(long)]
    pub list_modules: bool,

    /// Gemini model identifier
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature (0.0 - 2.0)
    #[arg(long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Maximum number of tokens per reply
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Wait for the whole reply instead of streaming it
    #[arg(long)]
    pub no_stream: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append session events as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
