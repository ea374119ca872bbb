//! CLI entrypoint for AI Chatbot Mentor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use mentor_application::{SessionController, SessionParams};
use mentor_domain::{GenerationConfig, Model, Module};
use mentor_infrastructure::{
    ConfigLoader, FileConfig, GeminiGateway, JsonlConversationLogger, resolve_api_key,
};
use mentor_presentation::{Cli, ConsoleFormatter, MentorRepl, ReplConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _log_guard = init_tracing(&cli)?;

    info!("Starting AI Chatbot Mentor");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    if cli.list_modules {
        print!("{}", ConsoleFormatter::module_menu());
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&config)?;

    let generation = apply_overrides(&cli, config.generation.to_generation_config().0)?;
    let initial_module = match cli.module.as_deref().or(config.session.default_module.as_deref()) {
        Some(name) => Some(name.parse::<Module>()?),
        None => None,
    };

    // === Dependency Injection ===
    let api_key = resolve_api_key(&config.provider)?;
    let gateway = Arc::new(GeminiGateway::from_config(&config.provider, api_key)?);
    info!(
        "Using model {} (streaming: {})",
        generation.model, generation.streaming
    );

    let params = SessionParams::default()
        .with_context_window(config.session.context_window)
        .with_generation(generation);
    let mut controller = SessionController::new(gateway, params);

    let conversation_log = cli
        .conversation_log
        .clone()
        .or_else(|| config.logging.conversation_log.as_ref().map(PathBuf::from));
    if let Some(path) = conversation_log
        && let Some(logger) = JsonlConversationLogger::open(&path)
    {
        info!("Conversation log: {}", logger.path().display());
        controller = controller.with_conversation_logger(Arc::new(logger));
    }

    let repl_config = ReplConfig::default()
        .with_progress(config.repl.show_progress && !cli.quiet)
        .with_history_file(config.repl.history_file.as_ref().map(PathBuf::from))
        .with_export_dir(
            config
                .export
                .directory
                .as_deref()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        );

    MentorRepl::new(controller, repl_config)
        .run(initial_module)
        .await?;

    Ok(())
}

/// Install the tracing subscriber; the guard must live until exit when
/// logging to a file.
fn init_tracing(cli: &Cli) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .context("--log-file must name a file, not a directory")?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// Warn about soft issues, fail on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue);
    }

    let errors: Vec<String> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.to_string())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}

/// Command-line flags take precedence over config values.
fn apply_overrides(cli: &Cli, mut generation: GenerationConfig) -> Result<GenerationConfig> {
    if let Some(name) = cli.model.as_deref() {
        if name.trim().is_empty() {
            bail!("--model cannot be empty");
        }
        let Ok(model) = name.trim().parse::<Model>();
        generation = generation.with_model(model);
    }
    if let Some(temperature) = cli.temperature {
        if !(0.0..=2.0).contains(&temperature) {
            bail!("--temperature must be between 0.0 and 2.0, got {}", temperature);
        }
        generation = generation.with_temperature(temperature);
    }
    if let Some(max_tokens) = cli.max_tokens {
        if max_tokens == 0 {
            bail!("--max-tokens must be at least 1");
        }
        generation = generation.with_max_output_tokens(max_tokens);
    }
    if cli.no_stream {
        generation = generation.with_streaming(false);
    }
    Ok(generation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ai-chatbot-mentor").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let generation = apply_overrides(&cli(&[]), GenerationConfig::default()).unwrap();
        assert_eq!(generation, GenerationConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let generation = apply_overrides(
            &cli(&["--model", "gemini-2.5-pro", "--temperature", "1.0", "--max-tokens", "64", "--no-stream"]),
            GenerationConfig::default(),
        )
        .unwrap();
        assert_eq!(generation.model, Model::Gemini25Pro);
        assert_eq!(generation.temperature, 1.0);
        assert_eq!(generation.max_output_tokens, 64);
        assert!(!generation.streaming);
    }

    #[test]
    fn test_invalid_overrides_rejected() {
        assert!(apply_overrides(&cli(&["--temperature", "3.5"]), GenerationConfig::default()).is_err());
        assert!(apply_overrides(&cli(&["--max-tokens", "0"]), GenerationConfig::default()).is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(check_config(&FileConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = FileConfig::default();
        config.session.context_window = 0;
        let err = check_config(&config).unwrap_err().to_string();
        assert!(err.contains("session.context_window"));
    }
}
