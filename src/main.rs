use std::path::PathBuf;
use std::sync::Arc;

use eyre::Result;
use log::{debug, info};

mod cli;

use cli::Cli;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

fn build_after_help() -> String {
    let log_path = log_dir().join("ytsum.log");

    format!(
        "\nREQUIRED ENVIRONMENT:\n  GEMINI_API_KEY    API key used for Gemini summarization\n\nLogs are written to: {}",
        log_path.display()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = ytsum::config::Config::load().unwrap_or_default();

    if cli.verbose {
        let config_path = ytsum::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        if let Some(ref bind) = config.bind {
            debug!("Config bind: {bind}");
        }
        if let Some(ref model) = config.model {
            debug!("Config model: {model}");
        }
    }

    let api_key = std::env::var("GEMINI_API_KEY")
        .map_err(|_| eyre::eyre!("GEMINI_API_KEY not found in environment variables. Please set it."))?;

    // Apply config defaults (CLI flags take priority)
    let model = cli
        .model
        .or(config.model)
        .unwrap_or_else(|| ytsum::summarize::DEFAULT_MODEL.to_string());
    let bind = cli
        .bind
        .or(config.bind)
        .unwrap_or_else(|| ytsum::server::DEFAULT_BIND.to_string());

    if cli.verbose {
        eprintln!("Model: {model}");
    }

    let client = reqwest::Client::new();
    let state = ytsum::server::AppState {
        transcripts: Arc::new(ytsum::youtube::InnerTube::new(client.clone())),
        model: Arc::new(ytsum::summarize::Gemini::new(client, api_key, model)),
    };

    info!("Starting ytsum on {bind}");
    eprintln!("Listening on http://{bind}");

    ytsum::server::serve(&bind, state).await
}
