use anyhow::{Context, Result, bail};
use ask_client::{AskConfig, HttpAnswerGateway, QueryController, TerminalSurface, terminal};
use clap::Parser;
use std::{path::PathBuf, sync::Arc};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Send a question to an answer endpoint and print the reply.
#[derive(Debug, Parser)]
#[command(name = "ask-client", version)]
struct Cli {
    /// Question to ask. Required unless --chat is given.
    question: Option<String>,

    /// Endpoint URL (overrides ASK_ENDPOINT and config files)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Explicit TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long)]
    timeout: Option<u64>,

    /// Ask questions interactively, one per line
    #[arg(long)]
    chat: bool,

    /// Hide the loading spinner
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut config = AskConfig::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = Some(endpoint);
    }
    if cli.timeout.is_some() {
        config.timeout_secs = cli.timeout;
    }

    let gateway = Arc::new(HttpAnswerGateway::from_config(&config)?);
    info!(endpoint = %gateway.endpoint(), "client ready");

    let surface = Arc::new(TerminalSurface::new(!cli.quiet));
    let controller = QueryController::new(surface, gateway);

    if cli.chat {
        let asked = terminal::chat(&controller, BufReader::new(tokio::io::stdin())).await?;
        info!(asked, "chat session ended");
        return Ok(());
    }

    let Some(question) = cli.question else {
        bail!("Question is required. Use --chat for interactive mode.");
    };
    controller.surface().set_question(question);
    controller.ask().await.context("ask failed")?;
    Ok(())
}
