//! Main entry point for the Yandex Translate CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

use cli::commands::Commands;
use yandex_translate::ClientConfig;

/// Yandex Translate and Dictionary from the command line
#[derive(Parser, Debug)]
#[command(name = "yandex-translate", version, about, long_about = None)]
struct Args {
    /// API key (optional, defaults to YANDEX_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// API version (defaults to YANDEX_API_VERSION or v1)
    #[arg(long)]
    api_version: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(log_filter(args.verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Execute command
    match args.command {
        Some(Commands::Translate { from, to, text }) => {
            let config = load_config(args.api_key, args.api_version)?;
            cli::commands::handle_translate(config, from, to, text).await?;
        }
        Some(Commands::Lookup { from, to, text }) => {
            let config = load_config(args.api_key, args.api_version)?;
            cli::commands::handle_lookup(config, from, to, text).await?;
        }
        Some(Commands::Languages) => {
            cli::commands::handle_languages();
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}

/// `-v` forces debug output, even when RUST_LOG is set
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("yandex_translate=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yandex_translate=info"))
    }
}

/// Environment configuration with CLI overrides applied
fn load_config(
    api_key: Option<String>,
    api_version: Option<String>,
) -> anyhow::Result<ClientConfig> {
    let mut config = match api_key {
        Some(key) => ClientConfig::from_env_with_key(key)?,
        None => ClientConfig::from_env()?,
    };

    if let Some(version) = api_version {
        config.api_version = version;
    }

    Ok(config)
}
