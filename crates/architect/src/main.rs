//! Architect CLI - Multi-modal prompt blueprint generator.
//!
//! Architect takes a raw idea and/or a media file and produces a structured
//! prompt blueprint through one Gemini call: an expert analysis, the
//! optimized prompt, and a pro tip. Commentary goes to stderr; the
//! ready-to-use prompt goes to stdout so it pipes cleanly.
//!
//! # Usage
//!
//! ```bash
//! # Blueprint an idea
//! architect generate "a lighthouse at dusk"
//!
//! # Deconstruct a reference image
//! architect generate --media ./reference.png "match this lighting"
//!
//! # Midjourney-ready output
//! architect generate "a lighthouse at dusk" --export midjourney
//!
//! # Guided mode
//! architect
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Architect - Multi-modal prompt blueprint generator.
#[derive(Parser, Debug)]
#[command(name = "architect")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a prompt blueprint from an idea and/or media file
    Generate(cli::generate::GenerateArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI flag overrides.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match architect_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `architect config path`."
            );
            architect_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Architect v{}", architect_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Some(Commands::Generate(args)) => cli::generate::execute(args, &config).await,
        Some(Commands::Config(args)) => cli::config::execute(args).await,
        None => {
            if console::user_attended() {
                cli::interactive::run(&config).await
            } else {
                anyhow::bail!(
                    "No command given and no terminal attached.\n\
                     Try `architect generate \"your idea\"` or `architect --help`."
                )
            }
        }
    }
}
