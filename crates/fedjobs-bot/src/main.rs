//! fedjobs - USAJOBS search bot
//!
//! Runs the Discord bot, or a single search from the terminal using the
//! same command syntax.

mod config;
mod terminal;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use fedjobs::{CommandDispatcher, UsaJobsClient};
use fedjobs_integration_discord::DiscordBot;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::BotConfig;
use terminal::TerminalSink;

#[derive(Parser)]
#[command(name = "fedjobs")]
#[command(about = "Discord bot for searching USAJOBS listings", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (defaults to ./fedjobs.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to Discord and answer commands (default)
    Run,

    /// Run one search and print the replies, e.g. `fedjobs search developer -n 5`
    Search {
        /// Keyword and flags, exactly as typed after the chat command
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = BotConfig::load(cli.config.as_deref())?;
    let client = UsaJobsClient::new(config.usajobs_config()?);
    let dispatcher = CommandDispatcher::new(Arc::new(client), config.search)
        .with_style(config.reply_style)
        .with_prefix(config.prefix.as_str());

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let discord = config.discord_config()?;
            info!(prefix = %discord.prefix, "Starting fedjobs bot");
            DiscordBot::new(discord, Arc::new(dispatcher))
                .run()
                .await
                .context("Discord client stopped with an error")?;
        }
        Commands::Search { args } => {
            let report = dispatcher.fetch_jobs(args.as_slice(), &TerminalSink).await?;
            info!(outcome = ?report.outcome, units_sent = report.units_sent, "Search finished");
        }
    }

    Ok(())
}
