//! Discord Integration for fedjobs
//!
//! Connects the fedjobs command pipeline to a Discord bot: prefix commands
//! arrive through the serenity gateway, and replies go back to the channel
//! they came from.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fedjobs_integration_discord::{DiscordBot, DiscordConfig};
//!
//! let config = DiscordConfig::new("your-bot-token").with_prefix("%");
//! DiscordBot::new(config, Arc::new(dispatcher)).run().await?;
//! ```

mod client;
mod command;
mod config;
mod handler;

pub use client::{job_embed, ChannelReplySink};
pub use command::{parse_invocation, Command, Invocation};
pub use config::DiscordConfig;
pub use handler::{DiscordBot, JobsHandler};
