//! Discord configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Discord bot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token
    pub token: String,
    /// Command prefix, e.g. `%` for `%fetchjobs`
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Whether to answer commands sent as direct messages
    #[serde(default = "default_true")]
    pub respond_to_dms: bool,
}

fn default_prefix() -> String {
    fedjobs::application::dispatcher::DEFAULT_PREFIX.to_string()
}

fn default_true() -> bool {
    true
}

impl DiscordConfig {
    /// Create a new Discord configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Self::default()
        }
    }

    /// Set the command prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enable or disable direct message commands
    pub fn with_dms(mut self, enable: bool) -> Self {
        self.respond_to_dms = enable;
        self
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            prefix: default_prefix(),
            respond_to_dms: true,
        }
    }
}
