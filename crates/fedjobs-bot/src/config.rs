//! Configuration loading for the fedjobs bot
//!
//! Settings come from an optional TOML file, then environment variables
//! (including a `.env` file loaded by `main`) override individual values.

use anyhow::{Context, Result};
use fedjobs::{ReplyStyle, SearchLimits, UsaJobsConfig};
use fedjobs_integration_discord::DiscordConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File looked up in the working directory when `--config` is not given
const DEFAULT_CONFIG_FILE: &str = "fedjobs.toml";

pub const ENV_DISCORD_TOKEN: &str = "DISCORD_TOKEN";
pub const ENV_USAJOBS_API_KEY: &str = "USAJOBS_API_KEY";
pub const ENV_USAJOBS_EMAIL: &str = "USAJOBS_EMAIL";
pub const ENV_USAJOBS_ENDPOINT: &str = "USAJOBS_ENDPOINT";
pub const ENV_PREFIX: &str = "FEDJOBS_PREFIX";
pub const ENV_MAX_RESULTS: &str = "FEDJOBS_MAX_RESULTS";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default = "default_true")]
    pub respond_to_dms: bool,
}

impl Default for DiscordSection {
    fn default() -> Self {
        Self {
            token: None,
            respond_to_dms: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsaJobsSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Contact email sent as the User-Agent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_true() -> bool {
    true
}

fn default_prefix() -> String {
    fedjobs::application::dispatcher::DEFAULT_PREFIX.to_string()
}

/// Bot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub reply_style: ReplyStyle,
    #[serde(default)]
    pub discord: DiscordSection,
    #[serde(default)]
    pub usajobs: UsaJobsSection,
    #[serde(default)]
    pub search: SearchLimits,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            reply_style: ReplyStyle::default(),
            discord: DiscordSection::default(),
            usajobs: UsaJobsSection::default(),
            search: SearchLimits::default(),
        }
    }
}

impl BotConfig {
    /// Load from `path`, or from `fedjobs.toml` if present, then apply
    /// environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse config file {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Override values with those found by `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = lookup(ENV_DISCORD_TOKEN) {
            self.discord.token = Some(token);
        }
        if let Some(key) = lookup(ENV_USAJOBS_API_KEY) {
            self.usajobs.api_key = Some(key);
        }
        if let Some(email) = lookup(ENV_USAJOBS_EMAIL) {
            self.usajobs.email = Some(email);
        }
        if let Some(endpoint) = lookup(ENV_USAJOBS_ENDPOINT) {
            self.usajobs.endpoint = Some(endpoint);
        }
        if let Some(prefix) = lookup(ENV_PREFIX) {
            self.prefix = prefix;
        }
        if let Some(max) = lookup(ENV_MAX_RESULTS) {
            let max: u32 = max
                .trim()
                .parse()
                .with_context(|| format!("{} must be a positive integer", ENV_MAX_RESULTS))?;
            self.search = self.search.with_max_result_count(max);
        }

        Ok(())
    }

    /// USAJOBS client settings; fails when credentials are missing
    pub fn usajobs_config(&self) -> Result<UsaJobsConfig> {
        let api_key = self.usajobs.api_key.clone().with_context(|| {
            format!(
                "No USAJOBS API key configured. Set {} or usajobs.api_key",
                ENV_USAJOBS_API_KEY
            )
        })?;
        let email = self.usajobs.email.clone().with_context(|| {
            format!(
                "No USAJOBS contact email configured. Set {} or usajobs.email",
                ENV_USAJOBS_EMAIL
            )
        })?;

        let mut config = UsaJobsConfig::new(api_key, email);
        if let Some(endpoint) = &self.usajobs.endpoint {
            config = config.with_endpoint(endpoint.as_str());
        }
        if let Some(secs) = self.usajobs.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config.validate()?;
        Ok(config)
    }

    /// Discord settings; fails when no bot token is configured
    pub fn discord_config(&self) -> Result<DiscordConfig> {
        let token = self.discord.token.clone().with_context(|| {
            format!(
                "No Discord token configured. Set {} or discord.token",
                ENV_DISCORD_TOKEN
            )
        })?;

        Ok(DiscordConfig::new(token)
            .with_prefix(self.prefix.as_str())
            .with_dms(self.discord.respond_to_dms))
    }
}
