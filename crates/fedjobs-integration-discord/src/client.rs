//! Discord reply sink

use async_trait::async_trait;
use fedjobs::{DomainError, JobCard, ReplySink, ReplyUnit};
use serenity::builder::{CreateEmbed, CreateEmbedFooter, CreateMessage};
use serenity::http::Http;
use serenity::model::id::ChannelId;
use std::sync::Arc;
use tracing::{debug, error};

const EMBED_COLOUR: u32 = 0x112e51;

/// Sends reply units to the channel a command came from
pub struct ChannelReplySink {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl ChannelReplySink {
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }

    async fn send_text(&self, content: &str) -> Result<(), serenity::Error> {
        debug!(channel_id = %self.channel_id, content_len = %content.len(), "Sending message to Discord");

        self.channel_id
            .say(&self.http, content)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send Discord message"))?;

        Ok(())
    }

    async fn send_card(&self, card: &JobCard) -> Result<(), serenity::Error> {
        debug!(channel_id = %self.channel_id, title = %card.title, "Sending job embed to Discord");

        self.channel_id
            .send_message(&self.http, CreateMessage::new().embed(job_embed(card)))
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send Discord embed"))?;

        Ok(())
    }
}

#[async_trait]
impl ReplySink for ChannelReplySink {
    async fn send(&self, unit: &ReplyUnit) -> Result<(), DomainError> {
        let result = match unit {
            ReplyUnit::Text { content } => self.send_text(content).await,
            ReplyUnit::Card(card) => self.send_card(card).await,
        };
        result.map_err(|e| DomainError::ExternalService(format!("Discord API error: {}", e)))
    }
}

/// Build the embed shown for one job listing
pub fn job_embed(card: &JobCard) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(card.title.as_str())
        .colour(EMBED_COLOUR)
        .field("Location", card.location.as_str(), true)
        .field("Hiring paths", card.hiring_paths.as_str(), true);

    if let Some(url) = &card.url {
        embed = embed.url(url.as_str());
    }
    if let Some(organization) = &card.organization {
        embed = embed.footer(CreateEmbedFooter::new(organization.as_str()));
    }

    embed
}
