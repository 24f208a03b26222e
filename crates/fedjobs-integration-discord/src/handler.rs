//! Gateway event handler and bot runner

use async_trait::async_trait;
use fedjobs::{CommandDispatcher, JobSearchService};
use serenity::client::{Client, Context, EventHandler};
use serenity::model::channel::Message;
use serenity::model::gateway::{GatewayIntents, Ready};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::client::ChannelReplySink;
use crate::command::{parse_invocation, Command};
use crate::config::DiscordConfig;

/// Routes prefix commands to the job search dispatcher
pub struct JobsHandler<S: JobSearchService> {
    dispatcher: Arc<CommandDispatcher<S>>,
    config: DiscordConfig,
}

impl<S: JobSearchService> JobsHandler<S> {
    pub fn new(dispatcher: Arc<CommandDispatcher<S>>, config: DiscordConfig) -> Self {
        Self { dispatcher, config }
    }

    /// Whether a message should be considered at all
    fn accepts(&self, msg: &Message) -> bool {
        if msg.author.bot {
            return false;
        }
        msg.guild_id.is_some() || self.config.respond_to_dms
    }
}

#[async_trait]
impl<S: JobSearchService + 'static> EventHandler for JobsHandler<S> {
    async fn message(&self, ctx: Context, msg: Message) {
        if !self.accepts(&msg) {
            return;
        }

        let Some(invocation) = parse_invocation(&self.config.prefix, &msg.content) else {
            return;
        };

        debug!(
            command = ?invocation.command,
            channel_id = %msg.channel_id,
            user = %msg.author.name,
            "Received command"
        );

        let sink = ChannelReplySink::new(ctx.http.clone(), msg.channel_id);
        let result = match invocation.command {
            Command::FetchJobs => {
                self.dispatcher
                    .fetch_jobs(invocation.args.as_slice(), &sink)
                    .await
            }
            Command::FetchCybersecurity => self.dispatcher.fetch_preset(&sink).await,
            Command::Hello => self.dispatcher.hello(&sink).await,
            Command::Help => self.dispatcher.help(&sink).await,
        };

        match result {
            Ok(report) => info!(
                command = ?invocation.command,
                outcome = ?report.outcome,
                units_sent = report.units_sent,
                "Command handled"
            ),
            Err(e) => error!(command = ?invocation.command, error = %e, "Command reply failed"),
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, prefix = %self.config.prefix, "Ready to start receiving commands");
    }
}

/// Discord bot wiring a dispatcher to the gateway
pub struct DiscordBot<S: JobSearchService> {
    config: DiscordConfig,
    dispatcher: Arc<CommandDispatcher<S>>,
}

impl<S: JobSearchService + 'static> DiscordBot<S> {
    pub fn new(config: DiscordConfig, dispatcher: Arc<CommandDispatcher<S>>) -> Self {
        Self { config, dispatcher }
    }

    fn intents() -> GatewayIntents {
        GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }

    /// Connect to the gateway and handle commands until shutdown
    pub async fn run(self) -> Result<(), serenity::Error> {
        let handler = JobsHandler::new(self.dispatcher, self.config.clone());

        let mut client = Client::builder(&self.config.token, Self::intents())
            .event_handler(handler)
            .await?;

        info!("Connecting to Discord gateway");
        client.start().await
    }
}
