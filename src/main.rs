mod commands;
mod config;
mod error;
mod ingest;
mod pagination;
mod services;

use std::sync::Arc;

use serenity::{
    async_trait,
    client::{Client, Context, EventHandler},
    framework::standard::StandardFramework,
    model::gateway::Ready,
    prelude::GatewayIntents,
};
use tokio::signal;

use crate::commands::META_GROUP;
use crate::config::BotConfig;
use crate::services::MetaServices;

// Event handler implementation
struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _: Context, ready: Ready) {
        log::info!("✅ Bot connected as {}! ({} guilds)", ready.user.name, ready.guilds.len());
    }
}

#[tokio::main]
async fn main() {
    // Configuration decides the default log filter, so read it before the logger starts
    let config = BotConfig::load();
    let default_filter = config
        .as_ref()
        .map(|(c, _)| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .init();

    let config = match config {
        Ok((config, path)) => {
            log::info!("📄 Loaded configuration from {}", path);
            config
        }
        Err(error) => {
            log::error!("❌ Failed to load botconfig.txt: {}", error);
            eprintln!("Create a botconfig.txt file in the project root with: DISCORD_TOKEN=your_token_here and PREFIX=^");
            return;
        }
    };
    log::info!("🤖 Starting bot with prefix: '{}'", config.prefix);

    // Every collaborator is built here once and shared through the client data
    let services = match MetaServices::from_config(&config) {
        Ok(services) => Arc::new(services),
        Err(e) => {
            log::error!("❌ Failed to set up command services: {}", e);
            return;
        }
    };

    let framework = StandardFramework::new()
        .configure(|c| {
            c.prefix(&config.prefix)
                .case_insensitivity(true)
                .with_whitespace(true)
        })
        .after(|_ctx, msg, command_name, result| Box::pin(async move {
            match result {
                Ok(()) => {
                    log::debug!("✅ Command '{}' executed for user {} ({})",
                        command_name, msg.author.name, msg.author.id);
                }
                Err(e) => {
                    log::error!("❌ Command '{}' failed for user {} ({}): {:?}",
                        command_name, msg.author.name, msg.author.id, e);
                }
            }
        }))
        .group(&META_GROUP);

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    let mut client = match Client::builder(&config.token, intents)
        .event_handler(Handler)
        .framework(framework)
        .await
    {
        Ok(client) => client,
        Err(e) => {
            log::error!("❌ Error creating Discord client: {:?}", e);
            eprintln!("Check your token in botconfig.txt file");
            return;
        }
    };

    {
        let mut data = client.data.write().await;
        data.insert::<MetaServices>(services);
    }

    log::info!("🚀 Bot is running... Press Ctrl+C to stop");
    tokio::select! {
        _ = signal::ctrl_c() => {
            log::info!("⏹️ Stopping bot gracefully...");
        }
        result = client.start() => {
            if let Err(why) = result {
                log::error!("❌ Client error: {:?}", why);
            }
        }
    }

    log::info!("✅ Bot stopped");
}
