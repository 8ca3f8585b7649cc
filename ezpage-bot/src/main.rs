use std::sync::Arc;

use tracing::{error, info};
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;

use rustls::crypto::ring::default_provider;

use ezpage_commands::{handle_interaction, handle_message};
use ezpage_core::{Config, Context};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let token = config.token.clone();
    info!(
        timeout_secs = config.timeout_secs,
        owner_only = config.owner_only,
        "configuration loaded"
    );

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(token.clone()));
    let ctx = Context::new(Arc::clone(&http), config);

    let intents = Intents::GUILDS
        | Intents::GUILD_MESSAGES
        | Intents::DIRECT_MESSAGES
        | Intents::MESSAGE_CONTENT;

    let mut shard = Shard::new(ShardId::ONE, token, intents);

    info!("ezpage is connecting...");

    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        match event {
            Event::Ready(_) => {
                info!("ezpage is ready");
            }
            Event::MessageCreate(msg) => {
                if let Err(source) = handle_message(ctx.clone(), msg).await {
                    error!(?source, "message command failed");
                }
            }
            Event::InteractionCreate(interaction) => {
                if let Err(source) = handle_interaction(ctx.clone(), interaction).await {
                    error!(?source, "interaction handling failed");
                }
            }
            // Deleted messages take their pagination session with them.
            Event::MessageDelete(deleted) => {
                ctx.sessions.remove_message(deleted.id).await;
            }
            Event::MessageDeleteBulk(deleted) => {
                for message_id in deleted.ids {
                    ctx.sessions.remove_message(message_id).await;
                }
            }
            _ => {}
        }
    }

    Ok(())
}
