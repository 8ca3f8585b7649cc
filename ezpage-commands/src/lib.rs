pub mod utility;

use tracing::debug;
use twilight_model::{
    application::interaction::InteractionData,
    gateway::payload::incoming::{InteractionCreate, MessageCreate},
};

use ezpage_core::Context;
use ezpage_utils::{COMMAND_PREFIX, pagination::handle_navigation_interaction};

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::cards::META,
    utility::images::META,
    utility::text::META,
    // Add new commands here
];

/// Split `!command rest...` into a lowercase command name and its raw remainder.
fn parse_command(content: &str) -> Option<(String, Option<&str>)> {
    let content = content.trim().strip_prefix(COMMAND_PREFIX)?.trim_start();
    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    if cmd.is_empty() {
        return None;
    }

    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    Some((cmd, rest))
}

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content = msg.content.clone();
    let Some((cmd, rest)) = parse_command(&content) else {
        return Ok(());
    };

    match cmd.as_str() {
        "help" => utility::help::run(ctx.clone(), msg).await?,
        "cards" => utility::cards::run(ctx.clone(), msg).await?,
        "images" => utility::images::run(ctx.clone(), msg, rest).await?,
        "text" => utility::text::run(ctx.clone(), msg, rest).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}

pub async fn handle_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<()> {
    if !matches!(
        interaction.data.as_ref(),
        Some(InteractionData::MessageComponent(_))
    ) {
        return Ok(());
    }

    let handled =
        handle_navigation_interaction(ctx.http.clone(), ctx.sessions.clone(), &interaction)
            .await?;
    if !handled {
        debug!(interaction_id = interaction.id.get(), "unrouted component interaction");
    }

    Ok(())
}
