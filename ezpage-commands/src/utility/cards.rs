use twilight_model::{channel::message::embed::Embed, gateway::payload::incoming::MessageCreate};

use crate::CommandMeta;
use crate::utility::help::sorted_commands;
use ezpage_core::Context;
use ezpage_utils::{
    embed::build_card_embed,
    pagination::{CardPaginator, send_paginated_message},
};

pub const META: CommandMeta = CommandMeta {
    name: "cards",
    desc: "Browse every command as a card, one page each.",
    category: "pagination",
    usage: "!cards",
};

/// Send one card per command with previous/next controls.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let cards = command_cards()?;
    let pager = CardPaginator::cards(cards, ctx.config.timeout_secs)?;

    send_paginated_message(
        ctx.http.clone(),
        ctx.sessions.clone(),
        msg.channel_id,
        Box::new(pager),
        ctx.session_owner(msg.author.id.get()),
    )
    .await
}

fn command_cards() -> anyhow::Result<Vec<Embed>> {
    let commands = sorted_commands();
    let total = commands.len();

    commands
        .iter()
        .enumerate()
        .map(|(index, cmd)| {
            let position = format!("{}/{}", index + 1, total);
            build_card_embed(
                cmd.name,
                cmd.desc,
                &[
                    ("Category", cmd.category),
                    ("Usage", cmd.usage),
                    ("Card", position.as_str()),
                ],
            )
        })
        .collect()
}
