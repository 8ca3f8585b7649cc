use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use ezpage_core::Context;
use ezpage_utils::{
    pagination::{TextPaginator, send_paginated_message},
    text::chunk_text,
};

pub const META: CommandMeta = CommandMeta {
    name: "text",
    desc: "Split long text into pages.",
    category: "pagination",
    usage: "!text <text>",
};

/// Characters per text page, well under Discord's message content limit.
const TEXT_PAGE_CHARS: usize = 500;

/// Paginate the given text, splitting on line and word boundaries.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, rest: Option<&str>) -> anyhow::Result<()> {
    let pages = rest
        .map(|text| chunk_text(text, TEXT_PAGE_CHARS))
        .unwrap_or_default();

    if pages.is_empty() {
        let usage = format!("Usage: `{}`", META.usage);
        ctx.http.create_message(msg.channel_id).content(&usage).await?;
        return Ok(());
    }

    let pager = TextPaginator::text(pages, ctx.config.timeout_secs)?;

    send_paginated_message(
        ctx.http.clone(),
        ctx.sessions.clone(),
        msg.channel_id,
        Box::new(pager),
        ctx.session_owner(msg.author.id.get()),
    )
    .await
}
