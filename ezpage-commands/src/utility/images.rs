use twilight_model::{channel::Attachment, gateway::payload::incoming::MessageCreate};

use crate::CommandMeta;
use ezpage_core::Context;
use ezpage_utils::pagination::{ImagePaginator, image_sources, send_paginated_message};

pub const META: CommandMeta = CommandMeta {
    name: "images",
    desc: "Page through attached images or image URLs.",
    category: "pagination",
    usage: "!images [url...]",
};

/// Paginate the message's image attachments, falling back to URLs given as arguments.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, rest: Option<&str>) -> anyhow::Result<()> {
    let http = &ctx.http;
    let urls = collect_image_urls(&msg.attachments, rest);

    if urls.is_empty() {
        let usage = format!("Usage: `{}` (attach images or pass their URLs)", META.usage);
        http.create_message(msg.channel_id).content(&usage).await?;
        return Ok(());
    }

    let images = match image_sources(urls) {
        Ok(images) => images,
        Err(reason) => {
            let out = format!("Could not use those images: {reason}");
            http.create_message(msg.channel_id).content(&out).await?;
            return Ok(());
        }
    };

    let pager = ImagePaginator::images(images, ctx.config.timeout_secs)?;

    send_paginated_message(
        ctx.http.clone(),
        ctx.sessions.clone(),
        msg.channel_id,
        Box::new(pager),
        ctx.session_owner(msg.author.id.get()),
    )
    .await
}

fn collect_image_urls(attachments: &[Attachment], rest: Option<&str>) -> Vec<String> {
    let attached: Vec<String> = attachments
        .iter()
        .filter(|attachment| {
            attachment
                .content_type
                .as_deref()
                .is_some_and(|kind| kind.starts_with("image/"))
        })
        .map(|attachment| attachment.url.clone())
        .collect();

    if !attached.is_empty() {
        return attached;
    }

    rest.map(|raw| {
        raw.split_whitespace()
            .map(|url| url.trim_start_matches('<').trim_end_matches('>').to_owned())
            .filter(|url| !url.is_empty())
            .collect()
    })
    .unwrap_or_default()
}
