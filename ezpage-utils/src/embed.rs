use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder};

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_54_30;

/// A titled card with inline fields, styled consistently.
pub fn build_card_embed(
    title: &str,
    description: impl Into<String>,
    fields: &[(&str, &str)],
) -> anyhow::Result<Embed> {
    let builder = fields.iter().fold(
        EmbedBuilder::new()
            .title(title)
            .color(DEFAULT_EMBED_COLOR)
            .description(description),
        |builder, (name, value)| builder.field(EmbedFieldBuilder::new(*name, *value).inline()),
    );

    Ok(builder.validate()?.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_embed_carries_fields_in_order() {
        let embed = build_card_embed("ping", "Replies with pong.", &[("Category", "utility")])
            .expect("valid embed");

        assert_eq!(embed.title.as_deref(), Some("ping"));
        assert_eq!(embed.color, Some(DEFAULT_EMBED_COLOR));
        assert_eq!(embed.fields.len(), 1);
        assert_eq!(embed.fields[0].name, "Category");
        assert!(embed.fields[0].inline);
    }

    #[test]
    fn oversized_title_fails_validation() {
        let title = "t".repeat(300);

        assert!(build_card_embed(&title, "body", &[]).is_err());
    }
}
