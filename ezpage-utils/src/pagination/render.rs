//! Rendering strategies mapping a page item to a displayable payload.

use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, ImageSource};

use crate::embed::DEFAULT_EMBED_COLOR;

use super::error::PaginationError;

/// Message body shown once a pagination session has timed out.
pub const EXPIRED_NOTICE: &str = "This pagination has expired.";

/// What the host should put into the live message for the current page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayPayload {
    /// Plain message content. `None` clears any previous content.
    pub content: Option<String>,
    /// Single embed shown with the message. `None` clears any previous embed.
    pub embed: Option<Embed>,
}

impl DisplayPayload {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embed: None,
        }
    }

    pub fn card(embed: Embed) -> Self {
        Self {
            content: None,
            embed: Some(embed),
        }
    }

    /// Terminal view: keep the last page visible and replace the body with the expiry notice.
    pub fn into_expired(self) -> Self {
        Self {
            content: Some(EXPIRED_NOTICE.to_owned()),
            embed: self.embed,
        }
    }

    /// Embeds as a slice, ready for twilight request builders.
    pub fn embeds(&self) -> &[Embed] {
        self.embed.as_slice()
    }
}

/// Strategy turning one page item into a [`DisplayPayload`].
pub trait PageRenderer {
    type Item;

    fn render(&self, item: &Self::Item) -> DisplayPayload;
}

/// Rich card pages: the embed is shown exactly as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardRenderer;

impl PageRenderer for CardRenderer {
    type Item = Embed;

    fn render(&self, item: &Embed) -> DisplayPayload {
        DisplayPayload::card(item.clone())
    }
}

/// Image pages: each image is wrapped into its own single-image embed.
#[derive(Debug, Clone, Copy)]
pub struct ImageRenderer {
    pub color: u32,
}

impl Default for ImageRenderer {
    fn default() -> Self {
        Self {
            color: DEFAULT_EMBED_COLOR,
        }
    }
}

impl PageRenderer for ImageRenderer {
    type Item = ImageSource;

    fn render(&self, item: &ImageSource) -> DisplayPayload {
        let embed = EmbedBuilder::new()
            .color(self.color)
            .image(item.clone())
            .build();

        DisplayPayload::card(embed)
    }
}

/// Plain text pages: the message body is the page text, no embed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl PageRenderer for TextRenderer {
    type Item = String;

    fn render(&self, item: &Self::Item) -> DisplayPayload {
        DisplayPayload::text(item.as_str())
    }
}

/// Validate raw image URLs into embed image sources.
///
/// Fails with `InvalidArgument` on the first URL Discord would not accept.
pub fn image_sources<I, S>(urls: I) -> Result<Vec<ImageSource>, PaginationError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    urls.into_iter()
        .map(|url| {
            let url = url.into();
            ImageSource::url(url.as_str()).map_err(|source| {
                PaginationError::InvalidArgument(format!("unusable image url `{url}`: {source}"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_renderer_passes_embed_through() {
        let embed = EmbedBuilder::new()
            .title("Card")
            .description("body")
            .build();

        let payload = CardRenderer.render(&embed);

        assert_eq!(payload.content, None);
        assert_eq!(payload.embed, Some(embed));
    }

    #[test]
    fn image_renderer_wraps_url_in_embed() {
        let sources = image_sources(["https://example.com/a.png"]).expect("valid url");

        let payload = ImageRenderer::default().render(&sources[0]);
        let embed = payload.embed.expect("image embed");

        assert_eq!(payload.content, None);
        assert_eq!(embed.color, Some(DEFAULT_EMBED_COLOR));
        assert_eq!(
            embed.image.map(|image| image.url),
            Some("https://example.com/a.png".to_owned())
        );
    }

    #[test]
    fn text_renderer_sets_body_only() {
        let payload = TextRenderer.render(&"page one".to_owned());

        assert_eq!(payload, DisplayPayload::text("page one"));
        assert!(payload.embeds().is_empty());
    }

    #[test]
    fn image_sources_rejects_non_http_urls() {
        let err = image_sources(["ftp://example.com/a.png"]).unwrap_err();

        assert!(matches!(err, PaginationError::InvalidArgument(_)));
    }

    #[test]
    fn expired_payload_keeps_embed_and_replaces_body() {
        let embed = EmbedBuilder::new().title("last").build();

        let text = DisplayPayload::text("page").into_expired();
        let card = DisplayPayload::card(embed.clone()).into_expired();

        assert_eq!(text.content.as_deref(), Some(EXPIRED_NOTICE));
        assert_eq!(text.embed, None);
        assert_eq!(card.content.as_deref(), Some(EXPIRED_NOTICE));
        assert_eq!(card.embed, Some(embed));
    }
}
