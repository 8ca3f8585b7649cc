//! Page controller: the index/bounds state machine behind every paginated message.

use std::time::Duration;

use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::ImageSource;

use super::error::PaginationError;
use super::render::{CardRenderer, DisplayPayload, ImageRenderer, PageRenderer, TextRenderer};

/// Enabled flags for the two navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub retreat_enabled: bool,
    pub advance_enabled: bool,
}

impl ControlState {
    /// Both buttons disabled, as shown on an expired session.
    pub const DISABLED: Self = Self {
        retreat_enabled: false,
        advance_enabled: false,
    };
}

/// A value the host applies to the live message: page payload plus button state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderInstruction {
    pub payload: DisplayPayload,
    pub controls: ControlState,
}

/// Ordered, non-empty pages with a current index, rendered through `R`.
///
/// The index stays within `0..len()` at all times. Once expired, the
/// controller rejects every navigation attempt.
#[derive(Debug, Clone)]
pub struct PageController<R: PageRenderer> {
    items: Vec<R::Item>,
    renderer: R,
    current_index: usize,
    expired: bool,
    timeout: Duration,
}

pub type CardPaginator = PageController<CardRenderer>;
pub type ImagePaginator = PageController<ImageRenderer>;
pub type TextPaginator = PageController<TextRenderer>;

impl<R: PageRenderer> PageController<R> {
    /// Create a controller positioned on the first page.
    pub fn new(items: Vec<R::Item>, renderer: R, timeout_secs: u64) -> Result<Self, PaginationError> {
        if items.is_empty() {
            return Err(PaginationError::empty_items());
        }

        Ok(Self {
            items,
            renderer,
            current_index: 0,
            expired: false,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; construction rejects empty item lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> &R::Item {
        &self.items[self.current_index]
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn can_retreat(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_advance(&self) -> bool {
        self.current_index + 1 < self.items.len()
    }

    pub fn is_at_start(&self) -> bool {
        !self.can_retreat()
    }

    pub fn is_at_end(&self) -> bool {
        !self.can_advance()
    }

    /// Move one page back.
    pub fn retreat(&mut self) -> Result<(), PaginationError> {
        self.ensure_live()?;
        if !self.can_retreat() {
            return Err(PaginationError::InvalidState(
                "already on the first page".to_owned(),
            ));
        }

        self.current_index -= 1;
        Ok(())
    }

    /// Move one page forward.
    pub fn advance(&mut self) -> Result<(), PaginationError> {
        self.ensure_live()?;
        if !self.can_advance() {
            return Err(PaginationError::InvalidState(
                "already on the last page".to_owned(),
            ));
        }

        self.current_index += 1;
        Ok(())
    }

    /// Button state for the current page. Both disabled once expired.
    pub fn control_state(&self) -> ControlState {
        if self.expired {
            return ControlState::DISABLED;
        }

        ControlState {
            retreat_enabled: self.can_retreat(),
            advance_enabled: self.can_advance(),
        }
    }

    /// Mark the session as timed out. Calling it again has no effect.
    pub fn expire(&mut self) {
        self.expired = true;
    }

    /// Render the current page and its button state.
    pub fn render(&self) -> RenderInstruction {
        let payload = self.renderer.render(self.current_item());
        let payload = if self.expired {
            payload.into_expired()
        } else {
            payload
        };

        RenderInstruction {
            payload,
            controls: self.control_state(),
        }
    }

    pub fn on_retreat_activated(&mut self) -> Result<RenderInstruction, PaginationError> {
        self.retreat()?;
        Ok(self.render())
    }

    pub fn on_advance_activated(&mut self) -> Result<RenderInstruction, PaginationError> {
        self.advance()?;
        Ok(self.render())
    }

    /// Expire the session and produce the terminal view.
    pub fn on_timeout(&mut self) -> RenderInstruction {
        self.expire();
        self.render()
    }

    fn ensure_live(&self) -> Result<(), PaginationError> {
        if self.expired {
            return Err(PaginationError::expired());
        }

        Ok(())
    }
}

impl CardPaginator {
    pub fn cards(embeds: Vec<Embed>, timeout_secs: u64) -> Result<Self, PaginationError> {
        Self::new(embeds, CardRenderer, timeout_secs)
    }
}

impl ImagePaginator {
    pub fn images(images: Vec<ImageSource>, timeout_secs: u64) -> Result<Self, PaginationError> {
        Self::new(images, ImageRenderer::default(), timeout_secs)
    }
}

impl TextPaginator {
    pub fn text(pages: Vec<String>, timeout_secs: u64) -> Result<Self, PaginationError> {
        Self::new(pages, TextRenderer, timeout_secs)
    }
}

/// Object-safe view of a controller, independent of its content shape.
///
/// Lets the session registry hold card, image and text sessions side by side.
pub trait Pager: Send {
    fn current_index(&self) -> usize;

    fn render(&self) -> RenderInstruction;

    fn on_retreat_activated(&mut self) -> Result<RenderInstruction, PaginationError>;

    fn on_advance_activated(&mut self) -> Result<RenderInstruction, PaginationError>;

    fn on_timeout(&mut self) -> RenderInstruction;

    fn timeout(&self) -> Duration;
}

impl<R> Pager for PageController<R>
where
    R: PageRenderer + Send,
    R::Item: Send,
{
    fn current_index(&self) -> usize {
        PageController::current_index(self)
    }

    fn render(&self) -> RenderInstruction {
        PageController::render(self)
    }

    fn on_retreat_activated(&mut self) -> Result<RenderInstruction, PaginationError> {
        PageController::on_retreat_activated(self)
    }

    fn on_advance_activated(&mut self) -> Result<RenderInstruction, PaginationError> {
        PageController::on_advance_activated(self)
    }

    fn on_timeout(&mut self) -> RenderInstruction {
        PageController::on_timeout(self)
    }

    fn timeout(&self) -> Duration {
        PageController::timeout(self)
    }
}
