//! Stable facade for pagination helpers used by command handlers.

/// Default timeout for button-based pagination sessions.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

mod components;
pub mod controller;
pub mod error;
pub mod interaction;
pub mod render;
pub mod respond;
pub mod session;
pub mod token;

pub use components::build_nav_components;
pub use controller::{
    CardPaginator, ControlState, ImagePaginator, PageController, Pager, RenderInstruction,
    TextPaginator,
};
pub use error::PaginationError;
pub use interaction::{NavigationInteraction, validate_navigation_interaction};
pub use render::{
    CardRenderer, DisplayPayload, EXPIRED_NOTICE, ImageRenderer, PageRenderer, TextRenderer,
    image_sources,
};
pub use respond::{handle_navigation_interaction, send_paginated_message};
pub use session::{NavigationOutcome, PaginationSession, PaginationSessions, SessionMessage};
pub use token::{NavAction, NavToken};
