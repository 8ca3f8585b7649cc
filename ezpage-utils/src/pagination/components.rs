//! Pagination UI component builders (previous/next buttons).

use twilight_model::channel::message::{
    EmojiReactionType,
    component::{ActionRow, Button, ButtonStyle, Component},
};

use super::controller::ControlState;
use super::token::{NavAction, build_custom_id};

const RETREAT_EMOJI: &str = "⬅️";
const ADVANCE_EMOJI: &str = "➡️";

/// Build the previous/next button row for a paginated message.
pub fn build_nav_components(session_id: u64, controls: ControlState) -> Vec<Component> {
    vec![Component::ActionRow(ActionRow {
        id: None,
        components: vec![
            Component::Button(nav_button(
                session_id,
                NavAction::Retreat,
                RETREAT_EMOJI,
                !controls.retreat_enabled,
            )),
            Component::Button(nav_button(
                session_id,
                NavAction::Advance,
                ADVANCE_EMOJI,
                !controls.advance_enabled,
            )),
        ],
    })]
}

fn nav_button(session_id: u64, action: NavAction, emoji: &str, disabled: bool) -> Button {
    Button {
        id: None,
        custom_id: Some(build_custom_id(session_id, action)),
        disabled,
        emoji: Some(EmojiReactionType::Unicode {
            name: emoji.to_owned(),
        }),
        label: None,
        style: ButtonStyle::Primary,
        url: None,
        sku_id: None,
    }
}
