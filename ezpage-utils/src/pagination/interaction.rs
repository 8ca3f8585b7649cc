//! Interaction validation for pagination component handlers.

use twilight_model::{
    application::interaction::InteractionData, gateway::payload::incoming::InteractionCreate,
};

use super::token::{NavToken, is_pagination_custom_id, parse_custom_id};

/// Outcome when checking whether an interaction is a pagination button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationInteraction {
    /// Not a pagination component; another handler should take it.
    NotForPagination,
    /// A pagination component that cannot be routed (malformed id, no user).
    Invalid,
    /// A routable button press.
    Valid { actor_user_id: u64, token: NavToken },
}

/// Classify an interaction for the pagination handler.
pub fn validate_navigation_interaction(interaction: &InteractionCreate) -> NavigationInteraction {
    let Some(InteractionData::MessageComponent(component_data)) = interaction.data.as_ref() else {
        return NavigationInteraction::NotForPagination;
    };

    if !is_pagination_custom_id(&component_data.custom_id) {
        return NavigationInteraction::NotForPagination;
    }

    let Some(token) = parse_custom_id(&component_data.custom_id) else {
        return NavigationInteraction::Invalid;
    };

    let Some(actor_user_id) = interaction.author_id().map(|id| id.get()) else {
        return NavigationInteraction::Invalid;
    };

    NavigationInteraction::Valid {
        actor_user_id,
        token,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use twilight_model::application::interaction::Interaction;

    use super::*;
    use crate::pagination::token::NavAction;

    fn user_json(id: &str) -> Value {
        json!({
            "id": id,
            "username": "pager",
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
        })
    }

    fn interaction(kind: u8, data: Option<Value>, user: Option<Value>) -> InteractionCreate {
        let mut raw = json!({
            "id": "100",
            "application_id": "200",
            "type": kind,
            "token": "interaction-token",
            "version": 1,
            "channel_id": "300",
            "authorizing_integration_owners": {},
            "entitlements": [],
            "attachment_size_limit": 8_388_608,
        });
        if let Some(data) = data {
            raw["data"] = data;
        }
        if let Some(user) = user {
            raw["user"] = user;
        }

        let interaction: Interaction = serde_json::from_value(raw).expect("valid interaction");
        InteractionCreate(interaction)
    }

    fn button_press(custom_id: &str, user: Option<Value>) -> InteractionCreate {
        interaction(
            3,
            Some(json!({ "custom_id": custom_id, "component_type": 2, "values": [] })),
            user,
        )
    }

    #[test]
    fn button_press_with_user_is_valid() {
        let press = button_press("ezp:5:next", Some(user_json("42")));

        assert_eq!(
            validate_navigation_interaction(&press),
            NavigationInteraction::Valid {
                actor_user_id: 42,
                token: NavToken {
                    session_id: 5,
                    action: NavAction::Advance,
                },
            }
        );
    }

    #[test]
    fn foreign_custom_ids_are_not_for_pagination() {
        let press = button_press("terminate:confirm:1:2:0", Some(user_json("42")));

        assert_eq!(
            validate_navigation_interaction(&press),
            NavigationInteraction::NotForPagination
        );
    }

    #[test]
    fn non_component_interactions_are_not_for_pagination() {
        let ping = interaction(1, None, None);

        assert_eq!(
            validate_navigation_interaction(&ping),
            NavigationInteraction::NotForPagination
        );
    }

    #[test]
    fn unknown_pagination_action_is_invalid() {
        let press = button_press("ezp:5:jump", Some(user_json("42")));

        assert_eq!(
            validate_navigation_interaction(&press),
            NavigationInteraction::Invalid
        );
    }

    #[test]
    fn press_without_user_is_invalid() {
        let press = button_press("ezp:5:prev", None);

        assert_eq!(
            validate_navigation_interaction(&press),
            NavigationInteraction::Invalid
        );
    }
}
