//! Custom-id encoding for the two navigation buttons.
//!
//! Page state lives in the session registry; the custom id carries the
//! session id and which button was pressed.

const TOKEN_PREFIX: &str = "ezp";

/// Which navigation button was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Retreat,
    Advance,
}

impl NavAction {
    fn segment(self) -> &'static str {
        match self {
            Self::Retreat => "prev",
            Self::Advance => "next",
        }
    }

    /// The move that undoes this one.
    pub fn opposite(self) -> Self {
        match self {
            Self::Retreat => Self::Advance,
            Self::Advance => Self::Retreat,
        }
    }
}

/// Parsed navigation button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavToken {
    /// Registry id of the pagination session.
    pub session_id: u64,
    pub action: NavAction,
}

/// Build the custom id for a navigation button.
pub fn build_custom_id(session_id: u64, action: NavAction) -> String {
    format!("{TOKEN_PREFIX}:{session_id}:{}", action.segment())
}

/// Whether a custom id belongs to pagination controls at all.
pub fn is_pagination_custom_id(custom_id: &str) -> bool {
    custom_id
        .split(':')
        .next()
        .is_some_and(|prefix| prefix == TOKEN_PREFIX)
}

/// Parse a navigation custom id.
pub fn parse_custom_id(custom_id: &str) -> Option<NavToken> {
    let mut parts = custom_id.split(':');

    let prefix = parts.next()?;
    if prefix != TOKEN_PREFIX {
        return None;
    }

    let session_id = parts.next()?.parse::<u64>().ok()?;
    let action = match parts.next()? {
        "prev" => NavAction::Retreat,
        "next" => NavAction::Advance,
        _ => return None,
    };

    if parts.next().is_some() {
        return None;
    }

    Some(NavToken { session_id, action })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_ids_parse_back_to_their_session_and_action() {
        assert_eq!(
            parse_custom_id(&build_custom_id(7, NavAction::Retreat)),
            Some(NavToken {
                session_id: 7,
                action: NavAction::Retreat,
            })
        );
        assert_eq!(
            parse_custom_id("ezp:12:next").map(|token| token.action),
            Some(NavAction::Advance)
        );
    }

    #[test]
    fn foreign_and_malformed_ids_are_rejected() {
        assert_eq!(parse_custom_id("pg:help:next:2:3:1:0"), None);
        assert_eq!(parse_custom_id("ezp:3:jump"), None);
        assert_eq!(parse_custom_id("ezp:abc:next"), None);
        assert_eq!(parse_custom_id("ezp:3:next:extra"), None);
        assert_eq!(parse_custom_id("ezp:next"), None);
    }

    #[test]
    fn prefix_check_ignores_the_rest() {
        assert!(is_pagination_custom_id("ezp:1:jump"));
        assert!(!is_pagination_custom_id("terminate:confirm:1:2:0"));
    }

    #[test]
    fn opposite_undoes_the_move() {
        assert_eq!(NavAction::Advance.opposite(), NavAction::Retreat);
        assert_eq!(NavAction::Retreat.opposite().opposite(), NavAction::Retreat);
    }
}
