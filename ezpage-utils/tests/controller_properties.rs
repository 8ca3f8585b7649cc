//! Property-based tests for the page controller.
//!
//! These tests use proptest to check the navigation invariants across
//! randomly sized page sets and random button sequences.

use ezpage_utils::pagination::{ControlState, NavAction, PaginationError, TextPaginator};
use proptest::prelude::*;

fn pager(len: usize) -> TextPaginator {
    let pages = (1..=len).map(|page| format!("p{page}")).collect();
    TextPaginator::text(pages, 60).expect("non-empty pages")
}

prop_compose! {
    fn arbitrary_action()(advance in any::<bool>()) -> NavAction {
        if advance { NavAction::Advance } else { NavAction::Retreat }
    }
}

proptest! {
    #[test]
    fn construction_starts_on_first_page(len in 1usize..50) {
        let pager = pager(len);

        prop_assert_eq!(pager.current_index(), 0);
        prop_assert_eq!(
            pager.control_state(),
            ControlState { retreat_enabled: false, advance_enabled: len > 1 }
        );
    }

    #[test]
    fn advancing_to_the_end_disables_advance(len in 2usize..50) {
        let mut pager = pager(len);

        for _ in 0..len - 1 {
            pager.advance().expect("not yet at the end");
        }

        prop_assert_eq!(pager.current_index(), len - 1);
        prop_assert_eq!(
            pager.control_state(),
            ControlState { retreat_enabled: true, advance_enabled: false }
        );
        prop_assert!(matches!(pager.advance(), Err(PaginationError::InvalidState(_))));
        prop_assert_eq!(pager.current_index(), len - 1);
    }

    #[test]
    fn advance_then_retreat_is_identity(len in 3usize..50, start_hint in 0usize..1000) {
        let mut pager = pager(len);
        let start = 1 + start_hint % (len - 2);
        for _ in 0..start {
            pager.advance().expect("interior index");
        }

        pager.advance().expect("interior index can advance");
        pager.retreat().expect("and come back");

        prop_assert_eq!(pager.current_index(), start);
    }

    #[test]
    fn index_stays_in_bounds(len in 1usize..20, actions in prop::collection::vec(arbitrary_action(), 0..100)) {
        let mut pager = pager(len);

        for action in actions {
            let before = pager.current_index();
            let result = match action {
                NavAction::Advance => pager.advance(),
                NavAction::Retreat => pager.retreat(),
            };

            if result.is_err() {
                prop_assert_eq!(pager.current_index(), before);
            }
            prop_assert!(pager.current_index() < len);
            prop_assert_eq!(pager.current_item(), &format!("p{}", pager.current_index() + 1));
        }
    }

    #[test]
    fn expiry_freezes_navigation(len in 1usize..20, steps in 0usize..20) {
        let mut pager = pager(len);
        for _ in 0..steps.min(len - 1) {
            pager.advance().expect("in bounds");
        }
        let frozen = pager.current_index();

        let view = pager.on_timeout();

        prop_assert_eq!(view.controls, ControlState::DISABLED);
        prop_assert!(matches!(pager.advance(), Err(PaginationError::InvalidState(_))));
        prop_assert!(matches!(pager.retreat(), Err(PaginationError::InvalidState(_))));
        prop_assert_eq!(pager.current_index(), frozen);
        prop_assert_eq!(pager.control_state(), ControlState::DISABLED);
    }
}

#[test]
fn empty_construction_is_an_invalid_argument() {
    assert!(matches!(
        TextPaginator::text(Vec::new(), 60),
        Err(PaginationError::InvalidArgument(_))
    ));
}
