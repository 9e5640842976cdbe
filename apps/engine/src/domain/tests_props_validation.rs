//! Property tests for group validation (pure domain).
//!
//! Properties tested:
//! - Generated sets, runs and color groups validate
//! - Card order inside a group never matters
//! - A skip card poisons any group
//! - Adding a wild to a valid set or color group keeps it valid

use proptest::prelude::*;

use crate::domain::test_gens::{cards, valid_color_group, valid_run, valid_set};
use crate::domain::validation::{is_valid_color, is_valid_group, is_valid_run, is_valid_set};
use crate::domain::{test_prelude, Card, CardId, Face, RequirementKind};

fn card(face: Face) -> Card {
    Card::new(CardId(uuid::Uuid::from_u128(9_999)), face)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_generated_groups_validate(
        set in valid_set(),
        run in valid_run(),
        color in valid_color_group(),
    ) {
        prop_assert!(is_valid_set(&set));
        prop_assert!(is_valid_run(&run));
        prop_assert!(is_valid_color(&color));
    }

    #[test]
    fn prop_order_is_irrelevant(group in cards(8)) {
        let mut reversed = group.clone();
        reversed.reverse();
        for kind in [RequirementKind::Set, RequirementKind::Run, RequirementKind::Color] {
            prop_assert_eq!(is_valid_group(&group, kind), is_valid_group(&reversed, kind));
        }
    }

    #[test]
    fn prop_skip_rejects_every_kind(
        mut set in valid_set(),
        mut run in valid_run(),
        mut color in valid_color_group(),
    ) {
        set.push(card(Face::Skip));
        run.push(card(Face::Skip));
        color.push(card(Face::Skip));
        prop_assert!(!is_valid_set(&set));
        prop_assert!(!is_valid_run(&run));
        prop_assert!(!is_valid_color(&color));
    }

    #[test]
    fn prop_wild_extends_sets_and_colors(
        mut set in valid_set(),
        mut color in valid_color_group(),
    ) {
        set.push(card(Face::Wild));
        color.push(card(Face::Wild));
        prop_assert!(is_valid_set(&set));
        prop_assert!(is_valid_color(&color));
    }

    #[test]
    fn prop_all_wild_groups_never_validate(n in 0usize..8) {
        let wilds: Vec<Card> = (0..n).map(|_| card(Face::Wild)).collect();
        for kind in [RequirementKind::Set, RequirementKind::Run, RequirementKind::Color] {
            prop_assert!(!is_valid_group(&wilds, kind));
        }
    }
}
