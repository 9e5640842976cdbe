//! Phase validation: sets, runs, color groups and full phase completion.
//!
//! A negative answer is a normal outcome, so every check returns `bool`.
//! Skip cards never build groups; any group holding one is rejected.

use crate::domain::rules::{Phase, RequirementKind};
use crate::domain::Card;

fn has_skip(cards: &[Card]) -> bool {
    cards.iter().any(Card::is_skip)
}

/// At least two cards, at least one non-wild, all non-wild cards of equal
/// value.
pub fn is_valid_set(cards: &[Card]) -> bool {
    if cards.len() < 2 || has_skip(cards) {
        return false;
    }
    let mut ranks = cards.iter().filter_map(Card::rank);
    let Some(base) = ranks.next() else {
        return false;
    };
    ranks.all(|r| r == base)
}

/// At least three cards of strictly consecutive ranks, wilds filling gaps.
/// No wraparound from 12 to 1.
pub fn is_valid_run(cards: &[Card]) -> bool {
    if cards.len() < 3 || has_skip(cards) {
        return false;
    }
    let wilds = cards.iter().filter(|c| c.is_wild()).count();
    let mut ranks: Vec<u8> = cards
        .iter()
        .filter_map(Card::rank)
        .map(|r| r.value())
        .collect();
    if ranks.is_empty() {
        return false;
    }
    ranks.sort_unstable();

    let mut used = 0usize;
    for pair in ranks.windows(2) {
        let gap = i16::from(pair[1]) - i16::from(pair[0]) - 1;
        if gap < 0 {
            // duplicate rank
            return false;
        }
        used += gap as usize;
        if used > wilds {
            return false;
        }
    }
    true
}

/// Non-empty, at least one numbered card, all numbered cards of one color.
/// Wilds pad the group.
pub fn is_valid_color(cards: &[Card]) -> bool {
    if cards.is_empty() || has_skip(cards) {
        return false;
    }
    let mut colors = cards.iter().filter_map(Card::color);
    let Some(base) = colors.next() else {
        return false;
    };
    colors.all(|c| c == base)
}

pub fn is_valid_group(cards: &[Card], kind: RequirementKind) -> bool {
    match kind {
        RequirementKind::Set => is_valid_set(cards),
        RequirementKind::Run => is_valid_run(cards),
        RequirementKind::Color => is_valid_color(cards),
    }
}

/// Check `groups` against `phase.requirements` position by position.
///
/// Groups are not reordered to find a match; the group count must equal the
/// requirement count and every group must meet its minimum size and kind.
pub fn validate_completion<G: AsRef<[Card]>>(phase: &Phase, groups: &[G]) -> bool {
    if groups.len() != phase.requirements.len() {
        return false;
    }
    phase
        .requirements
        .iter()
        .zip(groups)
        .all(|(req, group)| {
            let group = group.as_ref();
            group.len() >= req.count && is_valid_group(group, req.kind)
        })
}

/// Whether appending `card` keeps `group` valid for `kind`.
pub fn can_extend(card: &Card, group: &[Card], kind: RequirementKind) -> bool {
    let mut extended = group.to_vec();
    extended.push(*card);
    is_valid_group(&extended, kind)
}
