use serde::{Deserialize, Serialize};

pub const HAND_SIZE: usize = 10;
pub const MAX_PLAYERS: usize = 6;
pub const COPIES_PER_NUMBER: usize = 2;
pub const WILD_COUNT: usize = 8;
pub const SKIP_COUNT: usize = 4;
/// 2 copies x 4 colors x 12 ranks, plus wilds and skips.
pub const DECK_SIZE: usize = COPIES_PER_NUMBER * 4 * 12 + WILD_COUNT + SKIP_COUNT;
pub const PHASE_COUNT: u8 = 10;

pub const WILD_PENALTY: u32 = 25;
pub const SKIP_PENALTY: u32 = 25;
pub const HIGH_CARD_PENALTY: u32 = 10;
pub const LOW_CARD_PENALTY: u32 = 5;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    Set,
    Run,
    Color,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct PhaseRequirement {
    pub kind: RequirementKind,
    /// Minimum number of cards in the group.
    pub count: usize,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Phase {
    pub number: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub requirements: &'static [PhaseRequirement],
}

const fn set(count: usize) -> PhaseRequirement {
    PhaseRequirement {
        kind: RequirementKind::Set,
        count,
    }
}

const fn run(count: usize) -> PhaseRequirement {
    PhaseRequirement {
        kind: RequirementKind::Run,
        count,
    }
}

const fn color(count: usize) -> PhaseRequirement {
    PhaseRequirement {
        kind: RequirementKind::Color,
        count,
    }
}

pub static PHASES: [Phase; PHASE_COUNT as usize] = [
    Phase {
        number: 1,
        name: "Phase 1",
        description: "2 sets of 3",
        requirements: &[set(3), set(3)],
    },
    Phase {
        number: 2,
        name: "Phase 2",
        description: "1 set of 3 + 1 run of 4",
        requirements: &[set(3), run(4)],
    },
    Phase {
        number: 3,
        name: "Phase 3",
        description: "1 set of 4 + 1 run of 4",
        requirements: &[set(4), run(4)],
    },
    Phase {
        number: 4,
        name: "Phase 4",
        description: "1 run of 7",
        requirements: &[run(7)],
    },
    Phase {
        number: 5,
        name: "Phase 5",
        description: "1 run of 8",
        requirements: &[run(8)],
    },
    Phase {
        number: 6,
        name: "Phase 6",
        description: "1 run of 9",
        requirements: &[run(9)],
    },
    Phase {
        number: 7,
        name: "Phase 7",
        description: "2 sets of 4",
        requirements: &[set(4), set(4)],
    },
    Phase {
        number: 8,
        name: "Phase 8",
        description: "7 cards of one color",
        requirements: &[color(7)],
    },
    Phase {
        number: 9,
        name: "Phase 9",
        description: "1 set of 5 + 1 set of 2",
        requirements: &[set(5), set(2)],
    },
    Phase {
        number: 10,
        name: "Phase 10",
        description: "1 set of 5 + 1 set of 3",
        requirements: &[set(5), set(3)],
    },
];

/// Phase definition for a 1-based phase number.
pub fn phase(number: u8) -> Option<&'static Phase> {
    if number == 0 {
        return None;
    }
    PHASES.get(number as usize - 1)
}
