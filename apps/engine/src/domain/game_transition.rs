use crate::domain::state::{GameState, GameStatus, PlayerId};

/// The slice of a game record transitions are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub version: i32,
    pub status: GameStatus,
    /// Player whose turn it is; `None` once the game is over.
    pub turn: Option<PlayerId>,
    pub player_count: usize,
    pub round_no: u32,
}

impl GameLifecycleView {
    pub fn from_state(state: &GameState, version: i32) -> Self {
        let turn = match state.status {
            GameStatus::Completed => None,
            _ => state.current_player().map(|p| p.id),
        };
        Self {
            version,
            status: state.status,
            turn,
            player_count: state.players.len(),
            round_no: state.round_no,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: Waiting -> Active
    GameStarted,

    /// Edge-triggered: !Completed -> Completed
    GameEnded,

    /// Edge-triggered: the table grew; `seat` is the newest seat.
    PlayerJoined { seat: usize },

    /// Edge-triggered: a new round was dealt.
    RoundStarted { round_no: u32 },
}

/// Derive domain transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Seats
    if after.player_count > before.player_count {
        transitions.push(GameTransition::PlayerJoined {
            seat: after.player_count - 1,
        });
    }

    // 2. Game start
    if before.status == GameStatus::Waiting && after.status == GameStatus::Active {
        transitions.push(GameTransition::GameStarted);
    }

    // 3. New round
    if after.round_no > before.round_no && after.status == GameStatus::Active {
        transitions.push(GameTransition::RoundStarted {
            round_no: after.round_no,
        });
    }

    // 4. Turn change
    if let Some(player_id) = after.turn {
        if before.turn != Some(player_id) {
            transitions.push(GameTransition::TurnBecame { player_id });
        }
    }

    // 5. Game end
    if before.status != GameStatus::Completed && after.status == GameStatus::Completed {
        transitions.push(GameTransition::GameEnded);
    }

    transitions
}
