//! Game event types.
//!
//! Events describe what happened during a game: dice rolled, rounds won,
//! the game decided. The engine only emits them; rendering is left to
//! whatever [`EventSink`](super::EventSink) is plugged in.

use serde::{Deserialize, Serialize};

/// Something that happened during a game.
///
/// Rounds are numbered from 1. `position` is always the roster index of the
/// player concerned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// The first round is about to be played.
    GameStarted {
        players: usize,
        dice_per_player: u32,
    },

    /// A player is about to roll. `wins` is their tally before this round.
    TurnStarted {
        round: u32,
        position: usize,
        player: String,
        wins: u32,
    },

    /// One die landed. `die` counts from 1 within the player's turn.
    DieRolled {
        round: u32,
        position: usize,
        player: String,
        die: u32,
        face: u32,
    },

    /// A player finished rolling.
    TurnFinished {
        round: u32,
        position: usize,
        player: String,
        total: u32,
    },

    /// A round was decided. `wins` includes this round.
    RoundWon {
        round: u32,
        position: usize,
        player: String,
        total: u32,
        wins: u32,
    },

    /// A player reached the win target.
    GameWon {
        position: usize,
        player: String,
        wins: u32,
        rounds: u32,
    },
}

impl GameEvent {
    /// Short machine-friendly name of the event kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } => "game_started",
            GameEvent::TurnStarted { .. } => "turn_started",
            GameEvent::DieRolled { .. } => "die_rolled",
            GameEvent::TurnFinished { .. } => "turn_finished",
            GameEvent::RoundWon { .. } => "round_won",
            GameEvent::GameWon { .. } => "game_won",
        }
    }

    /// Round the event belongs to, if any.
    #[must_use]
    pub fn round(&self) -> Option<u32> {
        match self {
            GameEvent::TurnStarted { round, .. }
            | GameEvent::DieRolled { round, .. }
            | GameEvent::TurnFinished { round, .. }
            | GameEvent::RoundWon { round, .. } => Some(*round),
            GameEvent::GameStarted { .. } | GameEvent::GameWon { .. } => None,
        }
    }
}
