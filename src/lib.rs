//! # dice-game
//!
//! A multi-player dice competition engine.
//!
//! Players take turns rolling a fixed number of dice. The highest total in a
//! round wins it, and the first player to win [`WIN_TARGET`] rounds wins the
//! game. A round's winner rolls first in the next round.
//!
//! ## Design Principles
//!
//! 1. **Circular by index**: The roster is a fixed `Vec`; the i-th roller of
//!    a round is `(start + i) % size`. No cursors, no wrapping iterators.
//!
//! 2. **Replaceable dice**: Rounds roll through the `DieSource` trait, so a
//!    seeded RNG or a scripted sequence makes every game reproducible.
//!
//! 3. **Events out, nothing in**: Reporting is an `EventSink`. The engine
//!    never formats output itself.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, players, roster, RNG
//! - `dice`: Die sources
//! - `events`: Game events and sinks
//! - `rules`: Round resolution and the game loop

pub mod core;
pub mod dice;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigurationError, GameConfig, GameRng, GameRngState, Player, Roster,
    DEFAULT_DIE_FACES, MAX_PLAYERS, WIN_TARGET,
};

pub use crate::dice::{DieSource, ScriptedDice};

pub use crate::events::{EventLog, EventSink, GameEvent, NullSink, TracingSink};

pub use crate::rules::{DiceGame, GamePhase, GameSummary, RoundOutcome, RoundResolver};
