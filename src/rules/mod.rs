//! Game rules: round resolution and the game loop.

pub mod resolver;
pub mod engine;

pub use resolver::{RoundOutcome, RoundResolver, RoundRolls};
pub use engine::{DiceGame, GamePhase, GameSummary};
