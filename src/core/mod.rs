//! Core types: configuration, errors, players, roster, RNG.

pub mod error;
pub mod config;
pub mod player;
pub mod rng;

pub use error::ConfigurationError;
pub use config::{check_dice, GameConfig, DEFAULT_DIE_FACES, MAX_PLAYERS, WIN_TARGET};
pub use player::{Player, Roster};
pub use rng::{GameRng, GameRngState};
