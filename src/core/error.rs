//! Construction-time errors.
//!
//! Configuration is the only thing that can go wrong: once a game has been
//! built, rolling, lookup and round resolution are infallible.

use thiserror::Error;

/// Invalid game configuration. No roster or game is created when returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Fewer than two players cannot compete.
    #[error("a game needs at least 2 players, got {requested}")]
    TooFewPlayers { requested: usize },

    /// More players than positions the engine supports.
    #[error("at most {max} players supported, got {requested}")]
    TooManyPlayers { requested: usize, max: usize },

    /// Every player must roll at least one die.
    #[error("each player must roll at least 1 die")]
    NoDice,

    /// A die needs at least one face.
    #[error("a die must have at least 1 face")]
    NoFaces,

    /// A player's highest possible round total does not fit in a `u32`.
    #[error("{dice} dice of {faces} faces overflow a round total")]
    TotalOverflow { dice: u32, faces: u32 },

    /// More names were supplied than there are seats.
    #[error("{names} player names supplied for only {players} players")]
    TooManyNames { names: usize, players: usize },
}
