//! Game configuration.
//!
//! A `GameConfig` is assembled with builder methods and validated once when a
//! game is constructed. It is immutable for the lifetime of the game.

use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;

/// Round wins needed to take the game.
pub const WIN_TARGET: u32 = 7;

/// Faces on a standard die.
pub const DEFAULT_DIE_FACES: u32 = 6;

/// Largest roster the engine accepts.
pub const MAX_PLAYERS: usize = 255;

/// Complete game configuration.
///
/// The default is the smallest competitive game: two players, one six-sided
/// die each, default names and an entropy-seeded RNG.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-255).
    pub player_count: usize,

    /// Dice rolled by each player per round.
    pub dice_per_player: u32,

    /// Faces per die; rolls are uniform over `1..=die_faces`.
    pub die_faces: u32,

    /// Names for the first positions. Remaining positions get default names.
    pub player_names: Vec<String>,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            dice_per_player: 1,
            die_faces: DEFAULT_DIE_FACES,
            player_names: Vec::new(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration for `player_count` players rolling `dice_per_player` dice.
    ///
    /// Nothing is checked until [`GameConfig::validate`].
    pub fn new(player_count: usize, dice_per_player: u32) -> Self {
        Self {
            player_count,
            dice_per_player,
            ..Self::default()
        }
    }

    /// Set the names of the first players.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the number of faces per die.
    #[must_use]
    pub fn with_die_faces(mut self, faces: u32) -> Self {
        self.die_faces = faces;
        self
    }

    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.player_count < 2 {
            return Err(ConfigurationError::TooFewPlayers {
                requested: self.player_count,
            });
        }
        if self.player_count > MAX_PLAYERS {
            return Err(ConfigurationError::TooManyPlayers {
                requested: self.player_count,
                max: MAX_PLAYERS,
            });
        }
        check_dice(self.dice_per_player, self.die_faces)?;
        if self.player_names.len() > self.player_count {
            return Err(ConfigurationError::TooManyNames {
                names: self.player_names.len(),
                players: self.player_count,
            });
        }
        Ok(())
    }
}

/// Check a dice setup: at least one die of at least one face, and a
/// maximum per-player total that fits in a `u32`.
pub fn check_dice(dice_per_player: u32, die_faces: u32) -> Result<(), ConfigurationError> {
    if dice_per_player < 1 {
        return Err(ConfigurationError::NoDice);
    }
    if die_faces < 1 {
        return Err(ConfigurationError::NoFaces);
    }
    if dice_per_player.checked_mul(die_faces).is_none() {
        return Err(ConfigurationError::TotalOverflow {
            dice: dice_per_player,
            faces: die_faces,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.dice_per_player, 1);
        assert_eq!(config.die_faces, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(3, 2)
            .with_names(["John", "Mike"])
            .with_die_faces(20)
            .with_seed(7);

        assert_eq!(config.player_count, 3);
        assert_eq!(config.dice_per_player, 2);
        assert_eq!(config.die_faces, 20);
        assert_eq!(config.player_names, vec!["John".to_string(), "Mike".to_string()]);
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_single_player() {
        assert_eq!(
            GameConfig::new(1, 1).validate(),
            Err(ConfigurationError::TooFewPlayers { requested: 1 })
        );
        assert_eq!(
            GameConfig::new(0, 1).validate(),
            Err(ConfigurationError::TooFewPlayers { requested: 0 })
        );
    }

    #[test]
    fn test_validate_rejects_zero_dice() {
        assert_eq!(GameConfig::new(2, 0).validate(), Err(ConfigurationError::NoDice));
    }

    #[test]
    fn test_validate_rejects_zero_faces() {
        let config = GameConfig::new(2, 1).with_die_faces(0);
        assert_eq!(config.validate(), Err(ConfigurationError::NoFaces));
    }

    #[test]
    fn test_validate_rejects_overflowing_totals() {
        let config = GameConfig::new(2, 2).with_die_faces(u32::MAX);
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::TotalOverflow { dice: 2, faces: u32::MAX })
        );

        // The largest total that still fits is accepted
        assert!(GameConfig::new(2, 1).with_die_faces(u32::MAX).validate().is_ok());
        assert!(check_dice(u32::MAX / 6, 6).is_ok());
        assert!(check_dice(u32::MAX / 6 + 1, 6).is_err());
    }

    #[test]
    fn test_validate_rejects_extra_names() {
        let config = GameConfig::new(2, 1).with_names(["a", "b", "c"]);
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::TooManyNames { names: 3, players: 2 })
        );
    }

    #[test]
    fn test_validate_rejects_huge_roster() {
        let config = GameConfig::new(MAX_PLAYERS + 1, 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::TooManyPlayers { .. })
        ));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(3, 1).with_names(["John"]).with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
