//! Players and the circular roster.
//!
//! ## Player
//!
//! A name and a round-win counter. Identity is the player's position in the
//! roster; there are no external IDs.
//!
//! ## Roster
//!
//! Fixed-size, `Vec`-backed sequence of players. Every positional lookup is
//! taken modulo the roster size, so traversal is a pure function of
//! `(start, size, offset)` and out-of-range positions wrap instead of failing.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::config::MAX_PLAYERS;
use super::error::ConfigurationError;

/// A single competitor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Rounds won so far.
    pub wins: u32,
}

impl Player {
    /// Create a player with no wins.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wins: 0,
        }
    }

    /// Default name for the player at `position`.
    #[must_use]
    pub fn default_name(position: usize) -> String {
        format!("Player{}", position)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with {}", self.name, self.wins)
    }
}

/// Ordered, circular collection of players.
///
/// ## Example
///
/// ```
/// use dice_game::core::Roster;
///
/// let roster = Roster::new(["John", "Mike"], 3).unwrap();
///
/// assert_eq!(roster.player_at(2).name, "Player2");
/// // Positions wrap around.
/// assert_eq!(roster.player_at(3).name, "John");
/// assert_eq!(roster.turn_order(1).collect::<Vec<_>>(), vec![1, 2, 0]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster of `total` players.
    ///
    /// The supplied names fill the first positions in order; the rest are
    /// named `Player{index}` with the 0-based index continuing from the
    /// number of supplied names.
    pub fn new<I, S>(names: I, total: usize) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if total < 2 {
            return Err(ConfigurationError::TooFewPlayers { requested: total });
        }
        if total > MAX_PLAYERS {
            return Err(ConfigurationError::TooManyPlayers {
                requested: total,
                max: MAX_PLAYERS,
            });
        }

        let mut players: Vec<Player> = names.into_iter().map(Player::new).collect();
        if players.len() > total {
            return Err(ConfigurationError::TooManyNames {
                names: players.len(),
                players: total,
            });
        }

        let named = players.len();
        players.extend((named..total).map(|i| Player::new(Player::default_name(i))));

        Ok(Self { players })
    }

    /// Build a roster where every player has a default name.
    pub fn with_default_names(total: usize) -> Result<Self, ConfigurationError> {
        Self::new(std::iter::empty::<String>(), total)
    }

    /// Number of players. Constant for the roster's lifetime.
    #[must_use]
    pub fn size(&self) -> usize {
        self.players.len()
    }

    /// Normalize any position onto the roster.
    #[must_use]
    pub fn wrap(&self, position: usize) -> usize {
        position % self.players.len()
    }

    /// The player at `position`, taken modulo the roster size.
    #[must_use]
    pub fn player_at(&self, position: usize) -> &Player {
        &self.players[self.wrap(position)]
    }

    /// Positions visited in one circuit beginning at `start`.
    ///
    /// Yields every position exactly once, stopping just before `start`
    /// would come around again.
    pub fn turn_order(&self, start: usize) -> impl Iterator<Item = usize> {
        let size = self.players.len();
        let start = start % size;
        (0..size).map(move |offset| (start + offset) % size)
    }

    /// Add one round win to the player at `position`. Returns the new total.
    pub fn record_win(&mut self, position: usize) -> u32 {
        let position = self.wrap(position);
        let player = &mut self.players[position];
        player.wins += 1;
        player.wins
    }

    /// All players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Sum of every player's wins. Equals the number of rounds played.
    #[must_use]
    pub fn total_wins(&self) -> u32 {
        self.players.iter().map(|p| p.wins).sum()
    }
}

impl Index<usize> for Roster {
    type Output = Player;

    fn index(&self, position: usize) -> &Self::Output {
        self.player_at(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_display() {
        let mut player = Player::new("John");
        assert_eq!(player.to_string(), "John with 0");
        player.wins = 3;
        assert_eq!(format!("{}", player), "John with 3");
    }

    #[test]
    fn test_default_names_continue_index() {
        let roster = Roster::new(["John", "Mike"], 3).unwrap();
        let names: Vec<_> = roster.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["John", "Mike", "Player2"]);
    }

    #[test]
    fn test_all_default_names() {
        let roster = Roster::with_default_names(4).unwrap();
        let names: Vec<_> = roster.players().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["Player0", "Player1", "Player2", "Player3"]);
        assert!(roster.players().iter().all(|p| p.wins == 0));
    }

    #[test]
    fn test_too_few_players() {
        assert_eq!(
            Roster::with_default_names(1),
            Err(ConfigurationError::TooFewPlayers { requested: 1 })
        );
    }

    #[test]
    fn test_too_many_names() {
        assert_eq!(
            Roster::new(["a", "b", "c"], 2),
            Err(ConfigurationError::TooManyNames { names: 3, players: 2 })
        );
    }

    #[test]
    fn test_player_at_wraps() {
        let roster = Roster::with_default_names(3).unwrap();
        assert_eq!(roster.player_at(0).name, "Player0");
        assert_eq!(roster.player_at(3).name, "Player0");
        assert_eq!(roster.player_at(7).name, "Player1");
        assert_eq!(roster[5].name, "Player2");
    }

    #[test]
    fn test_turn_order() {
        let roster = Roster::with_default_names(4).unwrap();
        assert_eq!(roster.turn_order(0).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(roster.turn_order(2).collect::<Vec<_>>(), vec![2, 3, 0, 1]);
        assert_eq!(roster.turn_order(6).collect::<Vec<_>>(), vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_turn_order_large_start() {
        let roster = Roster::with_default_names(3).unwrap();
        let order: Vec<_> = roster.turn_order(usize::MAX).collect();
        assert_eq!(order.len(), 3);
        assert_eq!(order[0], usize::MAX % 3);
    }

    #[test]
    fn test_record_win() {
        let mut roster = Roster::with_default_names(2).unwrap();
        assert_eq!(roster.record_win(1), 1);
        assert_eq!(roster.record_win(3), 2);
        assert_eq!(roster.player_at(1).wins, 2);
        assert_eq!(roster.player_at(0).wins, 0);
        assert_eq!(roster.total_wins(), 2);
    }

    #[test]
    fn test_roster_serialization() {
        let mut roster = Roster::new(["John"], 2).unwrap();
        roster.record_win(0);
        let json = serde_json::to_string(&roster).unwrap();
        let restored: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, restored);
    }
}
