//! The game loop.
//!
//! `DiceGame` owns the roster and the die source and drives rounds until a
//! player reaches [`WIN_TARGET`]. Each round's winner rolls first in the
//! next round.
//!
//! ## States
//!
//! ```text
//! NotStarted ──play_round──► InProgress ──winner hits target──► Finished
//!                               │   ▲
//!                               └───┘ play_round
//! ```
//!
//! Every round raises exactly one win count by one, so a game ends within
//! `WIN_TARGET * player_count` rounds whatever the dice do.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigurationError, GameConfig, GameRng, Player, Roster, WIN_TARGET};
use crate::dice::DieSource;
use crate::events::{EventSink, GameEvent};

use super::resolver::{RoundOutcome, RoundResolver};

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No round has been played.
    NotStarted,
    /// `round` rounds have been played and nobody has reached the target.
    InProgress { round: u32 },
    /// The player at `winner` reached the target.
    Finished { winner: usize },
}

/// Final result of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Position of the game winner.
    pub winner: usize,
    /// Name of the game winner.
    pub winner_name: String,
    /// Winner's final win count (always the target).
    pub wins: u32,
    /// Rounds played.
    pub rounds: u32,
    /// Every player with their final win count, in seating order.
    pub standings: Vec<Player>,
}

/// A dice competition.
///
/// ## Example
///
/// ```
/// use dice_game::{DiceGame, GameConfig, NullSink, WIN_TARGET};
///
/// let config = GameConfig::new(3, 2).with_names(["John", "Mike"]).with_seed(42);
/// let mut game = DiceGame::new(config).unwrap();
///
/// let summary = game.run(&mut NullSink);
/// assert_eq!(summary.wins, WIN_TARGET);
/// assert!(summary.winner < 3);
/// ```
#[derive(Clone, Debug)]
pub struct DiceGame<D = GameRng> {
    config: GameConfig,
    resolver: RoundResolver,
    roster: Roster,
    start_position: usize,
    phase: GamePhase,
    dice: D,
}

impl DiceGame<GameRng> {
    /// Create a game rolling with a [`GameRng`].
    ///
    /// The RNG is seeded from `config.seed`, or from OS entropy when unset.
    pub fn new(config: GameConfig) -> Result<Self, ConfigurationError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_dice(config, rng)
    }
}

impl<D: DieSource> DiceGame<D> {
    /// Create a game rolling with a custom die source.
    pub fn with_dice(config: GameConfig, dice: D) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let roster = Roster::new(config.player_names.iter().cloned(), config.player_count)?;

        Ok(Self {
            resolver: RoundResolver::from_config(&config)?,
            config,
            roster,
            start_position: 0,
            phase: GamePhase::NotStarted,
            dice,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Position that rolls first in the next round.
    #[must_use]
    pub fn start_position(&self) -> usize {
        self.start_position
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Finished { .. })
    }

    /// Rounds played so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.roster.total_wins()
    }

    /// The die source, e.g. to checkpoint RNG state.
    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// Play a single round.
    ///
    /// Returns `None` without rolling once the game is finished. The round
    /// that decides the game also emits [`GameEvent::GameWon`].
    pub fn play_round<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Option<RoundOutcome> {
        let round = match self.phase {
            GamePhase::Finished { .. } => return None,
            GamePhase::NotStarted => {
                tracing::info!(
                    players = self.roster.size(),
                    dice_per_player = self.config.dice_per_player,
                    "game started"
                );
                sink.emit(&GameEvent::GameStarted {
                    players: self.roster.size(),
                    dice_per_player: self.config.dice_per_player,
                });
                1
            }
            GamePhase::InProgress { round } => round + 1,
        };

        let outcome = self.resolver.resolve(
            &mut self.roster,
            round,
            self.start_position,
            &mut self.dice,
            sink,
        );
        self.start_position = outcome.winner;

        let winner = self.roster.player_at(outcome.winner);
        if winner.wins >= WIN_TARGET {
            tracing::info!(player = %winner.name, wins = winner.wins, rounds = round, "game won");
            sink.emit(&GameEvent::GameWon {
                position: outcome.winner,
                player: winner.name.clone(),
                wins: winner.wins,
                rounds: round,
            });
            self.phase = GamePhase::Finished {
                winner: outcome.winner,
            };
        } else {
            self.phase = GamePhase::InProgress { round };
        }

        Some(outcome)
    }

    /// Play rounds until a player reaches the win target.
    ///
    /// On an already finished game this rolls nothing and returns the same
    /// summary again.
    pub fn run<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> GameSummary {
        loop {
            if let GamePhase::Finished { winner } = self.phase {
                return self.summary(winner);
            }
            self.play_round(sink);
        }
    }

    /// Summary of a finished game, or `None` while it is still running.
    #[must_use]
    pub fn result(&self) -> Option<GameSummary> {
        match self.phase {
            GamePhase::Finished { winner } => Some(self.summary(winner)),
            _ => None,
        }
    }

    fn summary(&self, winner: usize) -> GameSummary {
        let player = self.roster.player_at(winner);
        GameSummary {
            winner,
            winner_name: player.name.clone(),
            wins: player.wins,
            rounds: self.rounds_played(),
            standings: self.roster.players().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::events::{EventLog, NullSink};

    #[test]
    fn test_invalid_config_rejected() {
        assert_eq!(
            DiceGame::new(GameConfig::new(1, 1)).err(),
            Some(ConfigurationError::TooFewPlayers { requested: 1 })
        );
        assert_eq!(
            DiceGame::new(GameConfig::new(2, 0)).err(),
            Some(ConfigurationError::NoDice)
        );
    }

    #[test]
    fn test_initial_state() {
        let game = DiceGame::new(GameConfig::default().with_seed(1)).unwrap();
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert_eq!(game.start_position(), 0);
        assert_eq!(game.rounds_played(), 0);
        assert!(game.result().is_none());
    }

    #[test]
    fn test_phase_transitions() {
        // P0 always rolls 6, P1 always rolls 1
        let mut game = DiceGame::with_dice(GameConfig::new(2, 1), ScriptedDice::new([6, 1])).unwrap();
        let mut log = EventLog::new();

        let first = game.play_round(&mut log).unwrap();
        assert_eq!(first.round, 1);
        assert_eq!(game.phase(), GamePhase::InProgress { round: 1 });
        assert_eq!(log.of_kind("game_started").count(), 1);

        for _ in 1..WIN_TARGET {
            game.play_round(&mut log).unwrap();
        }
        assert_eq!(game.phase(), GamePhase::Finished { winner: 0 });
        assert_eq!(log.of_kind("game_started").count(), 1);
        assert_eq!(log.of_kind("game_won").count(), 1);

        assert!(game.play_round(&mut log).is_none());
    }

    #[test]
    fn test_winner_starts_next_round() {
        // Round 1 from P0: 1, 5, 2 -> P1 wins. Round 2 from P1: 1, 6, 3 -> P2 wins.
        let mut game = DiceGame::with_dice(
            GameConfig::new(3, 1),
            ScriptedDice::new([1, 5, 2, 1, 6, 3]),
        )
        .unwrap();

        let first = game.play_round(&mut NullSink).unwrap();
        assert_eq!(first.winner, 1);
        assert_eq!(game.start_position(), 1);

        let second = game.play_round(&mut NullSink).unwrap();
        assert_eq!(second.start_position, 1);
        assert_eq!(second.rolls.as_slice(), &[(1, 1), (2, 6), (0, 3)]);
        assert_eq!(second.winner, 2);
        assert_eq!(game.start_position(), 2);
    }

    #[test]
    fn test_run_is_idempotent_after_finish() {
        let mut game = DiceGame::new(GameConfig::new(4, 3).with_seed(11)).unwrap();
        let first = game.run(&mut NullSink);
        let rounds = game.rounds_played();

        let again = game.run(&mut NullSink);
        assert_eq!(first, again);
        assert_eq!(game.rounds_played(), rounds);
        assert_eq!(game.result(), Some(first));
    }

    #[test]
    fn test_seeded_games_reproduce() {
        let config = GameConfig::new(3, 2).with_seed(2024);
        let mut a = DiceGame::new(config.clone()).unwrap();
        let mut b = DiceGame::new(config).unwrap();

        let mut log_a = EventLog::new();
        let mut log_b = EventLog::new();
        assert_eq!(a.run(&mut log_a), b.run(&mut log_b));
        assert_eq!(log_a.events(), log_b.events());
    }

    #[test]
    fn test_summary_serde() {
        let mut game = DiceGame::new(GameConfig::default().with_seed(5)).unwrap();
        let summary = game.run(&mut NullSink);

        let json = serde_json::to_string(&summary).unwrap();
        let restored: GameSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, restored);
    }
}
