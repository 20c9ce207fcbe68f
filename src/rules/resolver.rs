//! Round resolution.
//!
//! One round is one circuit of the roster: every player rolls exactly once,
//! in seating order starting from the round's start position. The highest
//! total wins. Ties go to whoever rolled that total first, so a later player
//! must strictly beat the current leader to take over.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{check_dice, ConfigurationError, GameConfig, Roster};
use crate::dice::DieSource;
use crate::events::{EventSink, GameEvent};

/// Per-player totals for a round, in traversal order.
pub type RoundRolls = SmallVec<[(usize, u32); 8]>;

/// What happened in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Round number, starting at 1.
    pub round: u32,
    /// Position that rolled first.
    pub start_position: usize,
    /// Position of the round winner. Next round starts here.
    pub winner: usize,
    /// The winning total.
    pub winning_total: u32,
    /// `(position, total)` for every player, in the order they rolled.
    pub rolls: RoundRolls,
}

/// Resolves rounds for a fixed dice setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResolver {
    dice_per_player: u32,
    die_faces: u32,
}

impl RoundResolver {
    /// Create a resolver rolling `dice_per_player` dice of `die_faces` faces.
    ///
    /// Rejects the same dice setups as [`GameConfig::validate`], so a
    /// resolver never fails once built.
    pub fn new(dice_per_player: u32, die_faces: u32) -> Result<Self, ConfigurationError> {
        check_dice(dice_per_player, die_faces)?;
        Ok(Self {
            dice_per_player,
            die_faces,
        })
    }

    /// Create a resolver matching a game configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigurationError> {
        Self::new(config.dice_per_player, config.die_faces)
    }

    /// Play one round starting at `start` and credit the winner.
    ///
    /// Exactly one player's win count goes up by one. The returned
    /// `winner` is always a valid roster position.
    pub fn resolve<D, S>(
        &self,
        roster: &mut Roster,
        round: u32,
        start: usize,
        dice: &mut D,
        sink: &mut S,
    ) -> RoundOutcome
    where
        D: DieSource + ?Sized,
        S: EventSink + ?Sized,
    {
        let start = roster.wrap(start);
        let mut rolls = RoundRolls::new();
        let mut leader: Option<(usize, u32)> = None;

        for position in roster.turn_order(start) {
            let total = self.roll_turn(roster, round, position, dice, sink);
            rolls.push((position, total));

            // Strictly greater: an equal total never displaces the leader.
            match leader {
                Some((_, best)) if total <= best => {}
                _ => leader = Some((position, total)),
            }
        }

        // turn_order yields at least one position for any valid roster
        let (winner, winning_total) = leader.unwrap_or((start, 0));
        let wins = roster.record_win(winner);
        let player = &roster.player_at(winner).name;

        tracing::debug!(round, winner, winning_total, wins, player = %player, "round resolved");
        sink.emit(&GameEvent::RoundWon {
            round,
            position: winner,
            player: player.clone(),
            total: winning_total,
            wins,
        });

        RoundOutcome {
            round,
            start_position: start,
            winner,
            winning_total,
            rolls,
        }
    }

    /// Roll every die for one player and return the sum.
    fn roll_turn<D, S>(
        &self,
        roster: &Roster,
        round: u32,
        position: usize,
        dice: &mut D,
        sink: &mut S,
    ) -> u32
    where
        D: DieSource + ?Sized,
        S: EventSink + ?Sized,
    {
        let player = roster.player_at(position);
        sink.emit(&GameEvent::TurnStarted {
            round,
            position,
            player: player.name.clone(),
            wins: player.wins,
        });

        let mut total: u32 = 0;
        for die in 1..=self.dice_per_player {
            let face = dice.roll(self.die_faces);
            tracing::trace!(round, position, die, face, "die rolled");
            sink.emit(&GameEvent::DieRolled {
                round,
                position,
                player: player.name.clone(),
                die,
                face,
            });
            // Construction bounds dice * faces, so this only saturates on
            // a source that rolls outside 1..=faces.
            total = total.saturating_add(face);
        }

        sink.emit(&GameEvent::TurnFinished {
            round,
            position,
            player: player.name.clone(),
            total,
        });
        total
    }
}
