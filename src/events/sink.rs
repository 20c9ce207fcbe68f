//! Event sinks.
//!
//! A sink is the reporting side of a game. The engine pushes every
//! [`GameEvent`] into one and never reads anything back.

use super::event::GameEvent;

/// Receiver for game events.
pub trait EventSink {
    /// Accept one event.
    fn emit(&mut self, event: &GameEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &GameEvent) {
        (**self).emit(event);
    }
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &GameEvent) {}
}

/// Collects events in order for later inspection.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Events of one kind (see [`GameEvent::kind`]).
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a GameEvent> + 'a {
        self.events.iter().filter(move |e| e.kind() == kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Forwards events into `tracing` as structured records.
///
/// Dice go out at `TRACE`, turns at `DEBUG`, round and game results at `INFO`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted { players, dice_per_player } => {
                tracing::info!(players, dice_per_player, "game started");
            }
            GameEvent::TurnStarted { round, position, player, wins } => {
                tracing::debug!(round, position, player = %player, wins, "turn started");
            }
            GameEvent::DieRolled { round, position, player, die, face } => {
                tracing::trace!(round, position, player = %player, die, face, "die rolled");
            }
            GameEvent::TurnFinished { round, position, player, total } => {
                tracing::debug!(round, position, player = %player, total, "turn finished");
            }
            GameEvent::RoundWon { round, position, player, total, wins } => {
                tracing::info!(round, position, player = %player, total, wins, "round won");
            }
            GameEvent::GameWon { position, player, wins, rounds } => {
                tracing::info!(position, player = %player, wins, rounds, "game won");
            }
        }
    }
}
