//! Event emission for reporting.
//!
//! ## Architecture
//!
//! ```text
//! Round Resolver ──emit──► EventSink ──► console / JSON / tracing / test log
//! Game Loop ──────emit──┘
//! ```
//!
//! The core only knows the event shapes; how they are rendered is up to the sink.

pub mod event;
pub mod sink;

pub use event::GameEvent;
pub use sink::{EventLog, EventSink, NullSink, TracingSink};
