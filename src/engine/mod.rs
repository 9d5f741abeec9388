//! Turn sequencing: the [`MoveProvider`] seam both sides plug into, and the
//! [`TurnEngine`] state machine that alternates between them.

mod provider;
mod report;
mod turn_engine;

pub use provider::{AgentProvider, MoveProvider, MoveRequest};
pub use report::{AppliedMove, MatchTally, Reporter};
pub use turn_engine::TurnEngine;
