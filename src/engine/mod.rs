//! Match engine: state, turn loop, results, and observers.
//!
//! `MatchEngine::simulate` runs one full match between two built decks and
//! returns a `MatchResult`. Progress can be watched through a
//! `MatchObserver` without affecting the outcome.

#[allow(clippy::module_inception)]
pub mod engine;
pub mod observer;
pub mod result;
pub mod state;

pub use engine::MatchEngine;
pub use observer::{AttackEvent, AttackTarget, MatchObserver, MatchRecorder, TurnSnapshot};
pub use result::{EndReason, MatchResult};
pub use state::{Field, MatchState};
