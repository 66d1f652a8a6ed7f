//! Trial batches: head-to-head matchups and gauntlets.
//!
//! - `TrialRunner::run_matchup`: one pairing, N matches
//! - `TrialRunner::run_gauntlet`: one deck against a field of opponents

pub mod runner;
pub mod stats;

pub use runner::TrialRunner;
pub use stats::{GauntletStats, MatchupStats, OpponentRecord, ReasonCounts};
