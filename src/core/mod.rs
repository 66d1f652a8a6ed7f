//! Core engine types: sides, configuration, RNG, errors.
//!
//! These are the building blocks every other module depends on.

pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::GameRng;
pub use config::{MatchConfig, TieBreak, TimeoutTiePolicy};
pub use error::{SimError, SimResult};
