//! # card-balance-sim
//!
//! Balance simulator for a two-player auto-battler card game.
//!
//! Two decks play a full match: each turn both sides deploy cards under a
//! growing mana budget, every unit attacks once in speed order, dead units
//! are cleared, and the match ends on lethal damage, deck-out, or timeout.
//! Repeating a matchup thousands of times gives win rates for comparing
//! card stats, deck lists, flavors and targeting strategies.
//!
//! ## Design Principles
//!
//! 1. **Templates vs. instances**: catalog and flavored cards are immutable;
//!    only deployed `UnitInstance`s carry hp that changes.
//!
//! 2. **Configuration over constants**: field size, turn limit, starting HP
//!    and mana live in `MatchConfig`.
//!
//! 3. **Reproducible**: equal-speed ordering comes from a seeded `TieBreak`,
//!    so every match and every batch can be replayed.
//!
//! ## Modules
//!
//! - `core`: Sides, configuration, RNG, errors
//! - `cards`: Card templates, catalog, flavors, unit instances
//! - `targeting`: Target selection strategies
//! - `deck`: Deck configuration, building, presets
//! - `engine`: The match engine and its observers
//! - `trials`: Batch runners and statistics

pub mod core;
pub mod cards;
pub mod targeting;
pub mod deck;
pub mod engine;
pub mod trials;

// Re-export commonly used types
pub use crate::core::{
    GameRng, MatchConfig, Side, SideMap, SimError, SimResult, TieBreak, TimeoutTiePolicy,
};

pub use crate::cards::{CardCatalog, CardTemplate, Flavor, ModifiedCard, UnitInstance};

pub use crate::targeting::Strategy;

pub use crate::deck::{Deck, DeckConfig};

pub use crate::engine::{
    EndReason, MatchEngine, MatchObserver, MatchRecorder, MatchResult, MatchState, TurnSnapshot,
};

pub use crate::trials::{GauntletStats, MatchupStats, TrialRunner};
