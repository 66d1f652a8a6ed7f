//! Decks: raw configuration, built card pools, and presets.
//!
//! A `DeckConfig` is what users write (card names plus tags). `Deck::build`
//! validates it against a `CardCatalog` and applies the flavor once, giving
//! the immutable pool the engine draws from.

pub mod config;
#[allow(clippy::module_inception)]
pub mod deck;
pub mod presets;

pub use config::DeckConfig;
pub use deck::Deck;
pub use presets::{preset, PRESET_NAMES};
