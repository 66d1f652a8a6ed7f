//! Raw deck configuration as supplied by the user.
//!
//! Flavor and strategy are kept as tags here; they are parsed (with their
//! permissive fallbacks) when the deck is built.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{SimError, SimResult};

fn default_flavor() -> String {
    "base".to_string()
}

fn default_strategy() -> String {
    "optimize-damage".to_string()
}

/// Deck configuration: ordered card names plus flavor and strategy tags.
///
/// Draw order is the order of `cards`; decks are never shuffled.
///
/// ```
/// use card_balance_sim::deck::DeckConfig;
///
/// let json = r#"{"name": "Bats", "cards": ["Goblin", "Goblin"], "flavor": "speedy"}"#;
/// let config: DeckConfig = serde_json::from_str(json).unwrap();
///
/// assert_eq!(config.cards.len(), 2);
/// assert_eq!(config.strategy, "optimize-damage");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Display label.
    #[serde(default)]
    pub name: Option<String>,

    /// Card identifiers in draw order.
    pub cards: Vec<String>,

    /// Flavor tag (`base`, `speedy`, `hardy`, `angry`). Also read from `type`.
    #[serde(default = "default_flavor", alias = "type")]
    pub flavor: String,

    /// Strategy tag (`target-mana`, `kill-shot`, `optimize-damage`). Also
    /// read from `targetStrategy`.
    #[serde(default = "default_strategy", alias = "targetStrategy")]
    pub strategy: String,
}

impl DeckConfig {
    /// Create an unnamed base-flavored deck from card names.
    pub fn new<I, S>(cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            cards: cards.into_iter().map(Into::into).collect(),
            flavor: default_flavor(),
            strategy: default_strategy(),
        }
    }

    /// Deck of `count` copies of one card.
    pub fn repeated(card: &str, count: usize) -> Self {
        Self::new(std::iter::repeat(card).take(count))
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the flavor tag.
    #[must_use]
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = flavor.into();
        self
    }

    /// Set the strategy tag.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Append more cards to the draw order.
    #[must_use]
    pub fn then<I, S>(mut self, cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cards.extend(cards.into_iter().map(Into::into));
        self
    }

    /// Name shown in reports, falling back to "Deck".
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Deck")
    }

    /// Load a deck configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let file_error = |reason: String| SimError::DeckFile {
            path: path.to_path_buf(),
            reason,
        };
        let text = std::fs::read_to_string(path).map_err(|e| file_error(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| file_error(e.to_string()))
    }
}
