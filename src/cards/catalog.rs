//! Card catalog for template lookup.
//!
//! The `CardCatalog` maps card identifiers to base stats. Decks are validated
//! against a catalog before any match starts.

use rustc_hash::FxHashMap;

use super::definition::CardTemplate;
use crate::core::{SimError, SimResult};

/// Registry of card templates keyed by name.
///
/// ## Example
///
/// ```
/// use card_balance_sim::cards::{CardCatalog, CardTemplate};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardTemplate::new("Imp", 20, 10, 40, 1)).unwrap();
///
/// assert_eq!(catalog.get("Imp").unwrap().speed, 40);
/// assert!(catalog.get("Dragon").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, CardTemplate>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The five cards of the base game.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = FxHashMap::default();
        for template in [
            CardTemplate::new("Goblin", 30, 15, 35, 1),
            CardTemplate::new("Skeleton", 75, 30, 15, 2),
            CardTemplate::new("Archer", 90, 55, 30, 4),
            CardTemplate::new("Wizard", 120, 75, 25, 6),
            CardTemplate::new("Knight", 240, 120, 20, 8),
        ] {
            cards.insert(template.name.clone(), template);
        }
        Self { cards }
    }

    /// Register a card template.
    ///
    /// Fails if the name is already taken or a stat is not positive.
    pub fn register(&mut self, template: CardTemplate) -> SimResult<()> {
        template.validate().map_err(SimError::InvalidConfiguration)?;
        if self.cards.contains_key(&template.name) {
            return Err(SimError::config(format!(
                "card '{}' already registered",
                template.name
            )));
        }
        self.cards.insert(template.name.clone(), template);
        Ok(())
    }

    /// Get a card template by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardTemplate> {
        self.cards.get(name)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card templates (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.cards.values()
    }
}
