//! Built decks: validated, flavored, ready to play.

use serde::{Deserialize, Serialize};

use super::config::DeckConfig;
use crate::cards::{CardCatalog, Flavor, ModifiedCard};
use crate::core::{SimError, SimResult};
use crate::targeting::Strategy;

/// A deck after validation against a catalog and flavor application.
///
/// Immutable once built. The engine keeps its own draw cursor, so one `Deck`
/// can be shared by any number of matches, including concurrent ones.
///
/// ## Example
///
/// ```
/// use card_balance_sim::cards::CardCatalog;
/// use card_balance_sim::deck::{Deck, DeckConfig};
///
/// let config = DeckConfig::repeated("Goblin", 20).with_flavor("angry");
/// let deck = Deck::build(&config, &CardCatalog::standard()).unwrap();
///
/// assert_eq!(deck.len(), 20);
/// assert_eq!(deck.card(0).unwrap().attack, 19);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    name: String,
    flavor: Flavor,
    strategy: Strategy,
    cards: Vec<ModifiedCard>,
}

impl Deck {
    /// Validate `config` against `catalog` and apply its flavor.
    ///
    /// Unknown flavor and strategy tags fall back to their defaults;
    /// unknown cards and empty decks are errors.
    pub fn build(config: &DeckConfig, catalog: &CardCatalog) -> SimResult<Self> {
        let name = config.display_name().to_string();
        if config.cards.is_empty() {
            return Err(SimError::config(format!("deck '{name}' has no cards")));
        }

        let flavor = Flavor::from_tag_or_base(&config.flavor);
        let strategy = Strategy::from_tag_or_default(&config.strategy);

        let cards = config
            .cards
            .iter()
            .map(|card| {
                catalog
                    .get(card)
                    .map(|template| flavor.apply(template))
                    .ok_or_else(|| SimError::InvalidCardReference {
                        deck: name.clone(),
                        card: card.clone(),
                    })
            })
            .collect::<SimResult<Vec<_>>>()?;

        log::debug!("built deck '{name}': {} cards, {flavor}, {strategy}", cards.len());

        Ok(Self {
            name,
            flavor,
            strategy,
            cards,
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Card at draw position `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&ModifiedCard> {
        self.cards.get(index)
    }

    /// All cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[ModifiedCard] {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a built deck; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total mana cost of the deck, saturating at `i32::MAX`.
    #[must_use]
    pub fn total_cost(&self) -> i32 {
        self.cards.iter().fold(0, |total, c| total.saturating_add(c.cost))
    }
}
