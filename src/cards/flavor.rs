//! Deck flavors: stat-modifier profiles applied once at deck-build time.

use serde::{Deserialize, Serialize};

use super::definition::{CardTemplate, ModifiedCard};

/// Stat-modifier profile applied to every card of a deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flavor {
    /// No change.
    #[default]
    Base,
    /// +15 speed.
    Speedy,
    /// hp × 1.25.
    Hardy,
    /// attack × 1.25.
    Angry,
}

const FLAVOR_TAGS: &[(&str, Flavor)] = &[
    ("base", Flavor::Base),
    ("speedy", Flavor::Speedy),
    ("hardy", Flavor::Hardy),
    ("angry", Flavor::Angry),
];

const SPEEDY_BONUS: i32 = 15;
const SCALE: f64 = 1.25;

impl Flavor {
    /// Look up a flavor by its tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        FLAVOR_TAGS
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|&(_, flavor)| flavor)
    }

    /// Look up a flavor, falling back to `Base` for unknown tags.
    #[must_use]
    pub fn from_tag_or_base(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_else(|| {
            log::warn!("unknown flavor '{tag}', using base");
            Flavor::Base
        })
    }

    /// The tag this flavor is written as in deck configs.
    #[must_use]
    pub fn tag(self) -> &'static str {
        FLAVOR_TAGS
            .iter()
            .find(|&&(_, flavor)| flavor == self)
            .map_or("base", |&(name, _)| name)
    }

    /// Apply this flavor to a template. Name and cost are never changed.
    ///
    /// ```
    /// use card_balance_sim::cards::{CardTemplate, Flavor};
    ///
    /// let skeleton = CardTemplate::new("Skeleton", 75, 30, 15, 2);
    /// let hardy = Flavor::Hardy.apply(&skeleton);
    /// assert_eq!(hardy.hp, 94);
    /// assert_eq!(hardy.cost, 2);
    /// ```
    #[must_use]
    pub fn apply(self, template: &CardTemplate) -> ModifiedCard {
        let mut card = ModifiedCard::from(template);
        match self {
            Flavor::Base => {}
            Flavor::Speedy => card.speed = card.speed.saturating_add(SPEEDY_BONUS),
            Flavor::Hardy => card.hp = scale(card.hp),
            Flavor::Angry => card.attack = scale(card.attack),
        }
        card
    }
}

impl std::fmt::Display for Flavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Multiply by 1.25 and round half up, saturating at `i32::MAX`.
fn scale(stat: i32) -> i32 {
    (f64::from(stat) * SCALE + 0.5).floor() as i32
}
