//! Card definitions: static card data.
//!
//! `CardTemplate` holds the base stats of a card type as the catalog lists
//! them. `ModifiedCard` is the same template after a deck's flavor has been
//! applied. Neither carries runtime state; damage lives on `UnitInstance`.

use serde::{Deserialize, Serialize};

/// Base stats of one card type.
///
/// ## Example
///
/// ```
/// use card_balance_sim::cards::CardTemplate;
///
/// let goblin = CardTemplate::new("Goblin", 30, 15, 35, 1);
/// assert_eq!(goblin.hp, 30);
/// assert!(goblin.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Catalog identifier (e.g. "Goblin").
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub speed: i32,
    /// Mana cost to deploy.
    pub cost: i32,
}

impl CardTemplate {
    /// Create a card template.
    #[must_use]
    pub fn new(name: impl Into<String>, hp: i32, attack: i32, speed: i32, cost: i32) -> Self {
        Self {
            name: name.into(),
            hp,
            attack,
            speed,
            cost,
        }
    }

    /// Check that every stat is positive.
    pub fn validate(&self) -> Result<(), String> {
        let stats = [
            ("hp", self.hp),
            ("attack", self.attack),
            ("speed", self.speed),
            ("cost", self.cost),
        ];
        for (stat, value) in stats {
            if value <= 0 {
                return Err(format!("card '{}' has non-positive {stat} ({value})", self.name));
            }
        }
        Ok(())
    }
}

/// A card template with its deck's flavor applied.
///
/// Still a template: every deployment copies these stats into a fresh
/// `UnitInstance`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifiedCard {
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub speed: i32,
    pub cost: i32,
}

impl From<&CardTemplate> for ModifiedCard {
    fn from(template: &CardTemplate) -> Self {
        Self {
            name: template.name.clone(),
            hp: template.hp,
            attack: template.attack,
            speed: template.speed,
            cost: template.cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_stats() {
        assert!(CardTemplate::new("Knight", 240, 120, 20, 8).validate().is_ok());

        let err = CardTemplate::new("Ghost", 0, 10, 10, 1).validate().unwrap_err();
        assert!(err.contains("hp"));

        let err = CardTemplate::new("Free", 10, 10, 10, 0).validate().unwrap_err();
        assert!(err.contains("cost"));
    }

    #[test]
    fn test_modified_card_from_template() {
        let template = CardTemplate::new("Archer", 90, 55, 30, 4);
        let card = ModifiedCard::from(&template);

        assert_eq!(card.name, "Archer");
        assert_eq!(card.hp, 90);
        assert_eq!(card.attack, 55);
        assert_eq!(card.speed, 30);
        assert_eq!(card.cost, 4);
    }

    #[test]
    fn test_template_serialization() {
        let template = CardTemplate::new("Wizard", 120, 75, 25, 6);
        let json = serde_json::to_string(&template).unwrap();
        let deserialized: CardTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(template, deserialized);
    }
}
