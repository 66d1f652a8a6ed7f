//! Unit instances: runtime state of a card deployed on a field.
//!
//! A `UnitInstance` copies its stats from a `ModifiedCard` at deployment and
//! then only ever loses hp. Units at or below 0 hp are removed during cleanup
//! and never come back.

use serde::{Deserialize, Serialize};

use super::definition::ModifiedCard;
use crate::core::Side;

/// A card deployed on one side's field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitInstance {
    pub name: String,
    pub attack: i32,
    pub speed: i32,
    pub cost: i32,
    pub max_hp: i32,
    /// Goes to zero or below when the unit dies; never raised above `max_hp`.
    pub current_hp: i32,
    /// Side that deployed this unit.
    pub owner: Side,
}

impl UnitInstance {
    /// Deploy a card for the given side at full hp.
    #[must_use]
    pub fn deploy(card: &ModifiedCard, owner: Side) -> Self {
        Self {
            name: card.name.clone(),
            attack: card.attack,
            speed: card.speed,
            cost: card.cost,
            max_hp: card.hp,
            current_hp: card.hp,
            owner,
        }
    }

    /// Is this unit still standing?
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Subtract damage. No overkill capping: hp may go below zero, down to
    /// `i32::MIN`.
    pub fn take_damage(&mut self, amount: i32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Would a hit of `damage` kill this unit?
    #[must_use]
    pub fn is_killed_by(&self, damage: i32) -> bool {
        self.current_hp <= damage
    }
}
