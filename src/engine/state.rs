//! Match state: fields, player HP, draw cursors, mana and turn.
//!
//! `MatchState` is created fresh for every match and owned by the engine
//! for that match only.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::UnitInstance;
use crate::core::{MatchConfig, Side, SideMap};

/// Inline capacity of a field; matches the standard field size.
const FIELD_INLINE: usize = 5;

/// One side's deployed units, in deployment order.
///
/// Units are addressed by index. Indices stay stable for a whole combat pass
/// because dead units are only removed during cleanup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    units: SmallVec<[UnitInstance; FIELD_INLINE]>,
    capacity: usize,
}

impl Field {
    /// Create an empty field holding at most `capacity` units.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            units: SmallVec::new(),
            capacity,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.units.len() >= self.capacity
    }

    /// Add a unit. Returns false (and drops the unit) if the field is full.
    pub fn push(&mut self, unit: UnitInstance) -> bool {
        if self.is_full() {
            return false;
        }
        self.units.push(unit);
        true
    }

    /// All units, including ones killed earlier in the current combat pass.
    #[must_use]
    pub fn units(&self) -> &[UnitInstance] {
        &self.units
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&UnitInstance> {
        self.units.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut UnitInstance> {
        self.units.get_mut(index)
    }

    /// Indices of units above 0 hp, in field order.
    #[must_use]
    pub fn alive_indices(&self) -> SmallVec<[usize; FIELD_INLINE]> {
        self.units
            .iter()
            .enumerate()
            .filter(|(_, u)| u.is_alive())
            .map(|(i, _)| i)
            .collect()
    }

    /// Remove every unit at or below 0 hp. Returns how many were removed.
    pub fn remove_dead(&mut self) -> usize {
        let before = self.units.len();
        self.units.retain(|u| u.is_alive());
        before - self.units.len()
    }
}

/// Complete state of one match in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub fields: SideMap<Field>,
    /// Player HP totals.
    pub hp: SideMap<i32>,
    /// Number of cards each side has drawn.
    pub cursors: SideMap<usize>,
    /// Mana each side may spend this turn.
    pub mana: i32,
    /// Current turn, starting at 1.
    pub turn: u32,
}

impl MatchState {
    /// Initial state: turn 1, empty fields, full HP, nothing drawn.
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            fields: SideMap::new(|_| Field::new(config.max_field_size)),
            hp: SideMap::with_value(config.starting_hp),
            cursors: SideMap::with_value(0),
            mana: config.mana_for_turn(1),
            turn: 1,
        }
    }

    /// Remove dead units from both fields. Returns the total removed.
    pub fn cleanup(&mut self) -> usize {
        self.fields.iter_mut().map(|(_, field)| field.remove_dead()).sum()
    }

    /// Move to the next turn and grow the mana pool.
    pub fn advance_turn(&mut self, config: &MatchConfig) {
        self.turn += 1;
        self.mana = config.mana_for_turn(self.turn);
    }

    /// Cards `side` has not drawn yet from a deck of `deck_len` cards.
    #[must_use]
    pub fn remaining(&self, side: Side, deck_len: usize) -> usize {
        deck_len.saturating_sub(self.cursors[side])
    }
}
