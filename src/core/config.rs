//! Match engine configuration.
//!
//! Every balance constant the engine uses lives here so experiments can
//! change them without touching engine code:
//! - `MatchConfig`: field size, turn limit, starting HP and mana
//! - `TieBreak`: how equal-speed units are ordered in combat
//! - `TimeoutTiePolicy`: who wins a timeout with equal HP

use serde::{Deserialize, Serialize};

use super::error::{SimError, SimResult};
use super::side::Side;

/// Ordering policy for units with equal speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Random order drawn from a ChaCha8 stream with this seed.
    ///
    /// The same seed always produces the same combat order.
    Seeded(u64),
    /// Side 1 before side 2, field order within a side.
    FieldOrder,
}

impl Default for TieBreak {
    fn default() -> Self {
        TieBreak::Seeded(0)
    }
}

/// Outcome of a timeout when both players have the same HP.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeoutTiePolicy {
    /// Neither side wins.
    #[default]
    Draw,
    /// The given side wins. `Award(Side::Two)` reproduces the legacy rule.
    Award(Side),
}

/// Engine constants for one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Maximum units on one side's field.
    pub max_field_size: usize,

    /// Turn limit; the match times out after this many turns.
    pub max_turns: u32,

    /// Player HP at the start of the match.
    pub starting_hp: i32,

    /// Mana available on turn 1.
    pub starting_mana: i32,

    /// Mana added at the end of every turn.
    pub mana_increment: i32,

    /// Ordering of equal-speed units in combat.
    pub tie_break: TieBreak,

    /// Winner of a timeout with equal HP.
    pub timeout_tie: TimeoutTiePolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_field_size: 5,
            max_turns: 20,
            starting_hp: 100,
            starting_mana: 4,
            mana_increment: 1,
            tie_break: TieBreak::default(),
            timeout_tie: TimeoutTiePolicy::default(),
        }
    }
}

impl MatchConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field size limit.
    #[must_use]
    pub fn with_max_field_size(mut self, size: usize) -> Self {
        self.max_field_size = size;
        self
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Set starting player HP.
    #[must_use]
    pub fn with_starting_hp(mut self, hp: i32) -> Self {
        self.starting_hp = hp;
        self
    }

    /// Set mana available on turn 1.
    #[must_use]
    pub fn with_starting_mana(mut self, mana: i32) -> Self {
        self.starting_mana = mana;
        self
    }

    /// Set per-turn mana growth.
    #[must_use]
    pub fn with_mana_increment(mut self, increment: i32) -> Self {
        self.mana_increment = increment;
        self
    }

    /// Set the speed tie-break policy.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the timeout tie policy.
    #[must_use]
    pub fn with_timeout_tie(mut self, policy: TimeoutTiePolicy) -> Self {
        self.timeout_tie = policy;
        self
    }

    /// Mana available on the given (1-based) turn.
    #[must_use]
    pub fn mana_for_turn(&self, turn: u32) -> i32 {
        let elapsed = i32::try_from(turn.saturating_sub(1)).unwrap_or(i32::MAX);
        self.starting_mana
            .saturating_add(elapsed.saturating_mul(self.mana_increment))
    }

    /// Check the limits make sense before any match runs.
    pub fn validate(&self) -> SimResult<()> {
        if self.max_field_size == 0 {
            return Err(SimError::config("max field size must be at least 1"));
        }
        if self.max_turns == 0 {
            return Err(SimError::config("max turns must be at least 1"));
        }
        if self.starting_hp <= 0 {
            return Err(SimError::config(format!(
                "starting hp must be positive, got {}",
                self.starting_hp
            )));
        }
        if self.starting_mana < 0 {
            return Err(SimError::config(format!(
                "starting mana must not be negative, got {}",
                self.starting_mana
            )));
        }
        if self.mana_increment < 0 {
            return Err(SimError::config(format!(
                "mana increment must not be negative, got {}",
                self.mana_increment
            )));
        }
        Ok(())
    }
}
