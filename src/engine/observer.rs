//! Match observers: read-only hooks for progress reporting.
//!
//! The engine calls an observer at fixed points of every turn. Observers see
//! copies of the state they need and cannot influence the outcome.

use serde::{Deserialize, Serialize};

use super::result::MatchResult;
use super::state::MatchState;
use crate::core::{Side, SideMap};
use crate::deck::Deck;

/// Per-side summary of the match at one point in a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub turn: u32,
    pub mana: i32,
    pub field_sizes: SideMap<usize>,
    pub hp: SideMap<i32>,
    /// Cards left to draw.
    pub remaining: SideMap<usize>,
    /// Current hp of every unit on each field, in field order.
    pub unit_hp: SideMap<Vec<i32>>,
}

impl TurnSnapshot {
    /// Capture the observable parts of `state`.
    #[must_use]
    pub fn capture(state: &MatchState, decks: &SideMap<&Deck>) -> Self {
        Self {
            turn: state.turn,
            mana: state.mana,
            field_sizes: state.fields.map(|_, field| field.len()),
            hp: state.hp.clone(),
            remaining: SideMap::new(|side| state.remaining(side, decks[side].len())),
            unit_hp: state
                .fields
                .map(|_, field| field.units().iter().map(|u| u.current_hp).collect()),
        }
    }
}

/// What an attack hit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackTarget {
    /// An enemy unit, with its hp after the hit.
    Unit { name: String, hp_after: i32 },
    /// The enemy player, with their HP after the hit.
    Player { hp_after: i32 },
}

/// One unit's attack during combat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackEvent {
    pub side: Side,
    pub attacker: String,
    pub damage: i32,
    pub target: AttackTarget,
}

/// Hooks called by the engine. Every method defaults to doing nothing.
pub trait MatchObserver {
    /// A new turn begins with `mana` available to each side.
    fn on_turn_start(&mut self, _turn: u32, _mana: i32) {}

    /// Both sides finished deploying.
    fn on_deployed(&mut self, _snapshot: &TurnSnapshot) {}

    /// A unit attacked.
    fn on_attack(&mut self, _event: &AttackEvent) {}

    /// Dead units were removed.
    fn on_cleanup(&mut self, _snapshot: &TurnSnapshot) {}

    /// The match ended.
    fn on_finish(&mut self, _result: &MatchResult) {}
}

/// The unit observer ignores everything.
impl MatchObserver for () {}

/// Observer that keeps every snapshot and attack, for tests and replays.
#[derive(Clone, Debug, Default)]
pub struct MatchRecorder {
    pub deployed: Vec<TurnSnapshot>,
    pub cleaned: Vec<TurnSnapshot>,
    pub attacks: Vec<AttackEvent>,
    pub result: Option<MatchResult>,
}

impl MatchRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest field size seen on either side.
    #[must_use]
    pub fn max_field_size(&self) -> usize {
        self.deployed
            .iter()
            .chain(&self.cleaned)
            .flat_map(|s| s.field_sizes.iter().map(|(_, &n)| n))
            .max()
            .unwrap_or(0)
    }
}

impl MatchObserver for MatchRecorder {
    fn on_deployed(&mut self, snapshot: &TurnSnapshot) {
        self.deployed.push(snapshot.clone());
    }

    fn on_attack(&mut self, event: &AttackEvent) {
        self.attacks.push(event.clone());
    }

    fn on_cleanup(&mut self, snapshot: &TurnSnapshot) {
        self.cleaned.push(snapshot.clone());
    }

    fn on_finish(&mut self, result: &MatchResult) {
        self.result = Some(*result);
    }
}
