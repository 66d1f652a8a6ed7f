//! The match engine: one full game from empty fields to a result.
//!
//! Every turn runs the same phases in the same order:
//!
//! 1. **Deploy**: each side draws front-to-back while it has field slots,
//!    cards, and mana left. Both sides get the full mana value.
//! 2. **Combat**: every unit on both fields acts once, fastest first.
//!    Units killed earlier in the pass do not act. With no enemy units
//!    alive, the attack hits the enemy player.
//! 3. **Cleanup**: dead units leave their fields.
//! 4. **Win check**: lethal damage first (side 1 checked first), then
//!    deck-out, otherwise mana grows and the next turn starts.
//!
//! After `max_turns` turns the match times out and the side with more HP
//! wins.

use std::cmp::Reverse;

use smallvec::SmallVec;

use super::observer::{AttackEvent, AttackTarget, MatchObserver, TurnSnapshot};
use super::result::{EndReason, MatchResult};
use super::state::MatchState;
use crate::cards::UnitInstance;
use crate::core::{GameRng, MatchConfig, Side, SideMap, SimResult, TieBreak, TimeoutTiePolicy};
use crate::deck::Deck;

/// A unit's place in the combat queue.
#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    side: Side,
    index: usize,
    speed: i32,
}

/// Orders equal-speed units according to a `TieBreak`.
enum SpeedOrder {
    Random(GameRng),
    FieldOrder,
}

impl SpeedOrder {
    fn new(tie_break: TieBreak) -> Self {
        match tie_break {
            TieBreak::Seeded(seed) => SpeedOrder::Random(GameRng::new(seed)),
            TieBreak::FieldOrder => SpeedOrder::FieldOrder,
        }
    }

    /// Sort fastest first. The sort is stable, so a prior shuffle decides
    /// the order among equal speeds.
    fn sort(&mut self, queue: &mut [QueueEntry]) {
        if let SpeedOrder::Random(rng) = self {
            rng.shuffle(queue);
        }
        queue.sort_by_key(|entry| Reverse(entry.speed));
    }
}

/// Runs matches under a fixed configuration.
///
/// The engine holds no per-match state, so one engine can run any number of
/// matches, from any number of threads.
///
/// ## Example
///
/// ```
/// use card_balance_sim::cards::CardCatalog;
/// use card_balance_sim::core::{MatchConfig, Side};
/// use card_balance_sim::deck::{Deck, DeckConfig};
/// use card_balance_sim::engine::{EndReason, MatchEngine};
///
/// let catalog = CardCatalog::standard();
/// let goblin = Deck::build(&DeckConfig::new(["Goblin"]).with_flavor("angry"), &catalog).unwrap();
/// let skeleton = Deck::build(&DeckConfig::new(["Skeleton"]).with_flavor("hardy"), &catalog).unwrap();
///
/// let engine = MatchEngine::new(MatchConfig::default()).unwrap();
/// let result = engine.simulate(&goblin, &skeleton);
///
/// assert_eq!(result.winner, Some(Side::Two));
/// assert_eq!(result.reason, EndReason::DeckOut);
/// assert_eq!(result.turn, 1);
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    /// Create an engine, rejecting nonsensical limits.
    pub fn new(config: MatchConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play `deck_one` (side 1) against `deck_two` (side 2).
    #[must_use]
    pub fn simulate(&self, deck_one: &Deck, deck_two: &Deck) -> MatchResult {
        self.simulate_observed(deck_one, deck_two, self.config.tie_break, &mut ())
    }

    /// Play a match with an explicit tie-break and an observer.
    pub fn simulate_observed(
        &self,
        deck_one: &Deck,
        deck_two: &Deck,
        tie_break: TieBreak,
        observer: &mut dyn MatchObserver,
    ) -> MatchResult {
        let decks = SideMap::from_pair(deck_one, deck_two);
        let mut state = MatchState::new(&self.config);
        let mut order = SpeedOrder::new(tie_break);

        log::debug!(
            "match start: '{}' ({}, {}) vs '{}' ({}, {})",
            deck_one.name(),
            deck_one.flavor(),
            deck_one.strategy(),
            deck_two.name(),
            deck_two.flavor(),
            deck_two.strategy(),
        );

        let result = loop {
            observer.on_turn_start(state.turn, state.mana);

            self.deploy(&mut state, &decks);
            observer.on_deployed(&TurnSnapshot::capture(&state, &decks));

            self.combat(&mut state, &decks, &mut order, observer);

            let removed = state.cleanup();
            observer.on_cleanup(&TurnSnapshot::capture(&state, &decks));

            log::trace!(
                "turn {}: {} died, hp {}/{}, fields {}/{}",
                state.turn,
                removed,
                state.hp[Side::One],
                state.hp[Side::Two],
                state.fields[Side::One].len(),
                state.fields[Side::Two].len(),
            );

            if let Some(result) = self.check_winner(&state, &decks) {
                break result;
            }
            if state.turn >= self.config.max_turns {
                break self.timeout(&state);
            }
            state.advance_turn(&self.config);
        };

        log::debug!("match end: {result}");
        observer.on_finish(&result);
        result
    }

    /// Deploy greedily in draw order for each side.
    fn deploy(&self, state: &mut MatchState, decks: &SideMap<&Deck>) {
        for side in Side::BOTH {
            let deck = decks[side];
            let mut spent: i32 = 0;

            while !state.fields[side].is_full() {
                let Some(card) = deck.card(state.cursors[side]) else {
                    break;
                };
                let after = spent.saturating_add(card.cost);
                if after > state.mana {
                    break;
                }
                state.fields[side].push(UnitInstance::deploy(card, side));
                state.cursors[side] += 1;
                spent = after;
            }
        }
    }

    /// One combat pass over every unit alive at the start of combat.
    fn combat(
        &self,
        state: &mut MatchState,
        decks: &SideMap<&Deck>,
        order: &mut SpeedOrder,
        observer: &mut dyn MatchObserver,
    ) {
        let fields = &state.fields;
        let mut queue: Vec<QueueEntry> = Side::BOTH
            .into_iter()
            .flat_map(|side| {
                fields[side]
                    .units()
                    .iter()
                    .enumerate()
                    .filter(|(_, u)| u.is_alive())
                    .map(move |(index, u)| QueueEntry {
                        side,
                        index,
                        speed: u.speed,
                    })
            })
            .collect();
        order.sort(&mut queue);

        for entry in queue {
            let enemy = entry.side.opponent();
            let Some(attacker) = state.fields[entry.side].get(entry.index) else {
                continue;
            };
            if !attacker.is_alive() {
                continue;
            }
            let damage = attacker.attack;

            let target = {
                let alive = state.fields[enemy].alive_indices();
                let candidates: SmallVec<[&UnitInstance; 5]> = alive
                    .iter()
                    .filter_map(|&i| state.fields[enemy].get(i))
                    .collect();
                decks[entry.side]
                    .strategy()
                    .select_target(attacker, &candidates)
                    .map(|pos| alive[pos])
            };
            let attacker_name = attacker.name.clone();

            let hit = match target.and_then(|i| state.fields[enemy].get_mut(i)) {
                Some(unit) => {
                    unit.take_damage(damage);
                    AttackTarget::Unit {
                        name: unit.name.clone(),
                        hp_after: unit.current_hp,
                    }
                }
                None => {
                    state.hp[enemy] = state.hp[enemy].saturating_sub(damage);
                    AttackTarget::Player {
                        hp_after: state.hp[enemy],
                    }
                }
            };

            observer.on_attack(&AttackEvent {
                side: entry.side,
                attacker: attacker_name,
                damage,
                target: hit,
            });
        }
    }

    /// Lethal damage, then deck-out, each checked for side 1 first.
    fn check_winner(&self, state: &MatchState, decks: &SideMap<&Deck>) -> Option<MatchResult> {
        for side in Side::BOTH {
            if state.hp[side.opponent()] <= 0 {
                return Some(MatchResult::won(side, state.turn, EndReason::PlayerHp));
            }
        }
        for side in Side::BOTH {
            let loser = side.opponent();
            let exhausted = state.remaining(loser, decks[loser].len()) == 0;
            if state.fields[loser].is_empty() && exhausted {
                return Some(MatchResult::won(side, state.turn, EndReason::DeckOut));
            }
        }
        None
    }

    /// Strictly higher HP wins; equal HP follows the timeout tie policy.
    fn timeout(&self, state: &MatchState) -> MatchResult {
        let (one, two) = (state.hp[Side::One], state.hp[Side::Two]);
        let winner = if one > two {
            Some(Side::One)
        } else if two > one {
            Some(Side::Two)
        } else {
            match self.config.timeout_tie {
                TimeoutTiePolicy::Draw => None,
                TimeoutTiePolicy::Award(side) => Some(side),
            }
        };
        MatchResult {
            winner,
            turn: self.config.max_turns,
            reason: EndReason::Timeout,
        }
    }
}
