//! Targeting strategies.
//!
//! Each strategy is a pure decision over a candidate list: it never mutates
//! units, the engine applies damage after selection. Ties always go to the
//! candidate seen first, i.e. the earliest in field order.

use serde::{Deserialize, Serialize};

use crate::cards::UnitInstance;

/// Policy an attacking unit's side uses to pick its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Hit the most expensive enemy.
    TargetMana,
    /// Kill the biggest enemy this hit can kill, else hit the biggest enemy.
    KillShot,
    /// Waste as little damage as possible.
    #[default]
    OptimizeDamage,
}

const STRATEGY_TAGS: &[(&str, Strategy)] = &[
    ("target-mana", Strategy::TargetMana),
    ("kill-shot", Strategy::KillShot),
    ("optimize-damage", Strategy::OptimizeDamage),
];

impl Strategy {
    /// Look up a strategy by its tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        STRATEGY_TAGS
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|&(_, strategy)| strategy)
    }

    /// Look up a strategy, falling back to `OptimizeDamage` for unknown tags.
    #[must_use]
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_else(|| {
            log::warn!("unknown strategy '{tag}', using optimize-damage");
            Strategy::default()
        })
    }

    /// The tag this strategy is written as in deck configs.
    #[must_use]
    pub fn tag(self) -> &'static str {
        STRATEGY_TAGS
            .iter()
            .find(|&&(_, strategy)| strategy == self)
            .map_or("optimize-damage", |&(name, _)| name)
    }

    /// Pick a target for `attacker` among `candidates`.
    ///
    /// Returns the position of the chosen candidate, or `None` only when
    /// `candidates` is empty (the attacker then hits the player directly).
    ///
    /// ```
    /// use card_balance_sim::cards::{ModifiedCard, UnitInstance};
    /// use card_balance_sim::core::Side;
    /// use card_balance_sim::targeting::Strategy;
    ///
    /// let unit = |hp, cost| UnitInstance::deploy(
    ///     &ModifiedCard { name: "U".into(), hp, attack: 10, speed: 10, cost },
    ///     Side::Two,
    /// );
    /// let attacker = unit(50, 1);
    /// let (cheap, pricey) = (unit(40, 1), unit(40, 6));
    ///
    /// let pick = Strategy::TargetMana.select_target(&attacker, &[&cheap, &pricey]);
    /// assert_eq!(pick, Some(1));
    /// assert_eq!(Strategy::KillShot.select_target(&attacker, &[]), None);
    /// ```
    #[must_use]
    pub fn select_target(self, attacker: &UnitInstance, candidates: &[&UnitInstance]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        let damage = attacker.attack;
        let all = || candidates.iter().copied().enumerate();

        match self {
            Strategy::TargetMana => first_max_by_key(all(), |u| u.cost),
            Strategy::KillShot => {
                let killable = all().filter(|(_, u)| u.is_killed_by(damage));
                first_max_by_key(killable, |u| u.current_hp)
                    .or_else(|| first_max_by_key(all(), |u| u.current_hp))
            }
            Strategy::OptimizeDamage => {
                let leftover = |u: &UnitInstance| u.current_hp.saturating_sub(damage);
                let survivors = all().filter(|(_, u)| u.current_hp >= damage);
                first_min_by_key(survivors, leftover)
                    .or_else(|| first_min_by_key(all(), |u| leftover(u).saturating_abs()))
            }
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Index of the first candidate with the largest key.
fn first_max_by_key<'a, I>(candidates: I, key: impl Fn(&UnitInstance) -> i32) -> Option<usize>
where
    I: Iterator<Item = (usize, &'a UnitInstance)>,
{
    let mut best: Option<(usize, i32)> = None;
    for (index, unit) in candidates {
        let value = key(unit);
        if best.map_or(true, |(_, top)| value > top) {
            best = Some((index, value));
        }
    }
    best.map(|(index, _)| index)
}

/// Index of the first candidate with the smallest key.
fn first_min_by_key<'a, I>(candidates: I, key: impl Fn(&UnitInstance) -> i32) -> Option<usize>
where
    I: Iterator<Item = (usize, &'a UnitInstance)>,
{
    let mut best: Option<(usize, i32)> = None;
    for (index, unit) in candidates {
        let value = key(unit);
        if best.map_or(true, |(_, low)| value < low) {
            best = Some((index, value));
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ModifiedCard;
    use crate::core::Side;

    fn unit(hp: i32, attack: i32, cost: i32) -> UnitInstance {
        UnitInstance::deploy(
            &ModifiedCard {
                name: format!("u{hp}"),
                hp,
                attack,
                speed: 10,
                cost,
            },
            Side::Two,
        )
    }

    #[test]
    fn test_tag_lookup() {
        assert_eq!(Strategy::from_tag("kill-shot"), Some(Strategy::KillShot));
        assert_eq!(Strategy::from_tag("target-mana"), Some(Strategy::TargetMana));
        assert_eq!(Strategy::from_tag("killshot"), None);
        assert_eq!(Strategy::from_tag_or_default("random"), Strategy::OptimizeDamage);

        for strategy in [Strategy::TargetMana, Strategy::KillShot, Strategy::OptimizeDamage] {
            assert_eq!(Strategy::from_tag(strategy.tag()), Some(strategy));
        }
    }

    #[test]
    fn test_empty_candidates() {
        let attacker = unit(10, 10, 1);
        for strategy in [Strategy::TargetMana, Strategy::KillShot, Strategy::OptimizeDamage] {
            assert_eq!(strategy.select_target(&attacker, &[]), None);
        }
    }

    #[test]
    fn test_target_mana_highest_cost() {
        let attacker = unit(10, 10, 1);
        let (a, b, c) = (unit(30, 1, 1), unit(30, 1, 8), unit(30, 1, 4));
        assert_eq!(Strategy::TargetMana.select_target(&attacker, &[&a, &b, &c]), Some(1));
    }

    #[test]
    fn test_target_mana_tie_goes_first() {
        let attacker = unit(10, 10, 1);
        let (a, b, c) = (unit(30, 1, 2), unit(90, 1, 6), unit(120, 1, 6));
        assert_eq!(Strategy::TargetMana.select_target(&attacker, &[&a, &b, &c]), Some(1));
    }

    #[test]
    fn test_kill_shot_biggest_kill() {
        let attacker = unit(10, 50, 1);
        // 30 and 45 are killable, 90 is not
        let (a, b, c) = (unit(30, 1, 1), unit(90, 1, 1), unit(45, 1, 1));
        assert_eq!(Strategy::KillShot.select_target(&attacker, &[&a, &b, &c]), Some(2));
    }

    #[test]
    fn test_kill_shot_exact_lethal_counts() {
        let attacker = unit(10, 50, 1);
        let (a, b) = (unit(51, 1, 1), unit(50, 1, 1));
        assert_eq!(Strategy::KillShot.select_target(&attacker, &[&a, &b]), Some(1));
    }

    #[test]
    fn test_kill_shot_falls_back_to_highest_hp() {
        let attacker = unit(10, 15, 1);
        let (a, b, c) = (unit(75, 1, 1), unit(240, 1, 1), unit(240, 1, 1));
        assert_eq!(Strategy::KillShot.select_target(&attacker, &[&a, &b, &c]), Some(1));
    }

    #[test]
    fn test_kill_shot_uses_current_hp() {
        let attacker = unit(10, 30, 1);
        let mut wounded = unit(120, 1, 1);
        wounded.take_damage(100);
        let fresh = unit(25, 1, 1);
        // wounded has 20 hp left: both killable, fresh is bigger
        assert_eq!(Strategy::KillShot.select_target(&attacker, &[&wounded, &fresh]), Some(1));
    }

    #[test]
    fn test_optimize_damage_least_leftover() {
        let attacker = unit(10, 30, 1);
        // leftovers: 45, 0, 90; 20 would die
        let (a, b, c, d) = (unit(75, 1, 1), unit(30, 1, 1), unit(120, 1, 1), unit(20, 1, 1));
        assert_eq!(
            Strategy::OptimizeDamage.select_target(&attacker, &[&a, &b, &c, &d]),
            Some(1)
        );
    }

    #[test]
    fn test_optimize_damage_closest_when_all_die() {
        let attacker = unit(10, 100, 1);
        // waste: 70, 10, 45
        let (a, b, c) = (unit(30, 1, 1), unit(90, 1, 1), unit(55, 1, 1));
        assert_eq!(Strategy::OptimizeDamage.select_target(&attacker, &[&a, &b, &c]), Some(1));
    }

    #[test]
    fn test_optimize_damage_extreme_values() {
        let attacker = unit(10, i32::MAX, 1);
        let mut overkilled = unit(30, 1, 1);
        overkilled.take_damage(i32::MAX);
        let healthy = unit(1, 1, 1);
        // nothing survives; waste for the overkilled unit saturates
        assert_eq!(
            Strategy::OptimizeDamage.select_target(&attacker, &[&overkilled, &healthy]),
            Some(1)
        );

        let tank = unit(i32::MAX, 1, 1);
        assert_eq!(
            Strategy::OptimizeDamage.select_target(&attacker, &[&healthy, &tank]),
            Some(1)
        );
    }

    #[test]
    fn test_optimize_damage_tie_goes_first() {
        let attacker = unit(10, 30, 1);
        let (a, b) = (unit(40, 1, 4), unit(40, 1, 8));
        assert_eq!(Strategy::OptimizeDamage.select_target(&attacker, &[&a, &b]), Some(0));
    }
}
