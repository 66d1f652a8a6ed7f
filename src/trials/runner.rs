//! Trial runner: many matches between fixed decks.
//!
//! Matches never share state, so a batch runs on the rayon pool by default.
//! Trial `i` of a batch uses tie-break seed `base_seed + i`; a batch is
//! therefore reproducible whether it runs in parallel or not.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;

use super::stats::{GauntletStats, MatchupStats, OpponentRecord};
use crate::core::{GameRng, MatchConfig, SimError, SimResult, TieBreak};
use crate::deck::Deck;
use crate::engine::{MatchEngine, MatchResult};

/// Runs batches of matches and aggregates their results.
///
/// ## Example
///
/// ```
/// use card_balance_sim::cards::CardCatalog;
/// use card_balance_sim::core::MatchConfig;
/// use card_balance_sim::deck::{presets, Deck};
/// use card_balance_sim::trials::TrialRunner;
///
/// let catalog = CardCatalog::standard();
/// let rush = Deck::build(&presets::goblin_rush(), &catalog).unwrap();
/// let control = Deck::build(&presets::archer_control(), &catalog).unwrap();
///
/// let runner = TrialRunner::new(MatchConfig::default()).unwrap();
/// let stats = runner.run_matchup(&rush, &control, 50).unwrap();
///
/// assert_eq!(stats.games, 50);
/// assert_eq!(stats.wins_a + stats.wins_b + stats.draws, 50);
/// ```
#[derive(Clone, Debug)]
pub struct TrialRunner {
    engine: MatchEngine,
    parallel: bool,
    cancel: Option<Arc<AtomicBool>>,
}

impl TrialRunner {
    /// Create a parallel runner for the given engine configuration.
    pub fn new(config: MatchConfig) -> SimResult<Self> {
        Ok(Self {
            engine: MatchEngine::new(config)?,
            parallel: true,
            cancel: None,
        })
    }

    /// Run matches on the rayon pool (default) or one after another.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Stop starting new matches once `flag` is set.
    ///
    /// Matches already running finish; matches not yet started are skipped
    /// and not counted.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Play `count` matches of `deck_a` (side 1) against `deck_b` (side 2).
    pub fn run_matchup(&self, deck_a: &Deck, deck_b: &Deck, count: usize) -> SimResult<MatchupStats> {
        check_count(count)?;
        let results = self.play_batch(deck_a, deck_b, count, 0);
        let stats = MatchupStats::from_results(&results);

        log::info!(
            "'{}' vs '{}': {}-{}-{} over {} games ({:.1}%, {:.1} turns)",
            deck_a.name(),
            deck_b.name(),
            stats.wins_a,
            stats.wins_b,
            stats.draws,
            stats.games,
            stats.win_rate_a,
            stats.avg_turns,
        );
        Ok(stats)
    }

    /// Play `deck` as side 1 against every opponent, `games_per_matchup`
    /// matches each.
    pub fn run_gauntlet(
        &self,
        deck: &Deck,
        opponents: &[Deck],
        games_per_matchup: usize,
    ) -> SimResult<GauntletStats> {
        check_count(games_per_matchup)?;
        if opponents.is_empty() {
            return Err(SimError::config("gauntlet needs at least one opponent"));
        }

        let matchups = opponents
            .iter()
            .enumerate()
            .map(|(i, opponent)| {
                let offset = (i * games_per_matchup) as u64;
                let results = self.play_batch(deck, opponent, games_per_matchup, offset);
                OpponentRecord {
                    opponent: opponent.name().to_string(),
                    stats: MatchupStats::from_results(&results),
                }
            })
            .collect();

        let stats = GauntletStats::from_matchups(matchups);
        log::info!(
            "'{}' gauntlet: {}/{} wins ({:.1}%)",
            deck.name(),
            stats.wins,
            stats.games,
            stats.win_rate,
        );
        Ok(stats)
    }

    fn play_batch(&self, deck_a: &Deck, deck_b: &Deck, count: usize, offset: u64) -> Vec<MatchResult> {
        let play = |i: usize| {
            if self.is_cancelled() {
                return None;
            }
            let tie_break = self.tie_break_for(offset + i as u64);
            Some(self.engine.simulate_observed(deck_a, deck_b, tie_break, &mut ()))
        };

        let results: Vec<_> = if self.parallel {
            (0..count).into_par_iter().filter_map(play).collect()
        } else {
            (0..count).filter_map(play).collect()
        };

        if results.len() < count {
            log::warn!("batch cancelled after {} of {} matches", results.len(), count);
        }
        results
    }

    fn tie_break_for(&self, trial: u64) -> TieBreak {
        match self.engine.config().tie_break {
            TieBreak::Seeded(seed) => TieBreak::Seeded(GameRng::trial_seed(seed, trial)),
            TieBreak::FieldOrder => TieBreak::FieldOrder,
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

fn check_count(count: usize) -> SimResult<()> {
    if count == 0 {
        return Err(SimError::config("trial count must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCatalog;
    use crate::deck::DeckConfig;

    fn build(config: DeckConfig) -> Deck {
        Deck::build(&config, &CardCatalog::standard()).unwrap()
    }

    #[test]
    fn test_zero_count_rejected() {
        let runner = TrialRunner::new(MatchConfig::default()).unwrap();
        let deck = build(DeckConfig::new(["Goblin"]));

        assert!(matches!(
            runner.run_matchup(&deck, &deck, 0),
            Err(SimError::InvalidConfiguration(_))
        ));
        assert!(runner.run_gauntlet(&deck, &[deck.clone()], 0).is_err());
        assert!(runner.run_gauntlet(&deck, &[], 5).is_err());
    }

    #[test]
    fn test_trial_seeds_follow_batch_seed() {
        let runner = TrialRunner::new(MatchConfig::default().with_tie_break(TieBreak::Seeded(100))).unwrap();
        assert_eq!(runner.tie_break_for(0), TieBreak::Seeded(100));
        assert_eq!(runner.tie_break_for(5), TieBreak::Seeded(105));

        let ordered = TrialRunner::new(MatchConfig::default().with_tie_break(TieBreak::FieldOrder)).unwrap();
        assert_eq!(ordered.tie_break_for(5), TieBreak::FieldOrder);
    }

    #[test]
    fn test_cancelled_runner_plays_nothing() {
        let flag = Arc::new(AtomicBool::new(true));
        let runner = TrialRunner::new(MatchConfig::default())
            .unwrap()
            .with_cancel_flag(flag);
        let deck = build(DeckConfig::repeated("Goblin", 20));

        let stats = runner.run_matchup(&deck, &deck, 25).unwrap();
        assert_eq!(stats.games, 0);
        assert_eq!(stats.win_rate_a, 0.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let goblins = build(DeckConfig::repeated("Goblin", 20).with_strategy("kill-shot"));
        let skeletons = build(DeckConfig::repeated("Skeleton", 20).with_flavor("hardy"));

        let parallel = TrialRunner::new(MatchConfig::default()).unwrap();
        let sequential = parallel.clone().with_parallel(false);

        let a = parallel.run_matchup(&goblins, &skeletons, 40).unwrap();
        let b = sequential.run_matchup(&goblins, &skeletons, 40).unwrap();
        assert_eq!(a, b);
    }
}
