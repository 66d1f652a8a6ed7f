//! Aggregate statistics over batches of matches.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::engine::{EndReason, MatchResult};

/// How many matches ended for each reason.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonCounts {
    pub player_hp: u32,
    pub deck_out: u32,
    pub timeout: u32,
}

impl ReasonCounts {
    fn record(&mut self, reason: EndReason) {
        match reason {
            EndReason::PlayerHp => self.player_hp += 1,
            EndReason::DeckOut => self.deck_out += 1,
            EndReason::Timeout => self.timeout += 1,
        }
    }
}

/// Head-to-head results of deck A (side 1) against deck B (side 2).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchupStats {
    /// Matches actually played (fewer than requested if cancelled).
    pub games: u32,
    pub wins_a: u32,
    pub wins_b: u32,
    /// Timeouts with equal HP under the draw policy.
    pub draws: u32,
    /// Deck A's win rate in percent.
    pub win_rate_a: f64,
    /// Mean ending turn.
    pub avg_turns: f64,
    pub reasons: ReasonCounts,
}

impl MatchupStats {
    /// Aggregate a batch of results.
    #[must_use]
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut stats = Self::default();
        let mut total_turns = 0u64;

        for result in results {
            stats.games += 1;
            total_turns += u64::from(result.turn);
            stats.reasons.record(result.reason);
            match result.winner {
                Some(Side::One) => stats.wins_a += 1,
                Some(Side::Two) => stats.wins_b += 1,
                None => stats.draws += 1,
            }
        }

        if stats.games > 0 {
            let games = f64::from(stats.games);
            stats.win_rate_a = f64::from(stats.wins_a) / games * 100.0;
            stats.avg_turns = total_turns as f64 / games;
        }
        stats
    }

    /// Deck B's win rate in percent.
    #[must_use]
    pub fn win_rate_b(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        f64::from(self.wins_b) / f64::from(self.games) * 100.0
    }
}

/// One opponent's line in a gauntlet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpponentRecord {
    pub opponent: String,
    pub stats: MatchupStats,
}

/// Results of one deck played against a field of opponents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GauntletStats {
    pub wins: u32,
    pub games: u32,
    /// Win rate in percent across every matchup, each game weighted equally.
    pub win_rate: f64,
    pub matchups: Vec<OpponentRecord>,
}

impl GauntletStats {
    /// Combine per-opponent results.
    #[must_use]
    pub fn from_matchups(matchups: Vec<OpponentRecord>) -> Self {
        let wins = matchups.iter().map(|m| m.stats.wins_a).sum();
        let games = matchups.iter().map(|m| m.stats.games).sum();
        let win_rate = if games == 0 {
            0.0
        } else {
            f64::from(wins) / f64::from(games) * 100.0
        };
        Self {
            wins,
            games,
            win_rate,
            matchups,
        }
    }
}
