//! Terminal match results.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    /// A player's HP reached 0 or below.
    PlayerHp,
    /// A side had no units on field and no cards left to draw.
    DeckOut,
    /// The turn limit was reached.
    Timeout,
}

impl EndReason {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            EndReason::PlayerHp => "player-hp",
            EndReason::DeckOut => "deck-out",
            EndReason::Timeout => "timeout",
        }
    }
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Outcome of one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    /// Winning side; `None` only for a timeout draw.
    pub winner: Option<Side>,
    /// Turn on which the match ended.
    pub turn: u32,
    pub reason: EndReason,
}

impl MatchResult {
    /// A match won by `side`.
    #[must_use]
    pub const fn won(side: Side, turn: u32, reason: EndReason) -> Self {
        Self {
            winner: Some(side),
            turn,
            reason,
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Some(side) => write!(f, "{side} wins on turn {} ({})", self.turn, self.reason),
            None => write!(f, "draw on turn {} ({})", self.turn, self.reason),
        }
    }
}
