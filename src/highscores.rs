//! Knives-stuck leaderboard
//!
//! Tracks the top 10 rounds of the current session. Nothing is written to
//! disk; a new process starts with an empty board.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Knives stuck before the miss
    pub knives: u32,
    /// Round number within the session
    pub round: u32,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, knives: u32) -> bool {
        if knives == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| knives > e.knives).unwrap_or(true)
    }

    /// Add a finished round, returns the rank achieved (1-indexed) if it qualified
    ///
    /// Ties keep the earlier round ahead.
    pub fn add_score(&mut self, knives: u32, round: u32) -> Option<usize> {
        if !self.qualifies(knives) {
            return None;
        }

        let entry = HighScoreEntry { knives, round };

        // Sorted descending by knives
        let pos = self.entries.iter().position(|e| knives > e.knives);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best knife count so far
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.knives)
    }
}
