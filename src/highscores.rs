//! Best round scores of the session
//!
//! Kept in memory only; the end screen shows the top entry.

/// Table size
pub const MAX_HIGH_SCORES: usize = 10;

/// One finished round
#[derive(Debug, Clone, PartialEq)]
pub struct HighScoreEntry {
    /// Apples collected
    pub score: u32,
    /// How long the round lasted (seconds)
    pub round_seconds: f64,
}

/// Finished rounds, best first
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Whether `score` would enter the table
    pub fn qualifies(&self, score: u32) -> bool {
        score > 0
            && (self.entries.len() < MAX_HIGH_SCORES
                || self.entries.last().is_some_and(|e| score > e.score))
    }

    /// Record a finished round. Returns its 1-based rank, or `None` when it
    /// did not make the table.
    pub fn add_score(&mut self, score: u32, round_seconds: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        // Equal scores keep the earlier round ahead
        let index = self.entries.partition_point(|e| e.score >= score);
        self.entries.insert(
            index,
            HighScoreEntry {
                score,
                round_seconds,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(index + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}
