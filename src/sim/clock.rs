//! Round countdown
//!
//! Wall-clock based: `remaining = budget - (now - started_at)`, so a stalled
//! frame costs exactly the real time that passed. Elapsed time and the
//! result are both rounded to tenths, the precision the HUD shows.

use serde::{Deserialize, Serialize};

use crate::round_tenths;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundClock {
    /// Clock reading when the round started (seconds)
    started_at: f64,
    /// Seconds available from `started_at`, grows with bonuses
    budget: f64,
}

impl RoundClock {
    pub fn new(budget: f64) -> Self {
        Self {
            started_at: 0.0,
            budget,
        }
    }

    /// Begin a round at `now` with a fresh budget
    pub fn start(&mut self, now: f64, budget: f64) {
        self.started_at = now;
        self.budget = budget;
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn started_at(&self) -> f64 {
        self.started_at
    }

    /// Seconds since the round started, in tenths
    pub fn elapsed(&self, now: f64) -> f64 {
        round_tenths(now - self.started_at)
    }

    /// Seconds left, in tenths
    pub fn remaining(&self, now: f64) -> f64 {
        round_tenths(self.budget - self.elapsed(now))
    }

    /// Extend the round. Added to the budget rather than to `remaining`
    /// so it keeps counting against real elapsed time.
    pub fn add_bonus(&mut self, seconds: f64) {
        self.budget += seconds;
    }

    /// Replace the budget without moving the start reference
    pub fn reset_budget(&mut self, budget: f64) {
        self.budget = budget;
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.remaining(now) <= 0.0
    }
}
