//! Opponent observation and style classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::adapt::AdaptConfig;
use crate::games::kuhn::KuhnAction;

/// Coarse playing-style classification of an opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Bets well above a balanced frequency.
    Aggressive,
    /// Checks and folds well above a balanced frequency.
    Passive,
    /// Bet frequency between the two thresholds.
    Balanced,
    /// Nothing observed yet.
    Unknown,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Aggressive => "aggressive",
            Classification::Passive => "passive",
            Classification::Balanced => "balanced",
            Classification::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Where an observed action was taken, as far as the profiler cares:
/// whether the opponent was answering a check.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObservedContext {
    /// The action came after we checked (empty history or our pass last).
    pub after_our_check: bool,
}

impl ObservedContext {
    /// Context for an action taken after our check.
    pub fn after_check() -> Self {
        Self { after_our_check: true }
    }

    /// Derive the context from the public history at the moment the
    /// opponent acted (the trailing character is our move, if any).
    pub fn from_history(history: &str) -> Self {
        Self {
            after_our_check: history.ends_with('p'),
        }
    }
}

/// Running model of one opponent's tendencies.
///
/// Counts accumulate for the lifetime of a matchup and are never discarded
/// mid-session; [`reset`](OpponentProfiler::reset) starts a new opponent.
/// Classification is recomputed from the running frequencies on demand, so
/// it may change as more hands are observed — there is no hysteresis.
#[derive(Debug, Clone)]
pub struct OpponentProfiler {
    config: AdaptConfig,
    bet_count: u64,
    pass_count: u64,
    bet_after_check_count: u64,
}

impl OpponentProfiler {
    /// Create a profiler with the given tuning.
    pub fn new(config: AdaptConfig) -> Self {
        Self {
            config,
            bet_count: 0,
            pass_count: 0,
            bet_after_check_count: 0,
        }
    }

    /// Record one observed opponent action.
    pub fn observe(&mut self, action: KuhnAction, context: ObservedContext) {
        match action {
            KuhnAction::Bet => {
                self.bet_count += 1;
                if context.after_our_check {
                    self.bet_after_check_count += 1;
                }
            }
            KuhnAction::Pass => self.pass_count += 1,
        }
    }

    /// Total actions observed so far.
    pub fn total_observations(&self) -> u64 {
        self.bet_count + self.pass_count
    }

    /// Observed bets.
    pub fn bet_count(&self) -> u64 {
        self.bet_count
    }

    /// Observed checks/folds.
    pub fn pass_count(&self) -> u64 {
        self.pass_count
    }

    /// Bets made in response to our check (probe/steal tendency).
    pub fn bet_after_check_count(&self) -> u64 {
        self.bet_after_check_count
    }

    /// Fraction of observed actions that were bets, or `None` before any
    /// observation.
    pub fn bet_frequency(&self) -> Option<f64> {
        let total = self.total_observations();
        if total == 0 {
            None
        } else {
            Some(self.bet_count as f64 / total as f64)
        }
    }

    /// Confidence in the classification, saturating toward 1 with sample
    /// size: n / (n + halfway). Near 0 for small samples.
    pub fn confidence(&self) -> f64 {
        let n = self.total_observations() as f64;
        n / (n + self.config.confidence_halfway as f64)
    }

    /// Current classification with its confidence.
    pub fn classify(&self) -> (Classification, f64) {
        let frequency = match self.bet_frequency() {
            Some(f) => f,
            None => return (Classification::Unknown, 0.0),
        };

        let class = if frequency > self.config.aggressive_threshold {
            Classification::Aggressive
        } else if frequency < self.config.passive_threshold {
            Classification::Passive
        } else {
            Classification::Balanced
        };
        (class, self.confidence())
    }

    /// Forget everything, as when a new opponent sits down.
    pub fn reset(&mut self) {
        self.bet_count = 0;
        self.pass_count = 0;
        self.bet_after_check_count = 0;
    }
}
