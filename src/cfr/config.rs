//! Configuration and statistics for the CFR trainer.

use serde::{Deserialize, Serialize};

/// Configuration for [`CfrTrainer`](crate::cfr::trainer::CfrTrainer).
///
/// Training is fully deterministic: every deal is enumerated each
/// iteration, so there is no seed here. Randomness only enters at play
/// time, where the caller supplies its own RNG.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Number of points to keep in the convergence gain trace.
    ///
    /// The trainer records the running average root gain roughly this many
    /// times over a `train` call. Zero disables the trace.
    pub gain_trace_points: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            gain_trace_points: 100,
        }
    }
}

impl TrainerConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the gain-trace resolution (0 disables).
    pub fn with_gain_trace_points(mut self, points: usize) -> Self {
        self.gain_trace_points = points;
        self
    }
}

/// Statistics tracked across training runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Total number of iterations completed.
    pub iterations: u64,

    /// Number of unique information sets discovered.
    pub info_sets: usize,

    /// Total time spent training (in seconds).
    pub elapsed_seconds: f64,

    /// Iterations per second.
    pub iterations_per_second: f64,

    /// Sampled convergence trace: |cumulative root gain| / iteration.
    ///
    /// Shrinks toward the game value magnitude (1/18 for standard Kuhn
    /// Poker) as the strategy stabilizes.
    pub gain_trace: Vec<GainPoint>,
}

/// One sample of the convergence gain trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GainPoint {
    /// Iteration number when this sample was taken.
    pub iteration: u64,
    /// Absolute average root gain per iteration so far.
    pub avg_gain: f64,
}

impl TrainingStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update iterations per second based on elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.iterations_per_second = self.iterations as f64 / self.elapsed_seconds;
        }
    }

    /// Record a gain-trace sample.
    pub fn record_gain(&mut self, iteration: u64, avg_gain: f64) {
        self.gain_trace.push(GainPoint { iteration, avg_gain });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = TrainerConfig::new().with_gain_trace_points(10);
        assert_eq!(config.gain_trace_points, 10);
    }

    #[test]
    fn stats_rate_update() {
        let mut stats = TrainingStats::new();
        stats.iterations = 1000;
        stats.elapsed_seconds = 2.0;
        stats.update_rate();
        assert!((stats.iterations_per_second - 500.0).abs() < 1e-9);
    }
}
