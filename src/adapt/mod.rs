//! Play-time opponent adaptation.
//!
//! The trained [`Equilibrium`](crate::cfr::Equilibrium) is unexploitable
//! but also unexploiting: it concedes the same value to every opponent.
//! This module layers a coarse opponent model on top — classify the
//! opponent's style from observed actions, then bias decisions toward an
//! exploitative response once the classification is confident enough.

pub mod decision;
pub mod profiler;

pub use decision::AdaptiveDecisionMaker;
pub use profiler::{Classification, ObservedContext, OpponentProfiler};

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};

/// Tuning knobs for classification and strategy biasing.
///
/// The thresholds and blend curve are heuristic, hand-tuned constants —
/// the classification is deliberately coarse (three styles), so none of
/// these values derive from theory. Defaults follow the spirit of the
/// bet-frequency cutoffs and the 0.3 adjustment used when this system was
/// first tuned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptConfig {
    /// Bet frequency above which an opponent is classified Aggressive.
    pub aggressive_threshold: f64,

    /// Bet frequency below which an opponent is classified Passive.
    pub passive_threshold: f64,

    /// Minimum classification confidence before any bias is applied.
    /// Below this the equilibrium distribution is used unmodified.
    pub min_confidence: f64,

    /// Blend factor λ in [0, 1] between the equilibrium distribution
    /// (λ = 0) and the fully exploitative heuristic (λ = 1).
    pub blend: f64,

    /// Observation count at which confidence reaches 0.5
    /// (confidence = n / (n + this)).
    pub confidence_halfway: u64,
}

impl Default for AdaptConfig {
    fn default() -> Self {
        Self {
            aggressive_threshold: 0.66,
            passive_threshold: 0.33,
            min_confidence: 0.5,
            blend: 0.3,
            confidence_halfway: 20,
        }
    }
}

impl AdaptConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the blend factor.
    pub fn with_blend(mut self, blend: f64) -> Self {
        self.blend = blend;
        self
    }

    /// Builder method: set the minimum confidence gate.
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Builder method: set the classification thresholds.
    pub fn with_thresholds(mut self, passive: f64, aggressive: f64) -> Self {
        self.passive_threshold = passive;
        self.aggressive_threshold = aggressive;
        self
    }

    /// Check all values are in range and the thresholds are ordered.
    pub fn validate(&self) -> SolverResult<()> {
        for (name, value) in [
            ("aggressive_threshold", self.aggressive_threshold),
            ("passive_threshold", self.passive_threshold),
            ("min_confidence", self.min_confidence),
            ("blend", self.blend),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SolverError::InvalidConfig(format!(
                    "{} = {} is outside [0, 1]",
                    name, value
                )));
            }
        }
        if self.passive_threshold >= self.aggressive_threshold {
            return Err(SolverError::InvalidConfig(format!(
                "passive threshold {} must be below aggressive threshold {}",
                self.passive_threshold, self.aggressive_threshold
            )));
        }
        if self.confidence_halfway == 0 {
            return Err(SolverError::InvalidConfig(
                "confidence_halfway must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
