//! Storage for CFR regrets and strategy sums.
//!
//! The store maps information-set keys to their accumulated statistics.
//! It is owned exclusively by the trainer while training and read through
//! an [`Equilibrium`](crate::cfr::equilibrium::Equilibrium) snapshot
//! afterwards, so plain `&mut` access suffices — there are never
//! concurrent writers.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

fn uniform(num_actions: usize) -> Vec<f64> {
    vec![1.0 / num_actions as f64; num_actions]
}

/// Accumulated statistics for one information set.
///
/// Created lazily on first visit, never destroyed during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoSet {
    /// Cumulative counterfactual regret per action (signed; vanilla CFR).
    pub regret_sum: Vec<f64>,
    /// Cumulative reach-weighted strategy per action, for averaging.
    pub strategy_sum: Vec<f64>,
    /// Number of regret updates applied at this set.
    pub visits: u64,
}

impl InfoSet {
    fn new(num_actions: usize) -> Self {
        Self {
            regret_sum: vec![0.0; num_actions],
            strategy_sum: vec![0.0; num_actions],
            visits: 0,
        }
    }

    /// Current strategy from regret matching.
    ///
    /// Proportional to the positive parts of the cumulative regrets;
    /// uniform when no action has positive regret. This is the single
    /// central update rule and is applied identically everywhere.
    pub fn current_strategy(&self) -> Vec<f64> {
        let positive: Vec<f64> = self.regret_sum.iter().map(|&r| r.max(0.0)).collect();
        let sum: f64 = positive.iter().sum();

        if sum > 0.0 {
            positive.iter().map(|&r| r / sum).collect()
        } else {
            uniform(self.regret_sum.len())
        }
    }

    /// Time-averaged strategy: normalized strategy sum, uniform if the
    /// set was never profitably visited.
    pub fn average_strategy(&self) -> Vec<f64> {
        let total: f64 = self.strategy_sum.iter().sum();
        if total > 0.0 {
            self.strategy_sum.iter().map(|&s| s / total).collect()
        } else {
            uniform(self.strategy_sum.len())
        }
    }
}

/// Mapping from information-set keys to accumulated regrets and strategy
/// sums.
#[derive(Debug, Clone, Default)]
pub struct InfoSetStore {
    entries: FxHashMap<String, InfoSet>,
}

impl InfoSetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the entry for `key`, creating an all-zero one on first visit.
    pub fn get_or_create(&mut self, key: &str, num_actions: usize) -> &mut InfoSet {
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| InfoSet::new(num_actions))
    }

    /// Regret-matched current strategy for `key`; uniform for unseen keys.
    pub fn current_strategy(&self, key: &str, num_actions: usize) -> Vec<f64> {
        match self.entries.get(key) {
            Some(entry) => entry.current_strategy(),
            None => uniform(num_actions),
        }
    }

    /// Time-averaged strategy for `key`; uniform for unseen keys.
    pub fn average_strategy(&self, key: &str, num_actions: usize) -> Vec<f64> {
        match self.entries.get(key) {
            Some(entry) => entry.average_strategy(),
            None => uniform(num_actions),
        }
    }

    /// Accumulate counterfactual regret deltas for `key` and count the
    /// visit. Deltas are signed; negative regret is kept (vanilla CFR).
    pub fn update_regrets(&mut self, key: &str, deltas: &[f64]) {
        let entry = self.get_or_create(key, deltas.len());
        debug_assert_eq!(entry.regret_sum.len(), deltas.len(), "action count changed for {}", key);
        for (slot, &delta) in entry.regret_sum.iter_mut().zip(deltas) {
            *slot += delta;
        }
        entry.visits += 1;
    }

    /// Accumulate `weight * strategy[a]` into the strategy sum for `key`.
    ///
    /// `weight` is the acting player's own reach probability.
    pub fn update_strategy_sum(&mut self, key: &str, strategy: &[f64], weight: f64) {
        let entry = self.get_or_create(key, strategy.len());
        for (slot, &prob) in entry.strategy_sum.iter_mut().zip(strategy) {
            *slot += prob * weight;
        }
    }

    /// Number of information sets created so far.
    pub fn num_info_sets(&self) -> usize {
        self.entries.len()
    }

    /// Whether `key` has been visited.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &InfoSet)> {
        self.entries.iter()
    }

    /// Discard everything, as when starting a fresh training run.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Snapshot the store in a serializable form.
    pub fn export(&self) -> StoreExport {
        StoreExport {
            entries: self.entries.clone(),
        }
    }

    /// Replace the store contents with a previously exported snapshot.
    pub fn import(&mut self, data: StoreExport) {
        self.entries = data.entries;
    }
}

/// Serializable snapshot of an [`InfoSetStore`] (key → regrets/strategy
/// pairs), for reuse across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreExport {
    /// All information-set entries keyed by info-set string.
    pub entries: FxHashMap<String, InfoSet>,
}
