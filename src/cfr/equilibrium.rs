//! Frozen average-strategy snapshot.
//!
//! Training accumulates into the mutable [`InfoSetStore`]; play and
//! analysis read a derived [`Equilibrium`], which is a plain value with no
//! mutating API. Downstream consumers cannot corrupt the trained strategy.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cfr::game::{Game, InfoState};
use crate::cfr::storage::InfoSetStore;

/// Read-only view of the time-averaged strategy profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equilibrium {
    strategies: FxHashMap<String, Vec<f64>>,
}

impl Equilibrium {
    /// Snapshot the average strategy of every information set in `store`.
    pub fn from_store(store: &InfoSetStore) -> Self {
        let strategies = store
            .iter()
            .map(|(key, entry)| (key.clone(), entry.average_strategy()))
            .collect();
        Self { strategies }
    }

    /// Action-probability distribution at `key`.
    ///
    /// Information sets never visited during training fall back to the
    /// uniform distribution over `num_actions` actions.
    pub fn action_distribution(&self, key: &str, num_actions: usize) -> Vec<f64> {
        match self.strategies.get(key) {
            Some(dist) => dist.clone(),
            None => vec![1.0 / num_actions as f64; num_actions],
        }
    }

    /// Number of information sets in the snapshot.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Whether the snapshot is empty (untrained).
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Iterate over (key, distribution) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<f64>)> {
        self.strategies.iter()
    }

    /// Expected value for `player` when everyone plays this profile.
    ///
    /// Re-runs one frozen-strategy evaluation pass over the enumerated
    /// deals. Diagnostic: for standard Kuhn Poker at equilibrium the first
    /// mover's value is −1/18.
    pub fn expected_value<G: Game>(&self, game: &G, player: usize) -> f64 {
        game.chance_outcomes()
            .into_iter()
            .map(|(root, prob)| prob * self.node_value(game, &root, player))
            .sum()
    }

    fn node_value<G: Game>(&self, game: &G, state: &G::State, player: usize) -> f64 {
        if game.is_terminal(state) {
            return game.payoff(state, player);
        }

        let actions = game.legal_actions(state);
        if actions.is_empty() {
            return game.payoff(state, player);
        }

        let key = game.info_state(state).key();
        let dist = self.action_distribution(&key, actions.len());

        actions
            .iter()
            .zip(dist.iter())
            .map(|(&action, &prob)| {
                if prob == 0.0 {
                    return 0.0;
                }
                let next = game.next_state(state, action);
                prob * self.node_value(game, &next, player)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::kuhn::KuhnPoker;

    #[test]
    fn unseen_keys_are_uniform() {
        let equilibrium = Equilibrium::from_store(&InfoSetStore::new());
        assert!(equilibrium.is_empty());
        assert_eq!(equilibrium.action_distribution("K:", 2), vec![0.5, 0.5]);
    }

    #[test]
    fn snapshot_is_detached_from_store() {
        let mut store = InfoSetStore::new();
        store.update_strategy_sum("J:", &[0.0, 1.0], 1.0);
        let equilibrium = Equilibrium::from_store(&store);

        // Later training must not leak into the snapshot.
        store.update_strategy_sum("J:", &[1.0, 0.0], 9.0);
        assert_eq!(equilibrium.action_distribution("J:", 2), vec![0.0, 1.0]);
    }

    #[test]
    fn uniform_profile_value_is_known() {
        // With both players uniform everywhere, the first mover's expected
        // value in standard Kuhn Poker works out to exactly +1/8.
        let equilibrium = Equilibrium::from_store(&InfoSetStore::new());
        let game = KuhnPoker::new();
        let ev = equilibrium.expected_value(&game, 0);
        assert!((ev - 0.125).abs() < 1e-12, "uniform EV {}", ev);
        // Zero-sum: the other seat sees the negation.
        assert!((equilibrium.expected_value(&game, 1) + 0.125).abs() < 1e-12);
    }

    #[test]
    fn serializes_round_trip() {
        let mut store = InfoSetStore::new();
        store.update_strategy_sum("Q:b", &[0.7, 0.3], 1.0);
        let equilibrium = Equilibrium::from_store(&store);

        let json = serde_json::to_string(&equilibrium).unwrap();
        let back: Equilibrium = serde_json::from_str(&json).unwrap();
        assert_eq!(back.action_distribution("Q:b", 2), equilibrium.action_distribution("Q:b", 2));
    }
}
