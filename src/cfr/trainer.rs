//! Vanilla CFR trainer.
//!
//! One iteration runs a full game-tree pass per player (the "updating
//! player"), enumerating every root deal with its chance probability.
//! Enumeration gives zero-variance regret estimates, so convergence is
//! deterministic — at Kuhn Poker's size there is no reason to sample.
//!
//! The traversal follows the standard recursion: at each decision node the
//! acting player's current strategy comes from regret matching on the
//! accumulated regrets; action subtrees are evaluated with updated reach
//! probabilities; and when the acting player is the updating player, each
//! action's counterfactual regret (action utility minus node utility,
//! scaled by the opponent's reach and the chance probability) is added to
//! the store along with the reach-weighted current strategy.

use std::time::Instant;

use crate::cfr::config::{TrainerConfig, TrainingStats};
use crate::cfr::game::{Game, InfoState};
use crate::cfr::storage::{InfoSetStore, StoreExport};

/// CFR trainer generic over the game being solved.
///
/// The trainer owns the [`InfoSetStore`] for the duration of training.
/// Repeated [`train`](CfrTrainer::train) calls accumulate over the existing
/// store; call [`reset`](CfrTrainer::reset) to start fresh.
pub struct CfrTrainer<G: Game> {
    game: G,
    config: TrainerConfig,
    store: InfoSetStore,
    iteration: u64,
    /// Cumulative root value for player 0 across iterations (gain trace).
    total_gain: f64,
    stats: TrainingStats,
}

impl<G: Game> CfrTrainer<G> {
    /// Create a trainer for `game` with an empty store.
    pub fn new(game: G, config: TrainerConfig) -> Self {
        Self {
            game,
            config,
            store: InfoSetStore::new(),
            iteration: 0,
            total_gain: 0.0,
            stats: TrainingStats::new(),
        }
    }

    /// Run one iteration: a full-tree pass for each player over every deal.
    pub fn run_iteration(&mut self) {
        self.iteration += 1;

        let num_players = self.game.num_players();
        for updating_player in 0..num_players {
            let mut pass_value = 0.0;
            for (root, chance_prob) in self.game.chance_outcomes() {
                let reach = vec![1.0; num_players];
                let value = self.cfr(&root, &reach, chance_prob, updating_player);
                pass_value += chance_prob * value;
            }
            if updating_player == 0 {
                self.total_gain += pass_value;
            }
        }
    }

    /// Train for `iterations` more iterations.
    ///
    /// Zero iterations is a no-op and leaves the store untouched. Training
    /// is additive: `train(n)` followed by `train(m)` accumulates the same
    /// store as a single `train(n + m)`.
    pub fn train(&mut self, iterations: u64) -> &TrainingStats {
        let start = Instant::now();
        let trace_interval = if self.config.gain_trace_points > 0 {
            (iterations / self.config.gain_trace_points as u64).max(1)
        } else {
            0
        };

        for _ in 0..iterations {
            self.run_iteration();

            if trace_interval > 0 && self.iteration % trace_interval == 0 {
                let avg_gain = self.total_gain.abs() / self.iteration as f64;
                self.stats.record_gain(self.iteration, avg_gain);
            }
        }

        self.stats.iterations = self.iteration;
        self.stats.info_sets = self.store.num_info_sets();
        self.stats.elapsed_seconds += start.elapsed().as_secs_f64();
        self.stats.update_rate();

        &self.stats
    }

    /// Train with a progress callback invoked every `callback_interval`
    /// iterations (used by the binaries to drive a progress bar).
    pub fn train_with_callback<F>(
        &mut self,
        iterations: u64,
        callback_interval: u64,
        mut callback: F,
    ) -> &TrainingStats
    where
        F: FnMut(u64),
    {
        let interval = callback_interval.max(1);
        let mut remaining = iterations;
        while remaining > 0 {
            let batch = remaining.min(interval);
            self.train(batch);
            remaining -= batch;
            callback(self.iteration);
        }
        // Covers the iterations == 0 case: stats stay current either way.
        self.stats.info_sets = self.store.num_info_sets();
        &self.stats
    }

    /// Recursive CFR traversal; returns the node utility for
    /// `updating_player`.
    ///
    /// `reach[p]` is the probability player `p`'s strategy assigns to the
    /// actions leading here; `chance_prob` is the probability of the deal.
    fn cfr(
        &mut self,
        state: &G::State,
        reach: &[f64],
        chance_prob: f64,
        updating_player: usize,
    ) -> f64 {
        if self.game.is_terminal(state) {
            return self.game.payoff(state, updating_player);
        }

        let player = match self.game.current_player(state) {
            Some(p) => p,
            None => return self.game.payoff(state, updating_player),
        };

        let actions = self.game.legal_actions(state);
        let key = self.game.info_state(state).key();
        let strategy = self.store.current_strategy(&key, actions.len());

        let mut action_utils = vec![0.0; actions.len()];
        for (i, &action) in actions.iter().enumerate() {
            let next = self.game.next_state(state, action);
            let mut next_reach = reach.to_vec();
            next_reach[player] *= strategy[i];
            action_utils[i] = self.cfr(&next, &next_reach, chance_prob, updating_player);
        }

        let node_value: f64 = strategy
            .iter()
            .zip(action_utils.iter())
            .map(|(&s, &v)| s * v)
            .sum();

        if player == updating_player {
            // Counterfactual weight: everyone else's reach, chance included.
            let counterfactual: f64 = chance_prob
                * reach
                    .iter()
                    .enumerate()
                    .filter(|&(p, _)| p != player)
                    .map(|(_, &r)| r)
                    .product::<f64>();

            let deltas: Vec<f64> = action_utils
                .iter()
                .map(|&v| counterfactual * (v - node_value))
                .collect();
            self.store.update_regrets(&key, &deltas);
            self.store.update_strategy_sum(&key, &strategy, reach[player]);
        }

        node_value
    }

    /// Forget all accumulated regrets, strategies, and counters.
    pub fn reset(&mut self) {
        self.store.reset();
        self.iteration = 0;
        self.total_gain = 0.0;
        self.stats = TrainingStats::new();
    }

    /// Regret-matched current strategy at `key`.
    pub fn current_strategy(&self, key: &str, num_actions: usize) -> Vec<f64> {
        self.store.current_strategy(key, num_actions)
    }

    /// Time-averaged strategy at `key` (converges to equilibrium).
    pub fn average_strategy(&self, key: &str, num_actions: usize) -> Vec<f64> {
        self.store.average_strategy(key, num_actions)
    }

    /// Completed iteration count.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Number of information sets discovered.
    pub fn num_info_sets(&self) -> usize {
        self.store.num_info_sets()
    }

    /// Training statistics so far.
    pub fn stats(&self) -> &TrainingStats {
        &self.stats
    }

    /// The game being trained.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &InfoSetStore {
        &self.store
    }

    /// Export the store for persistence.
    pub fn export_store(&self) -> StoreExport {
        self.store.export()
    }

    /// Replace the store with a previously exported snapshot.
    ///
    /// The iteration counter is left alone; callers resuming a checkpoint
    /// normally follow this with further `train` calls.
    pub fn import_store(&mut self, data: StoreExport) {
        self.store.import(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfr::equilibrium::Equilibrium;
    use crate::games::kuhn::KuhnPoker;

    fn trained(iterations: u64) -> CfrTrainer<KuhnPoker> {
        let mut trainer = CfrTrainer::new(KuhnPoker::new(), TrainerConfig::default());
        trainer.train(iterations);
        trainer
    }

    #[test]
    fn zero_iterations_is_a_noop() {
        let mut trainer = CfrTrainer::new(KuhnPoker::new(), TrainerConfig::default());
        trainer.train(0);
        assert_eq!(trainer.iteration(), 0);
        assert_eq!(trainer.num_info_sets(), 0);
    }

    #[test]
    fn discovers_all_twelve_info_sets() {
        // 3 cards x 4 decision histories ("", "p", "b", "pb").
        let trainer = trained(10);
        assert_eq!(trainer.num_info_sets(), 12);
    }

    #[test]
    fn strategies_are_distributions_everywhere() {
        let trainer = trained(100);
        for (key, entry) in trainer.store().iter() {
            let strategy = entry.current_strategy();
            let sum: f64 = strategy.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{} sums to {}", key, sum);
            assert!(strategy.iter().all(|&p| p >= 0.0), "{} has negative prob", key);

            let avg = entry.average_strategy();
            let avg_sum: f64 = avg.iter().sum();
            assert!((avg_sum - 1.0).abs() < 1e-9, "{} avg sums to {}", key, avg_sum);
        }
    }

    #[test]
    fn training_is_additive() {
        let mut split = CfrTrainer::new(KuhnPoker::new(), TrainerConfig::default());
        split.train(400);
        split.train(600);

        let joint = trained(1000);

        // Enumerated vanilla CFR is deterministic, so the split and joint
        // runs must agree exactly, not just statistically.
        assert_eq!(split.iteration(), joint.iteration());
        for (key, entry) in joint.store().iter() {
            let a = entry.average_strategy();
            let b = split.average_strategy(key, a.len());
            for (x, y) in a.iter().zip(b.iter()) {
                assert!((x - y).abs() < 1e-12, "divergence at {}", key);
            }
        }
    }

    #[test]
    fn reset_starts_fresh() {
        let mut trainer = trained(50);
        trainer.reset();
        assert_eq!(trainer.iteration(), 0);
        assert_eq!(trainer.num_info_sets(), 0);
    }

    #[test]
    fn converges_to_kuhn_equilibrium() {
        let trainer = trained(10_000);

        // P1 with Jack opens with a bluff around 1/3 of the time.
        let jack = trainer.average_strategy("J:", 2);
        println!("Jack root: Pass={:.3} Bet={:.3}", jack[0], jack[1]);
        assert!(
            jack[1] > 0.15 && jack[1] < 0.5,
            "Jack bet probability {} should be near 1/3",
            jack[1]
        );

        // P1 with Queen almost never opens with a bet.
        let queen = trainer.average_strategy("Q:", 2);
        assert!(queen[0] > 0.9, "Queen pass probability {} should be near 1", queen[0]);

        // P1 with King bets more than Jack.
        let king = trainer.average_strategy("K:", 2);
        assert!(king[1] > 0.5, "King bet probability {} should exceed 0.5", king[1]);
        assert!(king[1] > jack[1], "King should bet more often than Jack");

        // P2 responses to a bet: Jack folds, King calls, Queen mixes ~1/3.
        let jack_vs_bet = trainer.average_strategy("J:b", 2);
        assert!(jack_vs_bet[0] > 0.9, "P2 Jack should fold to a bet");
        let king_vs_bet = trainer.average_strategy("K:b", 2);
        assert!(king_vs_bet[1] > 0.9, "P2 King should call a bet");
        let queen_vs_bet = trainer.average_strategy("Q:b", 2);
        assert!(
            queen_vs_bet[1] > 0.2 && queen_vs_bet[1] < 0.5,
            "P2 Queen call probability {} should be near 1/3",
            queen_vs_bet[1]
        );
    }

    #[test]
    fn first_mover_value_approaches_minus_one_eighteenth() {
        let trainer = trained(10_000);
        let equilibrium = Equilibrium::from_store(trainer.store());
        let ev = equilibrium.expected_value(trainer.game(), 0);
        println!("first-mover EV = {:.5} (target {:.5})", ev, -1.0 / 18.0);
        assert!(
            (ev - (-1.0 / 18.0)).abs() < 0.01,
            "EV {} should be within 0.01 of -1/18",
            ev
        );
    }

    #[test]
    fn king_root_average_keeps_mass_on_both_actions() {
        let trainer = trained(10_000);
        let king = trainer.average_strategy("K:", 2);
        assert!(king[0] > 0.0 && king[1] > 0.0, "average must mix: {:?}", king);
        assert!(king[1] > king[0], "Bet should dominate with the King");
    }

    #[test]
    fn gain_trace_settles_near_game_value() {
        let mut trainer = CfrTrainer::new(
            KuhnPoker::new(),
            TrainerConfig::default().with_gain_trace_points(20),
        );
        trainer.train(2_000);

        let trace = &trainer.stats().gain_trace;
        assert!(!trace.is_empty());
        let last = trace.last().map(|p| p.avg_gain).unwrap_or(f64::NAN);
        // |EV| of the first mover is 1/18; the running average should be in
        // that neighborhood once early noise washes out.
        assert!(last > 0.0 && last < 0.2, "trailing avg gain {}", last);
    }

    #[test]
    fn callback_fires_per_batch() {
        let mut trainer = CfrTrainer::new(KuhnPoker::new(), TrainerConfig::default());
        let mut calls = 0;
        trainer.train_with_callback(100, 25, |_| calls += 1);
        assert_eq!(calls, 4);
        assert_eq!(trainer.iteration(), 100);
    }

    #[test]
    fn export_import_resumes_training() {
        let mut first = trained(500);
        let snapshot = first.export_store();

        let mut resumed = CfrTrainer::new(KuhnPoker::new(), TrainerConfig::default());
        resumed.import_store(snapshot);
        for key in ["J:", "Q:", "K:b"] {
            assert_eq!(
                resumed.average_strategy(key, 2),
                first.average_strategy(key, 2)
            );
        }

        first.train(100);
        assert_eq!(first.iteration(), 600);
    }
}
