//! Live play against scripted opponents.
//!
//! The [`MatchRunner`] drives repeated hands: the adaptive player sits in
//! seat 0 (first to act, same seat the trainer reports EV for), a
//! [`ScriptedOpponent`] sits in seat 1. Every opponent action is fed to
//! the profiler, so the adaptive player's read sharpens as the match
//! progresses.

pub mod bots;

pub use bots::{AggressiveBot, BalancedBot, PassiveBot, ScriptedOpponent};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::adapt::profiler::{Classification, ObservedContext, OpponentProfiler};
use crate::adapt::{AdaptConfig, AdaptiveDecisionMaker};
use crate::cfr::game::Action;
use crate::cfr::{Equilibrium, Game};
use crate::error::{SolverError, SolverResult};
use crate::games::kuhn::KuhnPoker;

/// Outcome summary of one opponent matchup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Opponent display name.
    pub opponent: String,
    /// Hands played.
    pub hands: u64,
    /// Hands the adaptive player won (positive payoff).
    pub wins: u64,
    /// Hands the adaptive player lost.
    pub losses: u64,
    /// Net chips won by the adaptive player.
    pub net_chips: f64,
    /// Average chips won per hand.
    pub avg_gain: f64,
    /// The profiler's final read on the opponent.
    pub classification: Classification,
    /// Confidence in that read.
    pub confidence: f64,
}

impl MatchReport {
    /// Win rate in [0, 1].
    pub fn win_rate(&self) -> f64 {
        if self.hands == 0 {
            0.0
        } else {
            self.wins as f64 / self.hands as f64
        }
    }
}

/// Drives hands between the adaptive player and a scripted opponent.
pub struct MatchRunner {
    game: KuhnPoker,
    equilibrium: Equilibrium,
    decider: AdaptiveDecisionMaker,
    adapt_config: AdaptConfig,
}

impl MatchRunner {
    /// Create a runner for `game` playing the given trained `equilibrium`.
    pub fn new(game: KuhnPoker, equilibrium: Equilibrium, adapt_config: AdaptConfig) -> Self {
        Self {
            game,
            equilibrium,
            decider: AdaptiveDecisionMaker::new(adapt_config.clone()),
            adapt_config,
        }
    }

    /// Play a single hand; returns the adaptive player's payoff.
    ///
    /// The opponent's actions are validated against `legal_actions` before
    /// being applied — an illegal action is a contract violation surfaced
    /// to the caller, never substituted.
    pub fn play_hand<R: Rng>(
        &self,
        rng: &mut R,
        opponent: &dyn ScriptedOpponent,
        profiler: &mut OpponentProfiler,
    ) -> SolverResult<f64> {
        let mut state = self.game.deal(rng);

        while !self.game.is_terminal(&state) {
            let player = match self.game.current_player(&state) {
                Some(p) => p,
                None => break,
            };

            if player == 0 {
                let action = self.decider.choose_action(
                    rng,
                    state.cards[0],
                    &state.history,
                    &self.equilibrium,
                    profiler,
                );
                state = self.game.apply(&state, action)?;
            } else {
                let action = opponent.act(state.cards[1], &state.history);
                if !self.game.legal_actions(&state).contains(&action) {
                    return Err(SolverError::OpponentContract {
                        action: action.label().to_string(),
                        history: state.history.clone(),
                    });
                }
                let context = ObservedContext::from_history(&state.history);
                state = self.game.next_state(&state, action);
                profiler.observe(action, context);
            }
        }

        Ok(self.game.payoff(&state, 0))
    }

    /// Play `hands` hands against `opponent` with a fresh profiler.
    ///
    /// Each matchup starts from a clean read — classification does not
    /// carry over between opponents.
    pub fn run_match(
        &self,
        opponent: &dyn ScriptedOpponent,
        hands: u64,
        seed: u64,
    ) -> SolverResult<MatchReport> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut profiler = OpponentProfiler::new(self.adapt_config.clone());

        let mut wins = 0u64;
        let mut losses = 0u64;
        let mut net_chips = 0.0;

        for _ in 0..hands {
            let payoff = self.play_hand(&mut rng, opponent, &mut profiler)?;
            net_chips += payoff;
            if payoff > 0.0 {
                wins += 1;
            } else if payoff < 0.0 {
                losses += 1;
            }
        }

        let (classification, confidence) = profiler.classify();
        Ok(MatchReport {
            opponent: opponent.name().to_string(),
            hands,
            wins,
            losses,
            net_chips,
            avg_gain: if hands > 0 { net_chips / hands as f64 } else { 0.0 },
            classification,
            confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfr::{CfrTrainer, TrainerConfig};

    fn runner() -> MatchRunner {
        let mut trainer = CfrTrainer::new(KuhnPoker::new(), TrainerConfig::default());
        trainer.train(2_000);
        let equilibrium = Equilibrium::from_store(trainer.store());
        MatchRunner::new(KuhnPoker::new(), equilibrium, AdaptConfig::default())
    }

    #[test]
    fn hands_reach_terminal_and_tally() {
        let report = runner().run_match(&BalancedBot, 200, 3).unwrap();
        assert_eq!(report.hands, 200);
        // Kuhn Poker has no ties: every hand is won or lost.
        assert_eq!(report.wins + report.losses, 200);
        assert!((report.avg_gain * 200.0 - report.net_chips).abs() < 1e-9);
    }

    #[test]
    fn profiler_reads_the_aggressive_bot() {
        let report = runner().run_match(&AggressiveBot, 300, 5).unwrap();
        assert_eq!(report.classification, Classification::Aggressive);
        assert!(report.confidence > 0.5);
    }

    #[test]
    fn profiler_reads_the_passive_bot() {
        let report = runner().run_match(&PassiveBot, 300, 7).unwrap();
        assert_eq!(report.classification, Classification::Passive);
    }

    #[test]
    fn passive_bot_is_profitably_exploited() {
        // The passive bot folds to nearly every bet; once the profiler
        // locks on, the adaptive player should print chips.
        let report = runner().run_match(&PassiveBot, 1_000, 11).unwrap();
        assert!(
            report.avg_gain > 0.2,
            "expected clear profit vs passive, got {:.3}/hand",
            report.avg_gain
        );
    }

    #[test]
    fn fresh_profiler_per_match() {
        let r = runner();
        let first = r.run_match(&AggressiveBot, 200, 13).unwrap();
        assert_eq!(first.classification, Classification::Aggressive);
        // A following passive matchup must not inherit the aggressive read.
        let second = r.run_match(&PassiveBot, 200, 13).unwrap();
        assert_eq!(second.classification, Classification::Passive);
    }

    #[test]
    fn zero_hand_match_is_empty_report() {
        let report = runner().run_match(&BalancedBot, 0, 1).unwrap();
        assert_eq!(report.hands, 0);
        assert_eq!(report.classification, Classification::Unknown);
        assert_eq!(report.win_rate(), 0.0);
    }
}
