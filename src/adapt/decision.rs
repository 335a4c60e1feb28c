//! Equilibrium play with an exploitative tilt.
//!
//! The decision maker samples from the trained equilibrium distribution by
//! default. Once the profiler is confident about the opponent's style, the
//! distribution is blended toward a simple exploit heuristic:
//!
//! - **vs Aggressive** — they bet too much, so get out of the way with
//!   weak holdings and pay off only with the King.
//! - **vs Passive** — they check and fold too much, so bet relentlessly;
//!   bluffs print against folds and value bets get paid nothing anyway.
//! - **vs Balanced** — no edge to chase; play the equilibrium.
//!
//! The blend factor is a convex weight: `(1 − λ)·equilibrium + λ·exploit`.
//! The opponent's true strategy cannot be recovered from a three-way
//! classification, so λ is an explicit tuning parameter rather than a
//! best-response computation.

use rand::Rng;

use crate::adapt::profiler::{Classification, OpponentProfiler};
use crate::adapt::AdaptConfig;
use crate::cfr::game::InfoState;
use crate::cfr::Equilibrium;
use crate::games::kuhn::{Card, KuhnAction, KuhnInfoState};

/// Actions in the order every distribution in this module uses.
const ACTIONS: [KuhnAction; 2] = [KuhnAction::Pass, KuhnAction::Bet];

/// Chooses actions from the equilibrium, biased by the opponent profile.
#[derive(Debug, Clone)]
pub struct AdaptiveDecisionMaker {
    config: AdaptConfig,
}

impl AdaptiveDecisionMaker {
    /// Create a decision maker with the given tuning.
    pub fn new(config: AdaptConfig) -> Self {
        Self { config }
    }

    /// The tuning in use.
    pub fn config(&self) -> &AdaptConfig {
        &self.config
    }

    /// The (possibly biased) action distribution for our `card` at
    /// `history`, ordered [Pass, Bet].
    ///
    /// With blend 0, or while the profiler's confidence is below the
    /// configured minimum, this is exactly the equilibrium distribution.
    pub fn action_distribution(
        &self,
        card: Card,
        history: &str,
        equilibrium: &Equilibrium,
        profiler: &OpponentProfiler,
    ) -> Vec<f64> {
        let key = KuhnInfoState {
            card,
            history: history.to_string(),
        }
        .key();
        let base = equilibrium.action_distribution(&key, ACTIONS.len());

        let (class, confidence) = profiler.classify();
        if confidence < self.config.min_confidence {
            return base;
        }

        let exploit = match class {
            Classification::Aggressive => Self::exploit_vs_aggressive(card),
            Classification::Passive => Self::exploit_vs_passive(),
            Classification::Balanced | Classification::Unknown => return base,
        };

        let lambda = self.config.blend;
        base.iter()
            .zip(exploit.iter())
            .map(|(&eq, &ex)| (1.0 - lambda) * eq + lambda * ex)
            .collect()
    }

    /// Sample an action for our `card` at `history`.
    pub fn choose_action<R: Rng>(
        &self,
        rng: &mut R,
        card: Card,
        history: &str,
        equilibrium: &Equilibrium,
        profiler: &OpponentProfiler,
    ) -> KuhnAction {
        let dist = self.action_distribution(card, history, equilibrium, profiler);

        let roll: f64 = rng.gen();
        let mut cumulative = 0.0;
        for (action, &prob) in ACTIONS.iter().zip(dist.iter()) {
            cumulative += prob;
            if roll < cumulative {
                return *action;
            }
        }
        // Floating point shortfall: take the last action.
        ACTIONS[ACTIONS.len() - 1]
    }

    /// Against an over-bettor: bet/call only the King, otherwise check and
    /// let go. [Pass, Bet] order.
    fn exploit_vs_aggressive(card: Card) -> [f64; 2] {
        if card == Card::King {
            [0.0, 1.0]
        } else {
            [1.0, 0.0]
        }
    }

    /// Against an under-bettor: bet every holding.
    fn exploit_vs_passive() -> [f64; 2] {
        [0.0, 1.0]
    }
}
