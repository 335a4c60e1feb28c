//! Counterfactual Regret Minimization core.
//!
//! Vanilla CFR over an exhaustively enumerated game tree:
//!
//! 1. Each iteration traverses the full tree once per player, for every
//!    possible deal.
//! 2. At each information set the current strategy comes from regret
//!    matching — proportional to positive accumulated regret.
//! 3. Counterfactual regrets, weighted by the opponent's reach
//!    probability, accumulate in the [`InfoSetStore`].
//! 4. The reach-weighted average of the current strategies converges to a
//!    Nash equilibrium, exposed as an [`Equilibrium`] snapshot.
//!
//! Average regret shrinks as O(1/√T), which at Kuhn Poker's 12
//! information sets means a few thousand iterations land within a chip
//! hundredth of the known game value.
//!
//! # References
//!
//! - Zinkevich, M., et al. "Regret Minimization in Games with Incomplete
//!   Information" (2007)

pub mod config;
pub mod equilibrium;
pub mod game;
pub mod storage;
pub mod trainer;

// Re-export main types for convenient access
pub use config::{GainPoint, TrainerConfig, TrainingStats};
pub use equilibrium::Equilibrium;
pub use game::{Action, Game, GameState, InfoState};
pub use storage::{InfoSet, InfoSetStore, StoreExport};
pub use trainer::CfrTrainer;
