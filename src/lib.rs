//! # Kuhn Adaptive Solver
//!
//! A Counterfactual Regret Minimization (CFR) solver for Kuhn Poker that
//! adapts its equilibrium strategy at play time to the opponent it is
//! actually facing.
//!
//! ## What it does
//!
//! - **Trains** a near-Nash strategy with vanilla CFR over the fully
//!   enumerated game tree (all 6 deals every iteration — zero-variance
//!   convergence at this game size).
//! - **Profiles** a live opponent from their observed actions, classifying
//!   them as aggressive, passive, or balanced with a growing confidence.
//! - **Adapts** the equilibrium distribution toward a simple exploit
//!   heuristic once the read is confident, controlled by a blend factor.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kuhn_adaptive_solver::adapt::AdaptConfig;
//! use kuhn_adaptive_solver::cfr::{CfrTrainer, Equilibrium, TrainerConfig};
//! use kuhn_adaptive_solver::games::kuhn::KuhnPoker;
//! use kuhn_adaptive_solver::play::{AggressiveBot, MatchRunner};
//!
//! // 1. Train toward the equilibrium (first-mover EV -> -1/18).
//! let mut trainer = CfrTrainer::new(KuhnPoker::new(), TrainerConfig::default());
//! trainer.train(100_000);
//! let equilibrium = Equilibrium::from_store(trainer.store());
//!
//! // 2. Play adaptively against a scripted opponent.
//! let runner = MatchRunner::new(KuhnPoker::new(), equilibrium, AdaptConfig::default());
//! let report = runner.run_match(&AggressiveBot, 1_000, 42)?;
//! println!("net {:+.1} chips, read: {}", report.net_chips, report.classification);
//! # Ok::<(), kuhn_adaptive_solver::error::SolverError>(())
//! ```
//!
//! ## Modules
//!
//! - [`cfr`]: trainer, regret store, equilibrium snapshot
//! - [`games`]: Kuhn Poker rules
//! - [`adapt`]: opponent profiling and strategy biasing
//! - [`play`]: match runner and scripted opponents

#![warn(missing_docs)]

pub mod adapt;
pub mod cfr;
pub mod error;
pub mod games;
pub mod play;

// Re-export commonly used types at crate root for convenience
pub use adapt::{AdaptConfig, AdaptiveDecisionMaker, Classification, OpponentProfiler};
pub use cfr::{CfrTrainer, Equilibrium, InfoSetStore, TrainerConfig, TrainingStats};
pub use error::{SolverError, SolverResult};
