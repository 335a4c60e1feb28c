//! Game implementations for the CFR trainer.
//!
//! One game lives here today: Kuhn Poker, the three-card game this crate
//! solves and plays. The module boundary mirrors the trainer's `Game`
//! trait — a new game means a new module implementing that trait, no
//! trainer changes.

pub mod kuhn;
