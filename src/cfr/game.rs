//! Game trait definition for the CFR trainer.
//!
//! Any two-player zero-sum game that implements the `Game` trait can be
//! trained with CFR. The trait keeps the algorithm independent of the
//! concrete rules; the crate ships one implementation, Kuhn Poker.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for actions that can be taken in a game.
///
/// Actions must be copyable, comparable, and hashable for storage in maps.
pub trait Action: Copy + Eq + Hash + Debug + Send + Sync {
    /// Short label used in history strings and strategy tables (e.g. "p", "b").
    fn label(&self) -> &'static str;
}

/// Trait for information states (what a player knows at a decision point).
///
/// Two game states that look identical to the acting player (same private
/// card, same public history) must produce the same information state.
pub trait InfoState: Clone + Eq + Hash + Debug + Send + Sync {
    /// Unique string key for this information state, used for storing
    /// regrets and strategy sums.
    fn key(&self) -> String;
}

/// Marker trait for complete game states, including private information.
pub trait GameState: Clone + Debug + Send + Sync {}

/// Interface between the CFR trainer and a concrete game.
///
/// The trainer assumes a single chance event (the deal) at the root,
/// exposed through [`Game::chance_outcomes`] so iterations can enumerate
/// every deal exactly once with its probability. Games small enough to
/// solve with vanilla CFR are small enough to enumerate.
pub trait Game: Clone + Send + Sync {
    /// The type representing a complete game state.
    type State: GameState;

    /// The type representing an action a player can take.
    type Action: Action;

    /// The type representing what a player knows at a decision point.
    type InfoState: InfoState;

    /// All possible root deals with their probabilities.
    ///
    /// The probabilities must sum to 1. Each returned state is ready for
    /// the first player decision (no further chance nodes).
    fn chance_outcomes(&self) -> Vec<(Self::State, f64)>;

    /// Whether the given state is terminal (hand over, payoff defined).
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Payoff for `player` at a terminal state.
    ///
    /// Positive means `player` gains chips. For two-player zero-sum games
    /// `payoff(s, 0) == -payoff(s, 1)`.
    fn payoff(&self, state: &Self::State, player: usize) -> f64;

    /// Index of the player to act, or `None` at a terminal state.
    fn current_player(&self, state: &Self::State) -> Option<usize>;

    /// Total number of players (2 for Kuhn Poker).
    fn num_players(&self) -> usize;

    /// Legal actions for the player to act. Empty at terminal states.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply a legal action, producing the successor state.
    ///
    /// The input state is not modified. Callers inside the trainer only
    /// pass actions obtained from [`Game::legal_actions`]; the play-time
    /// boundary validates untrusted actions before reaching this.
    fn next_state(&self, state: &Self::State, action: Self::Action) -> Self::State;

    /// Information state for the player currently to act.
    fn info_state(&self, state: &Self::State) -> Self::InfoState;
}
