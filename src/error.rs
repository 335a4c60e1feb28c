//! Error types for the solver and play layer.

use thiserror::Error;

/// Errors surfaced by the solver core and the match runner.
#[derive(Error, Debug)]
pub enum SolverError {
    /// An action was applied to a state where it is not legal.
    #[error("Illegal action {action} at history \"{history}\"")]
    InvalidAction {
        /// The rejected action, as its short label ("p"/"b").
        action: String,
        /// Public action history at the point of the attempt.
        history: String,
    },

    /// A scripted opponent returned an action outside `legal_actions`.
    #[error("Opponent contract violation: returned {action} at history \"{history}\"")]
    OpponentContract {
        /// The illegal action the opponent produced.
        action: String,
        /// Public action history at the point of the violation.
        history: String,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Strategy export/import failed to (de)serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result alias used throughout the crate.
pub type SolverResult<T> = Result<T, SolverError>;
