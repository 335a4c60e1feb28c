//! Scripted opponents with fixed, simple action rules.
//!
//! These are the external strategy providers the adaptive player is
//! evaluated against. Each implements the opponent contract: given only
//! its own card and the public history, return one action.

use crate::games::kuhn::{Card, KuhnAction};

/// The scripted-opponent contract.
///
/// Implementations see only their own visible information — their card and
/// the action history — and must return a legal action for any
/// non-terminal state (in Kuhn Poker, both actions are always legal at a
/// decision point).
pub trait ScriptedOpponent: Send + Sync {
    /// Display name for reports.
    fn name(&self) -> &'static str;

    /// Pick an action holding `card` with public `history`.
    fn act(&self, card: Card, history: &str) -> KuhnAction;
}

/// Conservative opponent: bets only the King, and only once the other
/// side has shown weakness by checking.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveBot;

impl ScriptedOpponent for PassiveBot {
    fn name(&self) -> &'static str {
        "passive"
    }

    fn act(&self, card: Card, history: &str) -> KuhnAction {
        if card == Card::King && history.contains('p') {
            KuhnAction::Bet
        } else {
            KuhnAction::Pass
        }
    }
}

/// Frequent bettor: attacks any check, and bets Queen or better outright.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressiveBot;

impl ScriptedOpponent for AggressiveBot {
    fn name(&self) -> &'static str {
        "aggressive"
    }

    fn act(&self, card: Card, history: &str) -> KuhnAction {
        if history.contains('p') || card >= Card::Queen {
            KuhnAction::Bet
        } else {
            KuhnAction::Pass
        }
    }
}

/// Mixed opponent: always bets the King, bets the Queen only after a
/// check, and otherwise stays cautious.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedBot;

impl ScriptedOpponent for BalancedBot {
    fn name(&self) -> &'static str {
        "balanced"
    }

    fn act(&self, card: Card, history: &str) -> KuhnAction {
        if card == Card::King {
            KuhnAction::Bet
        } else if history.contains('p') {
            if card == Card::Queen {
                KuhnAction::Bet
            } else {
                KuhnAction::Pass
            }
        } else {
            KuhnAction::Pass
        }
    }
}
