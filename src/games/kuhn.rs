//! Kuhn Poker rules.
//!
//! Kuhn Poker is the smallest non-trivial poker game: three cards, two
//! players, one betting round. It is small enough to solve exactly, which
//! makes it the standard testbed for CFR — the Nash equilibrium and game
//! value are known in closed form.
//!
//! ## Game Rules
//!
//! - 3 cards: Jack < Queen < King
//! - 2 players, each antes 1 chip
//! - Each player receives 1 card; the third stays undealt
//! - Player 1 acts first: Pass or Bet (1 chip)
//! - A bet may be called (Bet) or folded to (Pass)
//! - Higher card wins at showdown
//!
//! ## Game Tree
//!
//! ```text
//! P1 (first to act)
//! ├── Pass
//! │   └── P2
//! │       ├── Pass → Showdown (pot = 2)
//! │       └── Bet
//! │           └── P1
//! │               ├── Pass → P2 wins (pot = 3)
//! │               └── Bet → Showdown (pot = 4)
//! └── Bet
//!     └── P2
//!         ├── Pass → P1 wins (pot = 3)
//!         └── Bet → Showdown (pot = 4)
//! ```
//!
//! The terminal histories are exactly `pp`, `pbp`, `pbb`, `bp`, `bb`.
//!
//! ## Known Nash Equilibrium
//!
//! - P1 with Jack: bet (bluff) with probability α ∈ [0, 1/3]
//! - P1 with Queen: always pass, call a bet with probability α + 1/3
//! - P1 with King: bet with probability 3α
//! - P2 with Jack facing a bet: always fold
//! - P2 with Queen facing a bet: call with probability 1/3
//! - P2 with King: always call, bet when checked to
//!
//! Expected value for the first mover at equilibrium: −1/18 ≈ −0.0556.

use std::fmt;

use rand::Rng;

use crate::cfr::game::{Action, Game, GameState, InfoState};
use crate::error::{SolverError, SolverResult};

/// One of the three cards, ordered Jack < Queen < King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Card {
    /// Lowest card.
    Jack,
    /// Middle card.
    Queen,
    /// Highest card.
    King,
}

impl Card {
    /// The full three-card deck in rank order.
    pub const DECK: [Card; 3] = [Card::Jack, Card::Queen, Card::King];

    /// One-letter display form.
    pub fn glyph(self) -> &'static str {
        match self {
            Card::Jack => "J",
            Card::Queen => "Q",
            Card::King => "K",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Actions in Kuhn Poker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KuhnAction {
    /// Check when no bet is pending, fold when facing a bet.
    Pass,
    /// Bet when no bet is pending, call when facing one.
    Bet,
}

impl Action for KuhnAction {
    fn label(&self) -> &'static str {
        match self {
            KuhnAction::Pass => "p",
            KuhnAction::Bet => "b",
        }
    }
}

impl fmt::Display for KuhnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KuhnAction::Pass => write!(f, "Pass"),
            KuhnAction::Bet => write!(f, "Bet"),
        }
    }
}

/// What a player knows at a decision point: their own card and the public
/// action history. Deliberately excludes the opponent's card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KuhnInfoState {
    /// The acting player's private card.
    pub card: Card,
    /// Public action history so far ("p"/"b" per action).
    pub history: String,
}

impl InfoState for KuhnInfoState {
    fn key(&self) -> String {
        format!("{}:{}", self.card.glyph(), self.history)
    }
}

impl fmt::Display for KuhnInfoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.card.glyph(), self.history)
    }
}

/// Complete state of one Kuhn Poker hand.
///
/// States are immutable values: applying an action produces a new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KuhnState {
    /// Cards dealt: `cards[0]` to player 1 (index 0), `cards[1]` to player 2.
    pub cards: [Card; 2],
    /// Action history, one char per action.
    pub history: String,
    /// Chips each player has put into the pot so far (antes included).
    pub pot: [u32; 2],
}

impl GameState for KuhnState {}

impl fmt::Display for KuhnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P1:{} P2:{} history:\"{}\" pot:{:?}",
            self.cards[0], self.cards[1], self.history, self.pot
        )
    }
}

/// Kuhn Poker with configurable stakes.
#[derive(Debug, Clone)]
pub struct KuhnPoker {
    /// Chips each player antes before the deal.
    pub ante: u32,
    /// Chips added by a bet (and matched by a call).
    pub bet_size: u32,
}

impl Default for KuhnPoker {
    fn default() -> Self {
        Self { ante: 1, bet_size: 1 }
    }
}

impl KuhnPoker {
    /// Standard Kuhn Poker: ante 1, bet 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Kuhn Poker with custom stakes. Both values must be positive.
    pub fn with_stakes(ante: u32, bet_size: u32) -> SolverResult<Self> {
        if ante == 0 || bet_size == 0 {
            return Err(SolverError::InvalidConfig(format!(
                "ante and bet size must be positive (got ante={}, bet={})",
                ante, bet_size
            )));
        }
        Ok(Self { ante, bet_size })
    }

    /// Deal a fresh hand: two distinct cards drawn uniformly, antes posted,
    /// player 1 to act.
    pub fn deal<R: Rng>(&self, rng: &mut R) -> KuhnState {
        let mut deck = Card::DECK;
        // Fisher-Yates; only the first two positions matter.
        for i in (1..deck.len()).rev() {
            let j = rng.gen_range(0..=i);
            deck.swap(i, j);
        }
        self.start_state([deck[0], deck[1]])
    }

    /// Root state for a known pair of hole cards (antes posted, no actions).
    pub fn start_state(&self, cards: [Card; 2]) -> KuhnState {
        KuhnState {
            cards,
            history: String::new(),
            pot: [self.ante, self.ante],
        }
    }

    /// Validating state transition for untrusted callers.
    ///
    /// Rejects actions at terminal states and actions outside
    /// [`Game::legal_actions`], per the invalid-input policy; the action is
    /// never coerced to a legal one.
    pub fn apply(&self, state: &KuhnState, action: KuhnAction) -> SolverResult<KuhnState> {
        if !self.legal_actions(state).contains(&action) {
            return Err(SolverError::InvalidAction {
                action: action.label().to_string(),
                history: state.history.clone(),
            });
        }
        Ok(self.next_state(state, action))
    }

    fn terminal_history(history: &str) -> bool {
        matches!(history, "pp" | "pbp" | "pbb" | "bp" | "bb")
    }
}

impl Game for KuhnPoker {
    type State = KuhnState;
    type Action = KuhnAction;
    type InfoState = KuhnInfoState;

    fn chance_outcomes(&self) -> Vec<(Self::State, f64)> {
        // 6 ordered pairs of distinct cards, each equally likely.
        let mut outcomes = Vec::with_capacity(6);
        for &c0 in &Card::DECK {
            for &c1 in &Card::DECK {
                if c0 != c1 {
                    outcomes.push((self.start_state([c0, c1]), 1.0 / 6.0));
                }
            }
        }
        outcomes
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        Self::terminal_history(&state.history)
    }

    fn payoff(&self, state: &Self::State, player: usize) -> f64 {
        debug_assert!(self.is_terminal(state), "payoff on non-terminal state");

        let ante = self.ante as f64;
        let showdown = (self.ante + self.bet_size) as f64;
        let p0_wins_showdown = state.cards[0] > state.cards[1];

        // Net chips for player 0; player 1's payoff is the negation.
        let p0 = match state.history.as_str() {
            // Both checked: higher card takes the antes.
            "pp" => {
                if p0_wins_showdown {
                    ante
                } else {
                    -ante
                }
            }
            // P1 bet, P2 folded: P1 takes P2's ante without showdown.
            "bp" => ante,
            // P1 checked, P2 bet, P1 folded.
            "pbp" => -ante,
            // Bet and call: higher card takes ante + bet.
            "bb" | "pbb" => {
                if p0_wins_showdown {
                    showdown
                } else {
                    -showdown
                }
            }
            _ => 0.0,
        };

        if player == 0 {
            p0
        } else {
            -p0
        }
    }

    fn current_player(&self, state: &Self::State) -> Option<usize> {
        match state.history.as_str() {
            "" => Some(0),
            "p" | "b" => Some(1),
            "pb" => Some(0),
            _ => None,
        }
    }

    fn num_players(&self) -> usize {
        2
    }

    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action> {
        if self.is_terminal(state) {
            return vec![];
        }
        // Both actions are available at every decision point.
        vec![KuhnAction::Pass, KuhnAction::Bet]
    }

    fn next_state(&self, state: &Self::State, action: Self::Action) -> Self::State {
        let mut next = state.clone();
        next.history.push_str(action.label());
        if action == KuhnAction::Bet {
            if let Some(player) = self.current_player(state) {
                next.pot[player] += self.bet_size;
            }
        }
        next
    }

    fn info_state(&self, state: &Self::State) -> Self::InfoState {
        let player = self.current_player(state).unwrap_or(0);
        KuhnInfoState {
            card: state.cards[player],
            history: state.history.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> KuhnPoker {
        KuhnPoker::new()
    }

    fn state(cards: [Card; 2], history: &str) -> KuhnState {
        let g = game();
        let mut s = g.start_state(cards);
        for ch in history.chars() {
            let action = if ch == 'b' { KuhnAction::Bet } else { KuhnAction::Pass };
            s = g.next_state(&s, action);
        }
        s
    }

    #[test]
    fn card_ordering() {
        assert!(Card::Jack < Card::Queen);
        assert!(Card::Queen < Card::King);
    }

    #[test]
    fn chance_outcomes_enumerate_all_deals() {
        let outcomes = game().chance_outcomes();
        assert_eq!(outcomes.len(), 6);

        let total: f64 = outcomes.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-12);

        for (s, _) in &outcomes {
            assert_ne!(s.cards[0], s.cards[1], "dealt cards must be distinct");
            assert!(s.history.is_empty());
            assert_eq!(s.pot, [1, 1]);
        }
    }

    #[test]
    fn terminal_histories() {
        let g = game();
        for h in ["pp", "pbp", "pbb", "bp", "bb"] {
            assert!(g.is_terminal(&state([Card::King, Card::Jack], h)), "{}", h);
        }
        for h in ["", "p", "b", "pb"] {
            assert!(!g.is_terminal(&state([Card::King, Card::Jack], h)), "{}", h);
        }
    }

    #[test]
    fn turn_order() {
        let g = game();
        let s = state([Card::Queen, Card::King], "");
        assert_eq!(g.current_player(&s), Some(0));
        assert_eq!(g.current_player(&state([Card::Queen, Card::King], "p")), Some(1));
        assert_eq!(g.current_player(&state([Card::Queen, Card::King], "b")), Some(1));
        assert_eq!(g.current_player(&state([Card::Queen, Card::King], "pb")), Some(0));
        assert_eq!(g.current_player(&state([Card::Queen, Card::King], "bp")), None);
    }

    #[test]
    fn payoffs_match_rules() {
        let g = game();

        // Showdown after two checks: one ante changes hands.
        assert_eq!(g.payoff(&state([Card::King, Card::Jack], "pp"), 0), 1.0);
        assert_eq!(g.payoff(&state([Card::Jack, Card::King], "pp"), 0), -1.0);

        // Fold to a bet: bettor wins without showdown, low card or not.
        assert_eq!(g.payoff(&state([Card::Jack, Card::King], "bp"), 0), 1.0);
        assert_eq!(g.payoff(&state([Card::King, Card::Jack], "pbp"), 0), -1.0);

        // Bet and call: two chips each way.
        assert_eq!(g.payoff(&state([Card::King, Card::Jack], "bb"), 0), 2.0);
        assert_eq!(g.payoff(&state([Card::Jack, Card::King], "pbb"), 0), -2.0);
    }

    #[test]
    fn payoffs_are_zero_sum() {
        let g = game();
        for (root, _) in g.chance_outcomes() {
            for h in ["pp", "pbp", "pbb", "bp", "bb"] {
                let s = state(root.cards, h);
                let sum = g.payoff(&s, 0) + g.payoff(&s, 1);
                assert!(sum.abs() < 1e-12, "non-zero-sum at {} {}", s, h);
            }
        }
    }

    #[test]
    fn bet_grows_pot_for_acting_player() {
        let g = game();
        let s = state([Card::Queen, Card::Jack], "");
        let after_bet = g.next_state(&s, KuhnAction::Bet);
        assert_eq!(after_bet.pot, [2, 1]);
        let after_call = g.next_state(&after_bet, KuhnAction::Bet);
        assert_eq!(after_call.pot, [2, 2]);
    }

    #[test]
    fn info_state_hides_opponent_card() {
        let g = game();
        let a = state([Card::King, Card::Jack], "p");
        let b = state([Card::Queen, Card::Jack], "p");
        // P2 holds the Jack in both; the info sets must collapse.
        assert_eq!(g.info_state(&a), g.info_state(&b));
        assert_eq!(g.info_state(&a).key(), "J:p");
    }

    #[test]
    fn apply_rejects_action_at_terminal_state() {
        let g = game();
        let s = state([Card::King, Card::Jack], "bp");
        let err = g.apply(&s, KuhnAction::Bet).unwrap_err();
        assert!(matches!(err, SolverError::InvalidAction { .. }));
    }

    #[test]
    fn apply_accepts_legal_action() {
        let g = game();
        let s = state([Card::King, Card::Jack], "");
        let next = g.apply(&s, KuhnAction::Bet).unwrap();
        assert_eq!(next.history, "b");
    }

    #[test]
    fn deal_produces_distinct_cards() {
        use rand::SeedableRng;
        let g = game();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let mut seen_orders = std::collections::HashSet::new();
        for _ in 0..200 {
            let s = g.deal(&mut rng);
            assert_ne!(s.cards[0], s.cards[1]);
            seen_orders.insert(s.cards);
        }
        // All 6 ordered deals should show up over 200 draws.
        assert_eq!(seen_orders.len(), 6);
    }

    #[test]
    fn with_stakes_rejects_zero() {
        assert!(KuhnPoker::with_stakes(0, 1).is_err());
        assert!(KuhnPoker::with_stakes(1, 0).is_err());
        assert!(KuhnPoker::with_stakes(2, 3).is_ok());
    }

    #[test]
    fn custom_stakes_scale_payoffs() {
        let g = KuhnPoker::with_stakes(2, 3).unwrap();
        let mut s = g.start_state([Card::King, Card::Jack]);
        for action in [KuhnAction::Bet, KuhnAction::Bet] {
            s = g.next_state(&s, action);
        }
        assert_eq!(g.payoff(&s, 0), 5.0); // ante 2 + bet 3
        assert_eq!(s.pot, [5, 5]);
    }
}
