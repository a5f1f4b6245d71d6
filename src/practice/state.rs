//! Game state for a single practice hand.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::{format_cards, Board, Deck, HoleCards};
use super::config::TableConfig;
use super::hand::{evaluate, HandEvaluation};
use super::position::{Position, SeatMap};

/// Percentage points added to VPIP/PFR per qualifying preflop action.
pub const STAT_STEP: u32 = 10;

/// Betting phase of the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    /// Get the next street.
    pub fn next(&self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => Some(Street::Showdown),
            Street::Showdown => None,
        }
    }

    /// Number of board cards dealt when this street begins.
    pub fn cards_dealt(&self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
            Street::Preflop | Street::Showdown => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
            Street::Showdown => "showdown",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Cumulative statistics for the session. Survives new hands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub hands_played: u32,
    pub hands_won: u32,
    /// Net result in big blinds.
    pub total_profit: f64,
    /// Stand-in for VPIP: +10 per voluntary preflop call or raise, capped at 100.
    pub vpip: u32,
    /// Stand-in for PFR: +10 per preflop raise, capped at 100.
    pub pfr: u32,
}

impl SessionStats {
    pub fn bump_vpip(&mut self) {
        self.vpip = (self.vpip + STAT_STEP).min(100);
    }

    pub fn bump_pfr(&mut self) {
        self.pfr = (self.pfr + STAT_STEP).min(100);
    }

    /// Record a finished hand and its result for the hero.
    pub fn record_hand(&mut self, profit: f64, won: bool) {
        self.hands_played += 1;
        self.total_profit += profit;
        if won {
            self.hands_won += 1;
        }
    }
}

/// Bounds of the raise control. Targets outside are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaiseBounds {
    pub min: f64,
    pub max: f64,
}

impl RaiseBounds {
    /// Clamp a requested total bet into the bounds. When the hero cannot
    /// afford the minimum, the stack is the cap. An empty stack yields 0;
    /// the table turns that raise into a check.
    pub fn clamp(&self, to: f64) -> f64 {
        if self.max < self.min {
            return self.max;
        }
        to.clamp(self.min, self.max)
    }
}

/// State of the practice hand.
#[derive(Clone)]
pub struct GameState {
    pub phase: Street,
    /// Stacks for each position (in BB).
    pub stacks: SeatMap,
    /// Amount each position has put in on the current street.
    pub bets: SeatMap,
    pub pot: f64,
    /// Highest bet on the current street.
    pub current_bet: f64,
    /// Minimum total a raise must reach.
    pub min_raise: f64,
    /// Size of the last raise increment.
    pub last_raise: f64,
    pub board: Board,
    pub hole: HoleCards,
    /// Classification of `hole`.
    pub evaluation: HandEvaluation,
    /// Hand history, one entry per line.
    pub history: Vec<String>,
    pub stats: SessionStats,
    /// Whether fold/call/raise are accepted.
    pub actions_enabled: bool,
    /// Latest coaching message shown to the player.
    pub coach_message: String,
    /// Remaining cards of this hand's deck.
    pub deck: Deck,
}

impl GameState {
    /// Start a new hand: reset stacks, post blinds, shuffle a fresh deck and
    /// deal the hero two cards. Session stats are carried over.
    pub fn new_hand<R: Rng + ?Sized>(config: &TableConfig, stats: SessionStats, rng: &mut R) -> Self {
        let mut stacks = SeatMap::filled(config.starting_stack);
        let mut bets = SeatMap::default();

        stacks.add(Position::SB, -config.small_blind);
        bets.set(Position::SB, config.small_blind);
        stacks.add(Position::BB, -config.big_blind);
        bets.set(Position::BB, config.big_blind);

        let mut deck = Deck::shuffled(rng);
        let hole = match (deck.deal(), deck.deal()) {
            (Some(c1), Some(c2)) => HoleCards::new(c1, c2),
            _ => unreachable!("a fresh deck holds 52 cards"),
        };
        let evaluation = evaluate(&hole, Position::HERO);

        Self {
            phase: Street::Preflop,
            stacks,
            bets,
            pot: config.small_blind + config.big_blind,
            current_bet: config.big_blind,
            min_raise: config.opening_min_raise(),
            last_raise: 0.0,
            board: Board::new(),
            hole,
            evaluation,
            history: vec!["*** NEW HAND ***".to_string()],
            stats,
            actions_enabled: true,
            coach_message: String::new(),
            deck,
        }
    }

    /// The seat the human plays.
    #[inline]
    pub fn hero(&self) -> Position {
        Position::HERO
    }

    pub fn hero_bet(&self) -> f64 {
        self.bets.get(self.hero())
    }

    pub fn hero_stack(&self) -> f64 {
        self.stacks.get(self.hero())
    }

    /// Outstanding amount the hero must put in to call.
    pub fn to_call(&self) -> f64 {
        self.current_bet - self.hero_bet()
    }

    /// Bounds of the raise control: at least the tracked minimum raise and
    /// twice the current bet, at most the hero's stack.
    pub fn raise_bounds(&self) -> RaiseBounds {
        RaiseBounds {
            min: self.min_raise.max(self.current_bet * 2.0),
            max: self.hero_stack(),
        }
    }

    /// Board as text, or "not dealt yet" before the flop.
    pub fn board_text(&self) -> String {
        if self.board.is_empty() {
            "not dealt yet".to_string()
        } else {
            self.board.to_string()
        }
    }

    pub fn hole_text(&self) -> String {
        format_cards(&self.hole.cards())
    }

    /// Append an entry to the hand history.
    pub fn record(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        log::debug!("history: {}", entry);
        self.history.push(entry);
    }

    /// Clear every street bet and the amount to call.
    pub fn clear_bets(&mut self) {
        self.bets = SeatMap::default();
        self.current_bet = 0.0;
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GameState {{ phase: {}, pot: {:.2}, to_call: {:.2}, hole: {}, board: {:?} }}",
            self.phase,
            self.pot,
            self.to_call(),
            self.hole,
            self.board
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::card::Card;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_hand_posts_blinds() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = GameState::new_hand(&TableConfig::default(), SessionStats::default(), &mut rng);

        assert_eq!(state.phase, Street::Preflop);
        assert_eq!(state.pot, 1.5);
        assert_eq!(state.stacks.get(Position::CO), 100.0);
        assert_eq!(state.stacks.get(Position::SB), 99.5);
        assert_eq!(state.stacks.get(Position::BB), 99.0);
        assert_eq!(state.current_bet, 1.0);
        assert_eq!(state.min_raise, 2.0);
        assert_eq!(state.to_call(), 1.0);
        assert_eq!(state.history, vec!["*** NEW HAND ***".to_string()]);
        assert_eq!(state.deck.remaining(), 50);
        assert!(!state.deck.remaining_cards().contains(&state.hole.card1));
        assert!(state.actions_enabled);
    }

    #[test]
    fn test_stats_survive_new_hand() {
        let mut rng = StdRng::seed_from_u64(2);
        let stats = SessionStats { hands_played: 4, vpip: 30, ..Default::default() };
        let state = GameState::new_hand(&TableConfig::default(), stats.clone(), &mut rng);
        assert_eq!(state.stats, stats);
    }

    #[test]
    fn test_stat_caps() {
        let mut stats = SessionStats::default();
        for _ in 0..15 {
            stats.bump_vpip();
            stats.bump_pfr();
        }
        assert_eq!(stats.vpip, 100);
        assert_eq!(stats.pfr, 100);
    }

    #[test]
    fn test_raise_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = GameState::new_hand(&TableConfig::default(), SessionStats::default(), &mut rng);
        let bounds = state.raise_bounds();
        assert_eq!(bounds.min, 2.0);
        assert_eq!(bounds.max, 100.0);
        assert_eq!(bounds.clamp(0.5), 2.0);
        assert_eq!(bounds.clamp(250.0), 100.0);
        assert_eq!(bounds.clamp(7.5), 7.5);

        state.current_bet = 4.0;
        assert_eq!(state.raise_bounds().min, 8.0);
    }

    #[test]
    fn test_board_text() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = GameState::new_hand(&TableConfig::default(), SessionStats::default(), &mut rng);
        assert_eq!(state.board_text(), "not dealt yet");
        state.board.add(Card::parse("Qh").unwrap());
        assert_eq!(state.board_text(), "Q♥");
    }

    #[test]
    fn test_street_progression() {
        assert_eq!(Street::Preflop.next(), Some(Street::Flop));
        assert_eq!(Street::Flop.next(), Some(Street::Turn));
        assert_eq!(Street::Turn.next(), Some(Street::River));
        assert_eq!(Street::River.next(), Some(Street::Showdown));
        assert_eq!(Street::Showdown.next(), None);
    }
}
