//! The practice table controller.
//!
//! `Table` owns the game state and the random source. Every change goes
//! through [`Table::dispatch`], which maps a [`Command`] onto a state
//! transition:
//!
//! ```text
//! preflop ──► flop ──► turn ──► river ──► showdown
//!    │          │        │        │
//!    └── fold ends the hand from any street
//! ```
//!
//! Only the hero acts. A call or raise moves straight to the next street.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::action::Command;
use super::advice;
use super::config::{RaiseTracking, TableConfig};
use super::responder;
use super::state::{GameState, SessionStats, Street};

/// Growth of the showdown win probability per board card.
pub const BOARD_BONUS_PER_CARD: f64 = 0.05;

/// Errors returned by the table controller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("the hand is over; start a new hand")]
    HandOver,
}

/// Outcome of a dispatched command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The hand continues on `street`.
    Continued { street: Street },
    /// The hero folded.
    Folded { loss: f64 },
    /// The hand went to showdown.
    Showdown { won: bool, amount: f64, profit: f64 },
    /// A new hand was dealt.
    Dealt,
    /// The coach answered a question.
    Answered(String),
    /// Nothing happened (empty question).
    Ignored,
}

/// Chance the hero wins at showdown: hand equity scaled up by 5% per board
/// card. Five cards give at most a 1.25x multiplier.
pub fn win_probability(equity: f64, board_cards: usize) -> f64 {
    equity * (1.0 + board_cards.min(5) as f64 * BOARD_BONUS_PER_CARD)
}

/// Single-player practice table.
pub struct Table {
    config: TableConfig,
    state: GameState,
    rng: StdRng,
}

impl Table {
    /// Create a table and deal the first hand.
    pub fn new(config: TableConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = GameState::new_hand(&config, SessionStats::default(), &mut rng);
        let mut table = Self { config, state, rng };
        table.state.coach_message = advice::initial_advice(&table.state);
        log::info!("practice table ready, hero holds {}", table.state.hole);
        table
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Apply a command to the table.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, TableError> {
        log::debug!("dispatch {}", command);
        if command.is_betting_action() && !self.state.actions_enabled {
            return Err(TableError::HandOver);
        }

        match command {
            Command::Fold => Ok(self.fold()),
            Command::Call => Ok(self.call()),
            Command::Raise { to } => Ok(self.raise(to)),
            Command::NewHand => Ok(self.new_hand()),
            Command::Ask { question } => Ok(self.ask(&question)),
        }
    }

    /// Reset stacks and blinds and deal a new hand. Session stats are kept.
    pub fn new_hand(&mut self) -> Outcome {
        let stats = std::mem::take(&mut self.state.stats);
        self.state = GameState::new_hand(&self.config, stats, &mut self.rng);
        self.state.coach_message = advice::initial_advice(&self.state);
        log::info!(
            "new hand: {} ({})",
            self.state.hole,
            self.state.evaluation.category
        );
        Outcome::Dealt
    }

    fn fold(&mut self) -> Outcome {
        let hero = self.state.hero();
        let loss = self.state.hero_bet();

        self.state.record(format!("{} folds", hero));
        self.state.stats.record_hand(-loss, false);
        self.state.actions_enabled = false;
        self.state.coach_message = advice::FOLD_MESSAGE.to_string();
        log::info!("hero folded, lost {:.1} BB", loss);
        Outcome::Folded { loss }
    }

    fn call(&mut self) -> Outcome {
        let hero = self.state.hero();
        let amount = self.state.to_call();

        if amount > 0.0 {
            self.state.stacks.add(hero, -amount);
            self.state.bets.add(hero, amount);
            self.state.pot += amount;
            self.state.record(format!("{} calls {:.1} BB", hero, amount));

            if self.state.phase == Street::Preflop {
                self.state.stats.bump_vpip();
            }
        } else {
            self.state.record(format!("{} checks", hero));
        }

        self.advance_street()
    }

    fn raise(&mut self, requested: f64) -> Outcome {
        // All in already: nothing left to raise with.
        if self.state.hero_stack() <= 0.0 {
            log::warn!("raise to {:.1} BB with an empty stack, checking instead", requested);
            return self.call();
        }

        let hero = self.state.hero();
        let to = self.state.raise_bounds().clamp(requested);
        let extra = to - self.state.hero_bet();
        let facing = self.state.current_bet;

        self.state.stacks.add(hero, -extra);
        self.state.bets.set(hero, to);
        self.state.pot += extra;
        self.state.current_bet = to;
        self.state.last_raise = match self.config.raise_tracking {
            RaiseTracking::Increment => to - facing,
            RaiseTracking::Legacy => to - self.state.current_bet,
        };
        self.state.min_raise = to + self.state.last_raise;

        self.state.record(format!("{} raises to {:.1} BB", hero, to));

        if self.state.phase == Street::Preflop {
            self.state.stats.bump_vpip();
            self.state.stats.bump_pfr();
        }

        self.advance_street()
    }

    fn advance_street(&mut self) -> Outcome {
        let next = match self.state.phase.next() {
            Some(Street::Showdown) | None => return self.showdown(),
            Some(next) => next,
        };

        self.state.phase = next;
        for card in self.state.deck.deal_n(next.cards_dealt()) {
            self.state.board.add(card);
        }
        let label = next.name().to_uppercase();
        let entry = format!("*** {} *** [{}]", label, self.state.board);
        self.state.record(entry);

        self.state.clear_bets();
        self.state.coach_message = advice::street_advice(&self.state);
        Outcome::Continued { street: next }
    }

    fn showdown(&mut self) -> Outcome {
        let hero = self.state.hero();
        let p = win_probability(self.state.evaluation.equity, self.state.board.len());
        let won = self.rng.gen::<f64>() < p;

        let amount = if won { self.state.pot } else { 0.0 };
        let profit = amount - self.state.hero_bet();

        self.state.phase = Street::Showdown;
        self.state.stats.record_hand(profit, won);
        if won {
            self.state.stacks.add(hero, amount);
            self.state.record(format!("{} wins {:.1} BB", hero, amount));
            self.state.coach_message = advice::win_message(amount);
        } else {
            self.state.record(format!("{} loses", hero));
            self.state.coach_message = advice::loss_message();
        }
        self.state.actions_enabled = false;

        log::info!(
            "showdown: p={:.4} won={} profit={:.1} BB",
            p,
            won,
            profit
        );
        Outcome::Showdown { won, amount, profit }
    }

    fn ask(&mut self, question: &str) -> Outcome {
        let question = question.trim();
        if question.is_empty() {
            return Outcome::Ignored;
        }
        let answer = responder::respond(question, &self.state);
        self.state.coach_message = answer.clone();
        Outcome::Answered(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::card::{Card, HoleCards};
    use crate::practice::hand::{evaluate, HandCategory};
    use crate::practice::position::Position;
    use std::collections::HashSet;

    fn table(seed: u64) -> Table {
        Table::new(TableConfig::default().with_seed(seed))
    }

    fn table_with(seed: u64, tracking: RaiseTracking) -> Table {
        Table::new(TableConfig::default().with_seed(seed).with_raise_tracking(tracking))
    }

    #[test]
    fn test_reset_state() {
        let mut t = table(1);
        t.dispatch(Command::Raise { to: 6.0 }).unwrap();
        t.dispatch(Command::NewHand).unwrap();

        let s = t.state();
        assert_eq!(s.pot, 1.5);
        assert_eq!(s.stacks.get(Position::CO), 100.0);
        assert_eq!(s.stacks.get(Position::SB), 99.5);
        assert_eq!(s.stacks.get(Position::BB), 99.0);
        assert_eq!(s.phase, Street::Preflop);
        assert!(s.board.is_empty());
        assert!(s.actions_enabled);
        assert_eq!(s.history, vec!["*** NEW HAND ***".to_string()]);
    }

    #[test]
    fn test_fold_records_loss_of_current_bet() {
        let mut t = table(2);
        t.dispatch(Command::Call).unwrap();
        // Postflop bets are cleared, so the fold costs nothing further.
        assert_eq!(t.dispatch(Command::Fold).unwrap(), Outcome::Folded { loss: 0.0 });
        assert_eq!(t.state().stats.total_profit, 0.0);

        let mut t = table(3);
        t.state.bets.set(Position::CO, 1.0);
        let before = t.state().stats.total_profit;
        t.dispatch(Command::Fold).unwrap();
        assert_eq!(t.state().stats.total_profit - before, -1.0);
        assert_eq!(t.state().stats.hands_played, 1);
        assert_eq!(t.state().history.last().unwrap(), "CO folds");
        assert!(!t.state().actions_enabled);
    }

    #[test]
    fn test_actions_rejected_after_fold() {
        let mut t = table(4);
        t.dispatch(Command::Fold).unwrap();
        assert_eq!(t.dispatch(Command::Call), Err(TableError::HandOver));
        assert_eq!(t.dispatch(Command::Raise { to: 4.0 }), Err(TableError::HandOver));
        assert_eq!(t.state().stats.hands_played, 1);
        assert!(t.dispatch(Command::NewHand).is_ok());
        assert!(t.dispatch(Command::Call).is_ok());
    }

    #[test]
    fn test_preflop_call() {
        let mut t = table(5);
        let outcome = t.dispatch(Command::Call).unwrap();
        assert_eq!(outcome, Outcome::Continued { street: Street::Flop });

        let s = t.state();
        assert_eq!(s.pot, 2.5);
        assert_eq!(s.stacks.get(Position::CO), 99.0);
        assert_eq!(s.history[1], "CO calls 1.0 BB");
        assert!(s.history[2].starts_with("*** FLOP *** ["));
        assert_eq!(s.board.len(), 3);
        assert_eq!(s.stats.vpip, 10);
        assert_eq!(s.stats.pfr, 0);
        assert_eq!(s.current_bet, 0.0);
        assert!(Position::ALL.iter().all(|&p| s.bets.get(p) == 0.0));
    }

    #[test]
    fn test_zero_delta_call_is_check() {
        let mut t = table(6);
        t.dispatch(Command::Call).unwrap();
        t.dispatch(Command::Call).unwrap();
        let s = t.state();
        assert_eq!(s.history[3], "CO checks");
        assert_eq!(s.phase, Street::Turn);
        assert_eq!(s.pot, 2.5);
        assert_eq!(s.stats.vpip, 10);
    }

    #[test]
    fn test_raise_increment_tracking() {
        let mut t = table_with(7, RaiseTracking::Increment);
        t.dispatch(Command::Raise { to: 3.0 }).unwrap();
        let s = t.state();
        assert_eq!(s.pot, 4.5);
        assert_eq!(s.stacks.get(Position::CO), 97.0);
        assert_eq!(s.last_raise, 2.0);
        assert_eq!(s.min_raise, 5.0);
        assert_eq!(s.history[1], "CO raises to 3.0 BB");
        assert_eq!(s.stats.vpip, 10);
        assert_eq!(s.stats.pfr, 10);
        assert_eq!(s.phase, Street::Flop);
    }

    #[test]
    fn test_raise_legacy_tracking() {
        let mut t = table_with(7, RaiseTracking::Legacy);
        t.dispatch(Command::Raise { to: 3.0 }).unwrap();
        assert_eq!(t.state().last_raise, 0.0);
        assert_eq!(t.state().min_raise, 3.0);
    }

    #[test]
    fn test_raise_is_clamped_to_bounds() {
        let mut t = table(8);
        t.dispatch(Command::Raise { to: 0.5 }).unwrap();
        assert_eq!(t.state().history[1], "CO raises to 2.0 BB");

        let mut t = table(8);
        t.dispatch(Command::Raise { to: 500.0 }).unwrap();
        assert_eq!(t.state().history[1], "CO raises to 100.0 BB");
        assert_eq!(t.state().stacks.get(Position::CO), 0.0);
    }

    #[test]
    fn test_raise_with_empty_stack_checks() {
        let mut t = table(8);
        t.dispatch(Command::Raise { to: 500.0 }).unwrap();
        let min_raise = t.state().min_raise;

        let outcome = t.dispatch(Command::Raise { to: 10.0 }).unwrap();
        assert_eq!(outcome, Outcome::Continued { street: Street::Turn });
        let s = t.state();
        assert_eq!(s.history[3], "CO checks");
        assert!(s.history.iter().all(|h| h != "CO raises to 0.0 BB"));
        assert_eq!(s.min_raise, min_raise);
        assert_eq!(s.stacks.get(Position::CO), 0.0);
        assert_eq!(s.pot, 101.5);
    }

    #[test]
    fn test_street_history_shows_whole_board() {
        let mut t = table(12);
        t.dispatch(Command::Call).unwrap();
        t.dispatch(Command::Call).unwrap();
        let turn = format!("*** TURN *** [{}]", t.state().board);
        assert_eq!(t.state().board.len(), 4);
        assert_eq!(t.state().history[4], turn);

        t.dispatch(Command::Call).unwrap();
        let s = t.state();
        assert_eq!(s.board.len(), 5);
        assert_eq!(s.history[6], format!("*** RIVER *** [{}]", s.board));
    }

    #[test]
    fn test_full_hand_reaches_showdown() {
        let mut t = table(9);
        assert_eq!(t.dispatch(Command::Call).unwrap(), Outcome::Continued { street: Street::Flop });
        assert_eq!(t.dispatch(Command::Call).unwrap(), Outcome::Continued { street: Street::Turn });
        assert_eq!(t.dispatch(Command::Call).unwrap(), Outcome::Continued { street: Street::River });
        assert_eq!(t.state().board.len(), 5);

        let outcome = t.dispatch(Command::Call).unwrap();
        let s = t.state();
        assert_eq!(s.phase, Street::Showdown);
        assert!(!s.actions_enabled);
        assert_eq!(s.stats.hands_played, 1);
        match outcome {
            Outcome::Showdown { won: true, amount, profit } => {
                assert_eq!(amount, 2.5);
                assert_eq!(profit, 2.5);
                assert_eq!(s.stats.hands_won, 1);
                assert_eq!(s.history.last().unwrap(), "CO wins 2.5 BB");
                assert_eq!(s.stacks.get(Position::CO), 101.5);
            }
            Outcome::Showdown { won: false, amount, profit } => {
                assert_eq!(amount, 0.0);
                assert_eq!(profit, 0.0);
                assert_eq!(s.history.last().unwrap(), "CO loses");
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_no_duplicate_cards_within_hand() {
        for seed in 0..50 {
            let mut t = table(seed);
            for _ in 0..3 {
                t.dispatch(Command::Call).unwrap();
            }
            let s = t.state();
            let mut seen: HashSet<Card> = s.board.cards().iter().copied().collect();
            assert_eq!(seen.len(), 5);
            for card in s.hole.cards() {
                assert!(seen.insert(card), "{} dealt twice", card);
            }
        }
    }

    #[test]
    fn test_same_seed_same_hand() {
        let a = table(21);
        let b = table(21);
        assert_eq!(a.state().hole, b.state().hole);
    }

    #[test]
    fn test_win_probability() {
        assert!((win_probability(0.65, 5) - 0.8125).abs() < 1e-12);
        assert_eq!(win_probability(0.65, 0), 0.65);
        assert!((win_probability(0.25, 3) - 0.2875).abs() < 1e-12);
        for category in [HandCategory::Premium, HandCategory::Weak] {
            assert!(win_probability(category.equity(), 5) <= 1.0);
        }
        assert!(win_probability(0.8, 5) <= 1.0);
    }

    #[test]
    fn test_initial_advice_for_aces() {
        let mut t = table(10);
        t.state.hole = HoleCards::parse("AsAd").unwrap();
        t.state.evaluation = evaluate(&t.state.hole, Position::CO);
        assert_eq!(t.state().evaluation.category, HandCategory::Premium);
        assert_eq!(t.state().evaluation.equity, 0.65);
        assert!(advice::initial_advice(t.state()).contains("Consider raising to 3BB"));

        match t.dispatch(Command::Ask { question: "should I fold?".into() }).unwrap() {
            Outcome::Answered(text) => assert!(text.contains("would be a mistake")),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_empty_question_is_ignored() {
        let mut t = table(11);
        let before = t.state().coach_message.clone();
        assert_eq!(t.dispatch(Command::Ask { question: "  ".into() }).unwrap(), Outcome::Ignored);
        assert_eq!(t.state().coach_message, before);
    }
}
