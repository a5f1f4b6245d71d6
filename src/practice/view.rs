//! Read-only projection of the game state for display.

use serde::Serialize;
use std::fmt;

use super::card::{Card, Color};
use super::position::Position;
use super::state::{GameState, Street};

/// A card as shown on the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub text: String,
    pub color: Color,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self { text: card.to_string(), color: card.color() }
    }
}

/// A seat with its stack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatView {
    pub position: Position,
    pub stack: String,
    pub active: bool,
}

/// The raise control: bounded, starting at its minimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RaiseControl {
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

impl RaiseControl {
    pub fn label(&self) -> String {
        format!("{:.1} BB", self.value)
    }
}

/// Session statistics formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub hands_played: String,
    pub vpip: String,
    pub pfr: String,
    pub profit: String,
}

/// Everything the practice screen shows, derived from a [`GameState`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub phase: Street,
    pub hero_cards: Vec<CardView>,
    pub board: Vec<CardView>,
    pub pot: String,
    pub seats: Vec<SeatView>,
    pub call_label: String,
    pub raise: RaiseControl,
    pub stats: StatsView,
    pub actions_enabled: bool,
    pub coach_message: String,
    pub history: Vec<String>,
}

impl TableView {
    /// Project the state. Pure: the state is not touched.
    pub fn project(state: &GameState) -> Self {
        let hero = state.hero();
        let to_call = state.to_call();
        let bounds = state.raise_bounds();

        Self {
            phase: state.phase,
            hero_cards: state.hole.cards().iter().map(CardView::from).collect(),
            board: state.board.cards().iter().map(CardView::from).collect(),
            pot: format!("Pot: {:.1} BB", state.pot),
            seats: state
                .stacks
                .iter()
                .map(|(position, stack)| SeatView {
                    position,
                    stack: format!("{:.1} BB", stack),
                    active: position == hero,
                })
                .collect(),
            call_label: if to_call > 0.0 {
                format!("Call {:.1} BB", to_call)
            } else {
                "Check".to_string()
            },
            raise: RaiseControl { min: bounds.min, max: bounds.max, value: bounds.min },
            stats: StatsView {
                hands_played: state.stats.hands_played.to_string(),
                vpip: format!("{}%", state.stats.vpip),
                pfr: format!("{}%", state.stats.pfr),
                profit: format!("{:.1} BB", state.stats.total_profit),
            },
            actions_enabled: state.actions_enabled,
            coach_message: state.coach_message.clone(),
            history: state.history.clone(),
        }
    }

    /// Serialize the view as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn join_cards(cards: &[CardView]) -> String {
    cards.iter().map(|c| c.text.as_str()).collect::<Vec<_>>().join(" ")
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} | {}", self.phase, self.pot)?;
        if self.board.is_empty() {
            writeln!(f, "Board: -")?;
        } else {
            writeln!(f, "Board: {}", join_cards(&self.board))?;
        }

        for seat in &self.seats {
            let marker = if seat.active { '*' } else { ' ' };
            write!(f, "{}{:<5}{:>10}", marker, seat.position.name(), seat.stack)?;
            if seat.active {
                write!(f, "   [{}]", join_cards(&self.hero_cards))?;
            }
            writeln!(f)?;
        }

        if self.actions_enabled {
            writeln!(
                f,
                "Actions: fold | {} | raise {:.1}-{:.1} (default {})",
                self.call_label,
                self.raise.min,
                self.raise.max,
                self.raise.label()
            )?;
        } else {
            writeln!(f, "Hand over: type 'new' for the next hand")?;
        }

        writeln!(
            f,
            "Hands: {} | VPIP: {} | PFR: {} | Profit: {}",
            self.stats.hands_played, self.stats.vpip, self.stats.pfr, self.stats.profit
        )?;

        if !self.coach_message.is_empty() {
            writeln!(f)?;
            writeln!(f, "Coach: {}", self.coach_message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::action::Command;
    use crate::practice::config::TableConfig;
    use crate::practice::table::Table;

    #[test]
    fn test_initial_projection() {
        let table = Table::new(TableConfig::default().with_seed(12));
        let view = TableView::project(table.state());

        assert_eq!(view.pot, "Pot: 1.5 BB");
        assert_eq!(view.call_label, "Call 1.0 BB");
        assert_eq!(view.raise, RaiseControl { min: 2.0, max: 100.0, value: 2.0 });
        assert_eq!(view.hero_cards.len(), 2);
        assert!(view.board.is_empty());
        assert_eq!(view.stats.vpip, "0%");
        assert_eq!(view.stats.profit, "0.0 BB");

        let active: Vec<_> = view.seats.iter().filter(|s| s.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].position, Position::CO);

        let bb = view.seats.iter().find(|s| s.position == Position::BB).unwrap();
        assert_eq!(bb.stack, "99.0 BB");
    }

    #[test]
    fn test_projection_after_call() {
        let mut table = Table::new(TableConfig::default().with_seed(13));
        table.dispatch(Command::Call).unwrap();
        let view = TableView::project(table.state());

        assert_eq!(view.call_label, "Check");
        assert_eq!(view.board.len(), 3);
        assert_eq!(view.stats.vpip, "10%");
        assert!(view.to_string().contains("Board: "));
        assert!(view.to_json().unwrap().contains("\"call_label\": \"Check\""));
    }

    #[test]
    fn test_card_colors() {
        let card = Card::parse("Qh").unwrap();
        assert_eq!(CardView::from(&card), CardView { text: "Q♥".into(), color: Color::Red });
    }
}
