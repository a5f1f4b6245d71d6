//! Seats at the seven-handed practice table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position at the practice table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Position {
    UTG = 0,
    UTG1 = 1,
    MP = 2,
    CO = 3,
    BTN = 4,
    SB = 5,
    BB = 6,
}

/// Number of seats at the table.
pub const NUM_SEATS: usize = 7;

impl Position {
    /// All positions in preflop action order.
    pub const ALL: [Position; NUM_SEATS] = [
        Position::UTG,
        Position::UTG1,
        Position::MP,
        Position::CO,
        Position::BTN,
        Position::SB,
        Position::BB,
    ];

    /// The seat the human player always occupies.
    pub const HERO: Position = Position::CO;

    /// Get position index.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Get position name.
    pub fn name(&self) -> &'static str {
        match self {
            Position::UTG => "UTG",
            Position::UTG1 => "UTG1",
            Position::MP => "MP",
            Position::CO => "CO",
            Position::BTN => "BTN",
            Position::SB => "SB",
            Position::BB => "BB",
        }
    }

    /// Coaching advice for playing from this seat.
    pub fn advice(&self) -> &'static str {
        match self {
            Position::UTG => "Play only premium hands from UTG position. This is the tightest position at the table.",
            Position::UTG1 => "Play tight from UTG+1. This is still an early position requiring strong hands.",
            Position::MP => "You can start widening your range in middle position, but still play relatively tight.",
            Position::CO => "Cutoff is a late position where you can play more hands profitably due to positional advantage.",
            Position::BTN => "Button is the best position. You can play your widest range here.",
            Position::SB => "Small blind is a tricky position - you act first post-flop despite being near the button.",
            Position::BB => "In the big blind, you get a discount to see the flop, which allows defending with a wider range.",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-seat amounts (stacks or bets) in big blinds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeatMap([f64; NUM_SEATS]);

impl SeatMap {
    /// Every seat holds `amount`.
    pub fn filled(amount: f64) -> Self {
        Self([amount; NUM_SEATS])
    }

    pub fn get(&self, pos: Position) -> f64 {
        self.0[pos.index()]
    }

    pub fn set(&mut self, pos: Position, amount: f64) {
        self.0[pos.index()] = amount;
    }

    pub fn add(&mut self, pos: Position, delta: f64) {
        self.0[pos.index()] += delta;
    }

    /// Iterate `(position, amount)` in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, f64)> + '_ {
        Position::ALL.iter().map(move |&p| (p, self.get(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_order() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
        assert_eq!(Position::HERO, Position::CO);
    }

    #[test]
    fn test_seat_map() {
        let mut stacks = SeatMap::filled(100.0);
        stacks.add(Position::SB, -0.5);
        stacks.set(Position::BB, 99.0);
        assert_eq!(stacks.get(Position::SB), 99.5);
        assert_eq!(stacks.get(Position::BB), 99.0);
        assert_eq!(stacks.iter().count(), NUM_SEATS);
    }
}
