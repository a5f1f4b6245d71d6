//! Card representation for the practice table.
//!
//! This module provides the card types used by the simulator:
//! - `Card`: A single playing card with rank and suit
//! - `HoleCards`: The hero's two private cards
//! - `Board`: Community cards (0-5 cards)
//! - `Deck`: A shuffled deck of 52 cards with dealing functionality

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rank of a card, ordered 2 (lowest) to A (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    /// All ranks in deck construction order (2 to A).
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Get rank index (0-12).
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Label shown on the table. Ten is written out as "10".
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Single character used in shorthand hand notation ("T" for ten).
    pub fn short(&self) -> char {
        match self {
            Rank::Ten => 'T',
            other => other.label().chars().next().unwrap_or('?'),
        }
    }

    /// Parse a rank from "2".."9", "10", "T", "J", "Q", "K", "A".
    pub fn parse(s: &str) -> Option<Self> {
        if s == "10" {
            return Some(Rank::Ten);
        }
        let mut chars = s.chars();
        let c = chars.next()?.to_ascii_uppercase();
        if chars.next().is_some() {
            return None;
        }
        Rank::ALL.iter().copied().find(|r| r.short() == c)
    }
}

/// Colour of a suit as shown on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Suit of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Suit symbol for display.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    /// Colour derived from the suit.
    pub fn color(&self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Parse a suit from a symbol or its ASCII letter (s, h, d, c).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            's' | '♠' => Some(Suit::Spades),
            'h' | '♥' => Some(Suit::Hearts),
            'd' | '♦' => Some(Suit::Diamonds),
            'c' | '♣' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a new card from rank and suit.
    #[inline]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parse a card from strings like "As", "Td", "10h" or "K♣".
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let suit_char = s.chars().last()?;
        let suit = Suit::from_char(suit_char)?;
        let rank = Rank::parse(&s[..s.len() - suit_char.len_utf8()])?;
        Some(Self::new(rank, suit))
    }

    /// Colour of the card, derived from its suit.
    #[inline]
    pub fn color(&self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Join cards with single spaces, e.g. "A♠ 10♦ 3♣".
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The hero's two hole cards, kept in deal order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoleCards {
    pub card1: Card,
    pub card2: Card,
}

impl HoleCards {
    pub fn new(card1: Card, card2: Card) -> Self {
        Self { card1, card2 }
    }

    /// Parse hole cards from a string like "AhKs" or "Ah Ks".
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [a, b] => Some(Self::new(Card::parse(a)?, Card::parse(b)?)),
            [joined] => {
                // Split after the first suit character.
                let split = joined
                    .char_indices()
                    .skip(1)
                    .find(|(_, c)| Suit::from_char(*c).is_some())
                    .map(|(i, c)| i + c.len_utf8())?;
                Some(Self::new(
                    Card::parse(&joined[..split])?,
                    Card::parse(&joined[split..])?,
                ))
            }
            _ => None,
        }
    }

    /// Check if hole cards are suited.
    pub fn is_suited(&self) -> bool {
        self.card1.suit == self.card2.suit
    }

    /// Check if hole cards are a pair.
    pub fn is_pair(&self) -> bool {
        self.card1.rank == self.card2.rank
    }

    /// Get both cards as an array.
    pub fn cards(&self) -> [Card; 2] {
        [self.card1, self.card2]
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.card1, self.card2)
    }
}

impl fmt::Debug for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Community cards on the board.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(5) }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The most recently dealt card (turn or river card once dealt).
    pub fn last(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Add a card to the board.
    pub fn add(&mut self, card: Card) {
        debug_assert!(self.cards.len() < 5);
        self.cards.push(card);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_cards(&self.cards))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// A deck of playing cards. Cards are dealt from the end.
#[derive(Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create a deck in construction order: every rank of ♠, then ♥, ♦, ♣.
    pub fn new() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// Create a freshly shuffled 52-card deck.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Fisher-Yates shuffle of the remaining cards, walking from the back.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Deal the next card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal up to `n` cards.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(n);
        for _ in 0..n {
            match self.deal() {
                Some(card) => cards.push(card),
                None => break,
            }
        }
        cards
    }

    /// Get the number of remaining cards.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Get remaining cards as a slice.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} remaining)", self.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10♦");
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).to_string(), "2♣");
    }

    #[test]
    fn test_card_parsing() {
        assert_eq!(Card::parse("As"), Some(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(Card::parse("Td"), Some(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!(Card::parse("10h"), Some(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!(Card::parse("K♣"), Some(Card::new(Rank::King, Suit::Clubs)));
        assert!(Card::parse("XX").is_none());
        assert!(Card::parse("A").is_none());
        assert!(Card::parse("").is_none());
    }

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Clubs.color(), Color::Black);
    }

    #[test]
    fn test_hole_cards() {
        let hc = HoleCards::parse("AhKs").unwrap();
        assert_eq!(hc.card1.rank, Rank::Ace);
        assert_eq!(hc.card2.rank, Rank::King);
        assert!(!hc.is_suited());
        assert!(!hc.is_pair());

        assert!(HoleCards::parse("As Ks").unwrap().is_suited());
        assert!(HoleCards::parse("AhAs").unwrap().is_pair());
        assert_eq!(HoleCards::parse("10h9h").unwrap().card1.rank, Rank::Ten);
    }

    #[test]
    fn test_board() {
        let mut board = Board::new();
        assert!(board.is_empty());

        board.add(Card::parse("Ah").unwrap());
        board.add(Card::parse("Ks").unwrap());
        board.add(Card::parse("Td").unwrap());
        assert_eq!(board.len(), 3);
        assert_eq!(board.to_string(), "A♥ K♠ 10♦");
        assert_eq!(board.last(), Card::parse("Td"));
    }

    #[test]
    fn test_deck_is_exact_product() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.remaining(), 52);

        let unique: HashSet<Card> = deck.remaining_cards().iter().copied().collect();
        assert_eq!(unique.len(), 52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert!(unique.contains(&Card::new(rank, suit)));
            }
        }
    }

    #[test]
    fn test_shuffle_changes_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let shuffled = Deck::shuffled(&mut rng);
        assert_ne!(shuffled.remaining_cards(), Deck::new().remaining_cards());
    }

    #[test]
    fn test_deal() {
        let mut deck = Deck::new();
        assert_eq!(deck.deal(), Some(Card::new(Rank::Ace, Suit::Clubs)));
        assert_eq!(deck.remaining(), 51);

        let cards = deck.deal_n(60);
        assert_eq!(cards.len(), 51);
        assert!(deck.deal().is_none());
    }
}
