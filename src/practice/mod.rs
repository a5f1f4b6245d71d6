//! Single-player practice hand simulator.
//!
//! The hero sits in the cutoff of a seven-handed table, is dealt two cards
//! and plays them through preflop, flop, turn and river against an
//! opponent who never acts. Hands are classified from a static chart and
//! showdowns are a weighted coin flip on the chart equity.
//!
//! ## Modules
//!
//! - `card`: Card, hole cards, board and deck
//! - `hand`: Shorthand notation and the starting-hand chart
//! - `position`: Table seats and per-seat amounts
//! - `action`: Commands accepted by the table
//! - `state`: Game state and session statistics
//! - `table`: The controller that applies commands
//! - `advice`: Messages the table produces on its own
//! - `responder`: Keyword coach for free-text questions
//! - `view`: Display projection of the state
//! - `config`: Table configuration

pub mod card;
pub mod hand;
pub mod position;
pub mod action;
pub mod state;
pub mod table;
pub mod advice;
pub mod responder;
pub mod view;
pub mod config;

// Re-export commonly used types
pub use card::{Card, HoleCards, Board, Deck, Rank, Suit, Color};
pub use hand::{HandCategory, HandChart, HandEvaluation, evaluate, shorthand};
pub use position::Position;
pub use action::Command;
pub use state::{GameState, SessionStats, Street};
pub use table::{Table, TableError, Outcome, win_probability};
pub use view::TableView;
pub use config::{TableConfig, RaiseTracking, ConfigError};
