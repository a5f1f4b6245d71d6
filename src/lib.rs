//! # Poker Coach
//!
//! A poker teaching aid: a single-player practice table with a keyword
//! coach, plus learning-path selection and a coaching advice client.
//!
//! ## Quick Start
//!
//! ```
//! use poker_coach::practice::{Command, Table, TableConfig, TableView};
//!
//! let mut table = Table::new(TableConfig::default().with_seed(42));
//! table.dispatch(Command::Call).unwrap();
//! println!("{}", TableView::project(table.state()));
//! ```
//!
//! ## Modules
//!
//! - [`practice`]: Practice hand simulator, hand chart and keyword coach
//! - [`learn`]: Learning path catalog, selector and advice client
//!
//! ## Architecture
//!
//! ```text
//!   Command ──► Table::dispatch ──► GameState ──► TableView
//!                    │                  ▲
//!                    └── responder ─────┘
//!
//!   PathSelector ──► Navigation          CoachClient ──► POST /api/coach/advice
//! ```

/// Practice hand simulator.
///
/// Deck, starting-hand chart, betting-round state machine and coach.
pub mod practice;

/// Learning paths and coaching advice requests.
pub mod learn;
