//! Starting-hand classification.
//!
//! Hole cards are reduced to shorthand notation ("AA", "AKs", "T9o") and
//! looked up in a fixed chart of four categories. Anything off the chart is
//! weak. Equity is a constant per category and does not look at the board.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::card::{HoleCards, Rank};
use super::position::Position;

/// Rank characters from highest to lowest, used to order shorthand.
const RANK_ORDER: [char; 13] = ['A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2'];

const PREMIUM: &[&str] = &["AA", "KK", "QQ", "AKs", "AKo"];
const STRONG: &[&str] = &["JJ", "TT", "AQs", "AQo", "AJs", "KQs"];
const PLAYABLE: &[&str] = &["99", "88", "ATs", "KJs", "QJs", "AJo", "KQo"];
const SPECULATIVE: &[&str] = &["77", "66", "A9s", "A8s", "KTs", "QTs", "JTs", "T9s"];

/// Strength bucket of a starting hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandCategory {
    Premium,
    Strong,
    Playable,
    Speculative,
    Weak,
}

impl HandCategory {
    /// Charted categories in lookup priority order.
    pub const CHARTED: [HandCategory; 4] = [
        HandCategory::Premium,
        HandCategory::Strong,
        HandCategory::Playable,
        HandCategory::Speculative,
    ];

    /// Fixed equity estimate for the category.
    pub fn equity(&self) -> f64 {
        match self {
            HandCategory::Premium => 0.65,
            HandCategory::Strong => 0.55,
            HandCategory::Playable => 0.45,
            HandCategory::Speculative => 0.35,
            HandCategory::Weak => 0.25,
        }
    }

    /// Hands listed for this category. Weak has no list.
    pub fn hands(&self) -> &'static [&'static str] {
        match self {
            HandCategory::Premium => PREMIUM,
            HandCategory::Strong => STRONG,
            HandCategory::Playable => PLAYABLE,
            HandCategory::Speculative => SPECULATIVE,
            HandCategory::Weak => &[],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::Premium => "premium",
            HandCategory::Strong => "strong",
            HandCategory::Playable => "playable",
            HandCategory::Speculative => "speculative",
            HandCategory::Weak => "weak",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Position of a rank in the high-to-low ordering (A = 0).
fn rank_order(rank: Rank) -> usize {
    RANK_ORDER
        .iter()
        .position(|&c| c == rank.short())
        .unwrap_or(RANK_ORDER.len())
}

/// Canonical shorthand for two hole cards.
///
/// Pairs are the rank doubled ("TT"); other hands put the higher rank first
/// and append `s` (suited) or `o` (offsuit). The result does not depend on
/// the order the cards were dealt in.
pub fn shorthand(hole: &HoleCards) -> String {
    let (c1, c2) = (hole.card1, hole.card2);
    if hole.is_pair() {
        return format!("{0}{0}", c1.rank.short());
    }

    let (high, low) = if rank_order(c1.rank) < rank_order(c2.rank) {
        (c1, c2)
    } else {
        (c2, c1)
    };
    let suffix = if hole.is_suited() { 's' } else { 'o' };
    format!("{}{}{}", high.rank.short(), low.rank.short(), suffix)
}

/// Lookup table from shorthand to category.
pub struct HandChart {
    lookup: FxHashMap<&'static str, HandCategory>,
}

impl HandChart {
    /// Build the chart. Earlier categories win if a hand is listed twice.
    pub fn new() -> Self {
        let mut lookup = FxHashMap::default();
        for category in HandCategory::CHARTED {
            for &hand in category.hands() {
                lookup.entry(hand).or_insert(category);
            }
        }
        Self { lookup }
    }

    /// The shared chart.
    pub fn standard() -> &'static HandChart {
        static CHART: OnceLock<HandChart> = OnceLock::new();
        CHART.get_or_init(HandChart::new)
    }

    /// Category for a shorthand string, weak when unlisted.
    pub fn category(&self, shorthand: &str) -> HandCategory {
        self.lookup.get(shorthand).copied().unwrap_or(HandCategory::Weak)
    }

    /// Number of charted hands.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

impl Default for HandChart {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of classifying the hero's hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub shorthand: String,
    pub category: HandCategory,
    pub equity: f64,
    pub position_advice: String,
}

/// Classify hole cards held from `position`.
pub fn evaluate(hole: &HoleCards, position: Position) -> HandEvaluation {
    let shorthand = shorthand(hole);
    let category = HandChart::standard().category(&shorthand);
    log::debug!("{} classified as {}", shorthand, category);
    HandEvaluation {
        shorthand,
        category,
        equity: category.equity(),
        position_advice: position.advice().to_string(),
    }
}
