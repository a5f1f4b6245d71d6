//! Keyword coach for the practice table.
//!
//! A question is lower-cased and checked against an ordered rule list; the
//! first rule with a matching keyword answers, using live values from the
//! game state. Questions that match nothing get a situational summary.

use super::hand::HandCategory;
use super::state::{GameState, Street};

/// A coaching rule: any keyword match selects `respond`.
pub struct Rule {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
    pub respond: fn(&Spot) -> String,
}

/// The values a response can quote, taken from the game state.
pub struct Spot<'a> {
    pub state: &'a GameState,
    pub hand: String,
    pub board: String,
    pub pot: f64,
    pub call_amount: f64,
}

impl<'a> Spot<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            state,
            hand: state.hole_text(),
            board: state.board_text(),
            pot: state.pot,
            call_amount: state.to_call(),
        }
    }

    /// Share of the final pot the hero contributes by calling, rounded to
    /// two decimals.
    pub fn pot_odds(&self) -> f64 {
        pot_odds(self.pot, self.call_amount)
    }

    fn category(&self) -> HandCategory {
        self.state.evaluation.category
    }

    fn phase(&self) -> Street {
        self.state.phase
    }
}

/// `call / (pot + call)` rounded to two decimals. Pot and call are first
/// rounded to one decimal, the precision they are displayed with. Zero for
/// an empty pot.
pub fn pot_odds(pot: f64, call_amount: f64) -> f64 {
    let pot = round_tenth(pot);
    let call_amount = round_tenth(call_amount);
    let total = pot + call_amount;
    if total <= 0.0 {
        return 0.0;
    }
    (call_amount / total * 100.0).round() / 100.0
}

fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Rules in evaluation order.
pub const RULES: &[Rule] = &[
    Rule { topic: "fold", keywords: &["fold", "should i fold"], respond: fold_response },
    Rule { topic: "call", keywords: &["call", "should i call"], respond: call_response },
    Rule { topic: "raise", keywords: &["raise", "should i raise"], respond: raise_response },
    Rule { topic: "position", keywords: &["position", "my position"], respond: position_response },
    Rule { topic: "odds", keywords: &["odds", "pot odds"], respond: odds_response },
    Rule { topic: "board", keywords: &["board", "community cards"], respond: board_response },
    Rule {
        topic: "hand strength",
        keywords: &["hand strength", "how strong"],
        respond: strength_response,
    },
];

/// Answer a free-text question about the current spot.
pub fn respond(question: &str, state: &GameState) -> String {
    let lower = question.to_lowercase();
    let spot = Spot::new(state);

    match RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
    {
        Some(rule) => {
            log::debug!("coach question matched topic '{}'", rule.topic);
            (rule.respond)(&spot)
        }
        None => default_response(&spot),
    }
}

fn fold_response(spot: &Spot) -> String {
    match (spot.category(), spot.phase()) {
        (HandCategory::Premium, Street::Preflop) => format!(
            "With {}, folding preflop would be a mistake. This is a premium hand that should be raised from any position.",
            spot.hand
        ),
        (HandCategory::Weak, Street::Preflop) => format!(
            "With {} in {}, folding is often the correct play, especially against early position raises.",
            spot.hand,
            spot.state.hero()
        ),
        _ => format!(
            "Folding depends on your hand strength, board texture, and pot odds. With {} on {}, consider if you have the right odds to continue.",
            spot.hand, spot.board
        ),
    }
}

fn call_response(spot: &Spot) -> String {
    let odds = spot.pot_odds();
    let verdict = if spot.state.evaluation.equity > odds {
        "profitable"
    } else {
        "unprofitable"
    };
    format!(
        "To call {:.1} BB into a {:.1} BB pot, you need approximately {:.2} equity to break even. \
         With {} in {} against the current board {}, calling is {} based on simplified equity estimates.",
        spot.call_amount,
        spot.pot,
        odds,
        spot.hand,
        spot.state.hero(),
        spot.board,
        verdict
    )
}

fn raise_response(spot: &Spot) -> String {
    let hero = spot.state.hero();
    match spot.phase() {
        Street::Preflop => match spot.category() {
            HandCategory::Premium | HandCategory::Strong => format!(
                "With {} in {}, raising is recommended. A standard raise would be to 2.5-3BB.",
                spot.hand, hero
            ),
            _ => format!(
                "With {} in {}, raising is speculative. It could work as a bluff or semi-bluff if you believe your opponents will fold often.",
                spot.hand, hero
            ),
        },
        phase => format!(
            "Raising on the {} with {} against board {} depends on your perceived hand strength and your opponent's tendencies. \
             If you believe you have the best hand, raising for value makes sense.",
            phase, spot.hand, spot.board
        ),
    }
}

fn position_response(spot: &Spot) -> String {
    spot.state.hero().advice().to_string()
}

fn odds_response(spot: &Spot) -> String {
    let percent = spot.pot_odds() * 100.0;
    format!(
        "The pot is {:.1} BB and you need to call {:.1} BB, giving you pot odds of {:.0}%. \
         This means your hand needs at least {:.0}% equity against your opponent's range to make a profitable call.",
        spot.pot, spot.call_amount, percent, percent
    )
}

fn board_response(spot: &Spot) -> String {
    if spot.state.board.is_empty() {
        return "The community cards haven't been dealt yet. We're still in the preflop betting round."
            .to_string();
    }
    format!(
        "The current board is {}. Look for potential draws, pairs, and how this board interacts with your hand {} and your opponent's likely range.",
        spot.board, spot.hand
    )
}

fn strength_response(spot: &Spot) -> String {
    format!(
        "Your hand {} is categorized as {}. In {} against the current board {}, your estimated equity is roughly {:.0}% (simplified calculation).",
        spot.hand,
        spot.category(),
        spot.state.hero(),
        spot.board,
        spot.state.evaluation.equity * 100.0
    )
}

fn default_response(spot: &Spot) -> String {
    format!(
        "As a poker coach, I can help analyze your current situation. You have {} in {} position. \
         The current phase is {} with board {}. The pot is {:.1} BB. \
         Ask me about specific concepts like position, hand strength, pot odds, or whether you should fold, call, or raise.",
        spot.hand,
        spot.state.hero(),
        spot.phase(),
        spot.board,
        spot.pot
    )
}
