//! Coaching messages produced by the table itself.

use super::hand::HandCategory;
use super::state::{GameState, Street};

pub const FOLD_MESSAGE: &str = "You folded. Start a new hand to continue.";

/// Advice shown right after the hole cards are dealt.
pub fn initial_advice(state: &GameState) -> String {
    let category = state.evaluation.category;
    let mut advice = format!(
        "You're in the {} position with {} ({}). ",
        state.hero(),
        state.hole_text(),
        category
    );

    advice.push_str(match category {
        HandCategory::Premium => {
            "This is a premium hand that you should raise with from any position. Consider raising to 3BB."
        }
        HandCategory::Strong => {
            "This is a strong hand that plays well from late positions like yours. A standard raise to 2.5-3BB is recommended."
        }
        HandCategory::Playable => {
            "This hand is playable from late position. You can raise to 2.5BB or call if there's already been a raise."
        }
        HandCategory::Speculative => {
            "This is a speculative hand with potential. From your position, you could raise to 2.5BB or fold if facing aggression."
        }
        HandCategory::Weak => {
            "This hand is relatively weak. From your position, you could consider folding unless you want to mix your play."
        }
    });

    advice.push_str("\n\n");
    advice.push_str(&state.evaluation.position_advice);
    advice
}

/// Advice for the street that was just dealt. Empty before the flop and
/// at showdown.
pub fn street_advice(state: &GameState) -> String {
    let newest = state
        .board
        .last()
        .map(|c| c.to_string())
        .unwrap_or_default();

    match state.phase {
        Street::Flop => format!(
            "The flop is {}. Look for connected cards, pairs, or flush/straight possibilities. \
             With your {} hand, consider how this board hits your range.",
            state.board, state.evaluation.category
        ),
        Street::Turn => format!(
            "The turn is {}. Reevaluate your hand strength. If you have a strong hand, consider value betting. \
             If your hand is marginal, pot control might be better.",
            newest
        ),
        Street::River => format!(
            "The river is {}. This is your last chance to extract value or bluff. \
             Consider your opponent's likely holdings and whether your hand is strong enough to value bet.",
            newest
        ),
        Street::Preflop | Street::Showdown => String::new(),
    }
}

pub fn win_message(amount: f64) -> String {
    format!(
        "You won {:.1} BB! Your hand was strong enough to win at showdown. Start a new hand to continue.",
        amount
    )
}

pub fn loss_message() -> String {
    "You lost at showdown. Start a new hand to play another hand.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::card::{Card, HoleCards};
    use crate::practice::config::TableConfig;
    use crate::practice::hand::evaluate;
    use crate::practice::state::SessionStats;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state_with(hole: &str) -> GameState {
        let mut rng = StdRng::seed_from_u64(11);
        let mut state = GameState::new_hand(&TableConfig::default(), SessionStats::default(), &mut rng);
        state.hole = HoleCards::parse(hole).unwrap();
        state.evaluation = evaluate(&state.hole, state.hero());
        state
    }

    #[test]
    fn test_premium_advice_recommends_3bb() {
        let advice = initial_advice(&state_with("AsAh"));
        assert!(advice.starts_with("You're in the CO position with A♠ A♥ (premium). "));
        assert!(advice.contains("Consider raising to 3BB."));
        assert!(advice.ends_with(crate::practice::Position::CO.advice()));
    }

    #[test]
    fn test_weak_advice_suggests_folding() {
        let advice = initial_advice(&state_with("7c2d"));
        assert!(advice.contains("(weak)"));
        assert!(advice.contains("consider folding"));
    }

    #[test]
    fn test_street_advice() {
        let mut state = state_with("KhQh");
        assert_eq!(street_advice(&state), "");

        for c in ["2h", "7d", "Jc"] {
            state.board.add(Card::parse(c).unwrap());
        }
        state.phase = Street::Flop;
        assert!(street_advice(&state).starts_with("The flop is 2♥ 7♦ J♣."));

        state.board.add(Card::parse("Ts").unwrap());
        state.phase = Street::Turn;
        assert!(street_advice(&state).starts_with("The turn is 10♠."));

        state.board.add(Card::parse("Ad").unwrap());
        state.phase = Street::River;
        assert!(street_advice(&state).starts_with("The river is A♦."));
    }
}
