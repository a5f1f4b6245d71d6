//! Static catalog of learning paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Skill level a learning path is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Pro,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Pro,
    ];

    /// Tag used on the wire and in path data.
    pub fn tag(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Pro => "pro",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL.iter().copied().find(|level| level.tag() == s)
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One lesson within a path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lesson {
    pub title: &'static str,
    /// One-line summary. Only the beginner lessons carry one.
    pub description: Option<&'static str>,
    /// Teaching text in markdown.
    pub content: &'static str,
}

/// A learning path shown on the selection screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningPath {
    pub id: &'static str,
    pub name: &'static str,
    pub level: SkillLevel,
    pub description: Option<&'static str>,
    pub lessons: &'static [Lesson],
}

const PATHS: &[LearningPath] = &[
    LearningPath {
        id: "fundamentals",
        name: "Poker Fundamentals",
        level: SkillLevel::Beginner,
        description: Some("Master the basic concepts of poker to build a solid foundation for your poker journey."),
        lessons: &[
            Lesson {
                title: "Introduction to Poker",
                description: Some("Learn the basic rules, hand rankings, and fundamental concepts of poker."),
                content: r#"# Introduction to Poker

Poker is a family of card games that combines gambling, strategy, and skill. The game involves players wagering over which hand is best according to specific game rules.

## Key Concepts:
1. **The Goal**: Win money by either having the best hand or making other players fold
2. **Basic Flow**: Players are dealt cards and bet in rounds
3. **Decision Making**: Choose to bet, call, raise, or fold based on your hand strength

## Hand Rankings (from highest to lowest):
1. Royal Flush
2. Straight Flush
3. Four of a Kind
4. Full House
5. Flush
6. Straight
7. Three of a Kind
8. Two Pair
9. One Pair
10. High Card

## Common Variants:
- Texas Hold'em (most popular)
- Omaha
- Seven-card Stud"#,
            },
            Lesson {
                title: "Position and Its Importance",
                description: Some("Understand why position is one of the most powerful advantages in poker and how to leverage it."),
                content: r#"# Understanding Position in Poker

Position is one of the most crucial concepts in poker. It refers to where you sit relative to the dealer button.

## Why Position Matters:
1. **Information Advantage**: Act after seeing what opponents do
2. **Control**: Better ability to control pot size
3. **Bluffing Opportunity**: More effective bluffs from late position

## Positions in 6-max:
1. **Button (BTN)**: Best position, acts last post-flop
2. **Cutoff (CO)**: Second-best position
3. **Middle Position (MP)**: Middle position
4. **Under the Gun (UTG)**: First to act
5. **Small Blind (SB)**: Forced bet, bad position
6. **Big Blind (BB)**: Forced bet, acts last pre-flop

## Strategic Implications:
- Play tighter from early positions
- Play more hands from late positions
- Use position to control pot size"#,
            },
            Lesson {
                title: "Starting Hand Selection",
                description: Some("Learn which hands to play and which to fold based on position and game context."),
                content: r#"# Starting Hand Selection

Choosing the right starting hands is fundamental to profitable poker. Not all hands are created equal.

## Hand Categories:
1. **Premium Hands**: AA, KK, QQ, AK
2. **Strong Hands**: JJ, TT, AQ, AJ, KQ
3. **Speculative Hands**: Small pairs, suited connectors
4. **Marginal Hands**: Weak aces, offsuit connectors
5. **Trash Hands**: Unsuited, unconnected low cards

## Position-Based Selection:
- **Early Position**: Play only premium and strong hands
- **Middle Position**: Add some strong speculative hands
- **Late Position**: Widen range with more speculative hands
- **Blinds**: Defend with wider range but be cautious

## Other Factors to Consider:
- Table dynamics and player tendencies
- Stack sizes (deep vs. short)
- Tournament stage or cash game context
- Number of players who have entered the pot"#,
            },
        ],
    },
    LearningPath {
        id: "basic_math",
        name: "Basic Poker Math",
        level: SkillLevel::Beginner,
        description: Some("Learn the essential mathematical concepts that form the foundation of profitable poker decision-making."),
        lessons: &[
            Lesson {
                title: "Pot Odds and Basic Probability",
                description: Some("Master the fundamental calculations needed to make profitable calls in poker."),
                content: r#"# Pot Odds and Basic Probability

Understanding poker math is crucial for making profitable decisions.

## Pot Odds:
- **Definition**: The ratio of the current pot size to the cost of a contemplated call
- **Formula**: (Pot Size) : (Call Amount)
- **Example**: If pot is $100 and call is $20, pot odds are 100:20 or 5:1

## Calculating Outs:
- **Definition**: Cards that will improve your hand
- **Rule of 2 and 4**:
  - On the flop: Multiply outs by 4 for two cards
  - On the turn: Multiply outs by 2 for one card

## Common Scenarios:
1. Flush Draw: 9 outs (19% on turn, 35% on flop)
2. Open-Ended Straight Draw: 8 outs (17% on turn, 32% on flop)
3. Pair to Set: 2 outs (4% on turn, 8% on flop)"#,
            },
            Lesson {
                title: "Expected Value (EV)",
                description: Some("Learn how to calculate the profitability of poker decisions over the long run."),
                content: r#"# Expected Value (EV) in Poker

Expected Value is a fundamental concept that helps determine the profitability of poker decisions over the long term.

## What is EV?
- **Definition**: The average amount you expect to win or lose on a bet over the long run
- **Formula**: EV = (Probability of Winning × Amount Won) - (Probability of Losing × Amount Lost)

## Calculating EV:
1. Determine your equity in the pot
2. Calculate potential winnings and losses
3. Multiply winnings by win probability
4. Multiply losses by loss probability
5. Subtract the expected loss from the expected win

## EV Examples:
- **Positive EV (+EV)**: Profitable decision over the long run
- **Negative EV (-EV)**: Unprofitable decision over the long run
- **Example Calculation**: If you have a 30% chance to win a $100 pot by calling $20, your EV is:
  (0.3 × $100) - (0.7 × $20) = $30 - $14 = $16"#,
            },
        ],
    },
    LearningPath {
        id: "hand_reading",
        name: "Hand Reading",
        level: SkillLevel::Intermediate,
        description: None,
        lessons: &[
            Lesson {
                title: "Introduction to Hand Reading",
                description: None,
                content: r#"# Hand Reading in Poker

Hand reading is the art of deducing your opponent's possible holdings based on their actions.

## Key Concepts:
1. **Range-Based Thinking**: Think in terms of hand ranges, not specific hands
2. **Action-Based Narrowing**: Use opponent's actions to narrow their range
3. **Position-Based Ranges**: Consider position when assigning ranges

## Hand Reading Process:
1. **Pre-flop Range**: Based on position and action
2. **Flop Actions**: Narrow range based on board and betting
3. **Turn Play**: Further narrow based on action and board changes
4. **River Decisions**: Final range assessment

## Common Tells and Patterns:
- Bet sizing tells
- Timing tells
- Betting patterns
- Position-based tendencies"#,
            },
        ],
    },
    LearningPath {
        id: "gto_basics",
        name: "GTO Fundamentals",
        level: SkillLevel::Advanced,
        description: None,
        lessons: &[
            Lesson {
                title: "Introduction to GTO",
                description: None,
                content: r#"# Game Theory Optimal (GTO) Poker

GTO poker refers to a theoretically perfect strategy that cannot be exploited.

## Core Concepts:
1. **Nash Equilibrium**: A strategy where no player can unilaterally improve
2. **Balance**: Having the right ratio of value bets to bluffs
3. **Minimum Defense Frequency**: Required calling frequency to prevent exploitation

## Key Principles:
1. **Bet Sizing**: Choose sizes that work for entire range
2. **Range Construction**: Build balanced ranges for all actions
3. **Frequency-Based Decisions**: Use correct frequencies for actions

## Practical Application:
- Mixed strategies
- Balanced betting ranges
- Protection concepts
- Range advantage"#,
            },
        ],
    },
    LearningPath {
        id: "advanced_gto",
        name: "Advanced GTO",
        level: SkillLevel::Pro,
        description: None,
        lessons: &[
            Lesson {
                title: "Advanced GTO Concepts",
                description: None,
                content: r#"# Advanced Game Theory Concepts

Deep dive into complex GTO principles and their practical application.

## Advanced Topics:
1. **Multi-Street Game Trees**: Understanding decision nodes and EV calculations
2. **Range Construction**: Building perfectly balanced ranges
3. **Exploitative Adjustments**: When and how to deviate from GTO

## Complex Concepts:
- **Polarized vs. Linear Ranges**
- **Blockers and Removal Effects**
- **ICM Implications on GTO**
- **Mixed Strategy Implementation**

## Solver Integration:
- Using solvers effectively
- Interpreting solver solutions
- Implementing solver findings
- Building custom scenarios"#,
            },
        ],
    },
];

/// A set of learning paths.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    paths: &'static [LearningPath],
}

impl Catalog {
    /// The built-in curriculum.
    pub fn standard() -> Self {
        Self { paths: PATHS }
    }

    /// A catalog with no paths.
    pub fn empty() -> Self {
        Self { paths: &[] }
    }

    pub fn paths(&self) -> &'static [LearningPath] {
        self.paths
    }

    pub fn path(&self, id: &str) -> Option<&'static LearningPath> {
        self.paths.iter().find(|p| p.id == id)
    }

    pub fn paths_for(&self, level: SkillLevel) -> impl Iterator<Item = &'static LearningPath> {
        self.paths.iter().filter(move |p| p.level == level)
    }

    pub fn lesson(&self, path_id: &str, index: usize) -> Option<&'static Lesson> {
        self.path(path_id)?.lessons.get(index)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
