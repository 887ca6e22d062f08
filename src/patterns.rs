// src/patterns.rs
//! Pattern catalog: the four signal families as immutable rule lists.
//!
//! A rule is a case-insensitive regex plus a counting strategy:
//! - `Distinct`: the rule contributes its weight once no matter how often
//!   the pattern matches within a segment.
//! - `PerMatch`: the rule contributes the count of all non-overlapping
//!   matches, so a segment mentioning several cards scores higher.
//!
//! The catalog is pure data. Patterns can be added or tuned here without
//! touching the scorer.

use once_cell::sync::Lazy;
use regex::Regex;

/// How a rule's matches convert into a score contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counting {
    /// Fixed weight if the pattern matches at all.
    Distinct { weight: u32 },
    /// One point per non-overlapping match.
    PerMatch,
}

/// One scoring rule: compiled pattern + counting strategy.
#[derive(Debug)]
pub struct Rule {
    pattern: Regex,
    counting: Counting,
}

impl Rule {
    fn distinct(pattern: &str, weight: u32) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid catalog pattern"),
            counting: Counting::Distinct { weight },
        }
    }

    fn per_match(pattern: &str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid catalog pattern"),
            counting: Counting::PerMatch,
        }
    }

    /// Score contribution of this rule for `text`.
    pub fn score(&self, text: &str) -> u32 {
        match self.counting {
            Counting::Distinct { weight } => {
                if self.pattern.is_match(text) {
                    weight
                } else {
                    0
                }
            }
            Counting::PerMatch => self.pattern.find_iter(text).count() as u32,
        }
    }
}

/// Sum of rule contributions for one signal family.
pub fn family_score(rules: &[Rule], text: &str) -> u32 {
    rules.iter().map(|r| r.score(text)).sum()
}

/// The four signal families.
#[derive(Debug)]
pub struct Catalog {
    /// Phrases announcing that a hand is being described. Weight 2 per
    /// distinct pattern matched.
    pub hand_start: Vec<Rule>,
    /// Card ranks, pocket pairs, suited/offsuit phrasing, rank-pair
    /// shorthand. Counts every non-overlapping match.
    pub cards: Vec<Rule>,
    /// Betting verbs with an amount, plus poker-specific action terms.
    /// Weight 1 per distinct pattern matched.
    pub actions: Vec<Rule>,
    /// Street keywords, checked against the 3-segment context window.
    /// Contributes exactly 1 if any keyword appears.
    pub context: Rule,
}

pub static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog {
    hand_start: vec![
        Rule::distinct(
            r"(?i)\b(?:i|we|he|she|they|villain|hero|player)\s+(?:have|had|got dealt|was dealt|held|pick up)\s+(?:pocket|hole cards?)",
            2,
        ),
        Rule::distinct(
            r"(?i)\b(?:with|holding|dealt)\s+(?:pocket|ace|king|queen|jack|ten|\d+)",
            2,
        ),
        Rule::distinct(r"(?i)\b(?:preflop|pre-flop)\b.*\b(?:raise|call|fold|all.?in)", 2),
        Rule::distinct(r"(?i)\b(?:flop|turn|river)\s+(?:comes?|brings?|is|was)\b", 2),
        Rule::distinct(r"(?i)\bboard\s+(?:comes?|is|was|reads?)\b", 2),
        Rule::distinct(r"(?i)\bhand\s+(?:analysis|breakdown|review|discussion)\b", 2),
        Rule::distinct(
            r"(?i)\b(?:let's|we'll|i'll)\s+(?:talk about|discuss|analyze|break down|look at)\s+(?:this|a|the)\s+hand\b",
            2,
        ),
    ],
    cards: vec![
        // Rank words, optionally with an explicit suit.
        Rule::per_match(
            r"(?i)\b(?:ace|king|queen|jack|ten)s?\b(?:\s+of\s+(?:hearts|diamonds|clubs|spades))?",
        ),
        // Numeric ranks only count with suit context, so bet amounts
        // ("raises to 200") never register as cards.
        Rule::per_match(r"(?i)\b(?:10|[2-9])\s+of\s+(?:hearts|diamonds|clubs|spades)\b"),
        Rule::per_match(
            r"(?i)\bpocket\s+(?:aces|kings|queens|jacks|tens|nines|eights|sevens|sixes|fives|fours|threes|twos|deuces)\b",
        ),
        Rule::per_match(r"(?i)\b(?:suited|offsuit)\s+(?:ace|king|queen|jack|ten)\b"),
        // Rank-pair shorthand: AKs, A9, 77, 77s, QQ. A bare two-letter pair
        // without digit or suit (plain "ak") is not matched.
        Rule::per_match(r"(?i)\b(?:[akqjt2-9]{2}[shdc]|[akqjt][2-9]|[2-9][akqjt2-9]|aa|kk|qq|jj|tt)\b"),
    ],
    actions: vec![
        Rule::distinct(
            r"(?i)\b(?:raises?|calls?|folds?|checks?|bets?|all.?in|shoves?|jams?)\s+(?:to\s+)?\$?\d+",
            1,
        ),
        Rule::distinct(r"(?i)\b(?:three|3).?bet(?:s|ting)?\b", 1),
        Rule::distinct(r"(?i)\b(?:four|4).?bet(?:s|ting)?\b", 1),
        Rule::distinct(r"(?i)\bcheck.?raise", 1),
        Rule::distinct(r"(?i)\bcontinuation\s+bet\b|\bc.?bet\b", 1),
    ],
    context: Rule::distinct(r"(?i)\b(?:preflop|flop|turn|river|showdown)\b", 1),
});
