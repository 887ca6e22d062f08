// src/scoring.rs
//! Segment scorer: catalog application, context window, acceptance gate.
//!
//! Pure functions over the immutable catalog. Scoring segment `i` reads
//! segments `i-1`, `i`, `i+1` only and writes nothing, so segments may be
//! scored in any order (or concurrently) with identical results.

use serde::{Deserialize, Serialize};

use crate::patterns::{family_score, CATALOG};
use crate::transcript::TranscriptSegment;

/// A scored segment must reach this combined total to be considered.
pub const ACCEPT_MIN_TOTAL: u32 = 3;

/// Combined score at which confidence saturates at 1.0. A fixed calibration
/// constant, not a statistically derived maximum.
pub const CONFIDENCE_SATURATION: f32 = 8.0;

/// Per-segment counts from the four pattern families.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalScores {
    pub hand_start: u32,
    pub cards: u32,
    pub actions: u32,
    /// 0 or 1: whether any street keyword appears in the context window.
    pub context: u32,
}

impl SignalScores {
    pub fn total(&self) -> u32 {
        self.hand_start + self.cards + self.actions + self.context
    }

    /// `min(total / 8, 1.0)`.
    pub fn confidence(&self) -> f32 {
        (self.total() as f32 / CONFIDENCE_SATURATION).min(1.0)
    }

    /// Acceptance gate: enough combined signal AND at least one card mention
    /// or hand-framing phrase. Pure action/context chatter never qualifies.
    pub fn accepted(&self) -> bool {
        self.total() >= ACCEPT_MIN_TOTAL && (self.cards >= 1 || self.hand_start >= 1)
    }
}

/// Score segment `i` of `segments` against the catalog.
///
/// `hand_start`, `cards` and `actions` come from the segment's own text;
/// `context` from the 3-segment window around it. Whitespace-only text
/// yields all-zero scores.
pub fn score_segment(segments: &[TranscriptSegment], i: usize) -> SignalScores {
    let text = segments[i].text.as_str();
    if text.trim().is_empty() {
        return SignalScores::default();
    }

    let hand_start = family_score(&CATALOG.hand_start, text);
    let cards = family_score(&CATALOG.cards, text);
    let actions = family_score(&CATALOG.actions, text);
    let context = CATALOG.context.score(&context_window(segments, i));

    SignalScores {
        hand_start,
        cards,
        actions,
        context,
    }
}

/// The segment joined with its immediate neighbors, separated by spaces.
/// Missing neighbors are omitted, never treated as empty duplicates; a
/// single-segment transcript yields a window of size 1.
fn context_window(segments: &[TranscriptSegment], i: usize) -> String {
    let mut window = String::new();
    if i > 0 {
        window.push_str(&segments[i - 1].text);
        window.push(' ');
    }
    window.push_str(&segments[i].text);
    if i + 1 < segments.len() {
        window.push(' ');
        window.push_str(&segments[i + 1].text);
    }
    window
}
