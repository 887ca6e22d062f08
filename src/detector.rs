// src/detector.rs
//! Hand detection: score every segment, gate, and rank.
//!
//! Pure logic over an in-memory transcript, suitable for unit tests and
//! offline evaluation. No I/O.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::scoring::{score_segment, SignalScores};
use crate::transcript::Transcript;

/// A segment judged likely to describe a poker hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Seconds from the start of the audio (the segment's `start`).
    pub timestamp: f64,
    pub duration: f64,
    pub text: String,
    /// In [0, 1]; saturates at a combined score of 8.
    pub confidence: f32,
    pub scores: SignalScores,
}

/// Score all segments of `transcript` and return the accepted candidates
/// ranked by confidence, highest first. Ties keep transcript order.
///
/// Deterministic and pure: the same transcript always yields the same list.
/// Fails only on malformed input (see [`Transcript::validate`]); no partial
/// results are produced on failure.
pub fn detect_hands(transcript: &Transcript) -> Result<Vec<Candidate>> {
    transcript.validate()?;

    let segments = &transcript.segments;
    let mut candidates = Vec::new();

    for i in 0..segments.len() {
        let scores = score_segment(segments, i);
        if scores.accepted() {
            let seg = &segments[i];
            candidates.push(Candidate {
                timestamp: seg.start,
                duration: seg.end - seg.start,
                text: seg.text.clone(),
                confidence: scores.confidence(),
                scores,
            });
        }
    }

    // Stable sort: equal-confidence candidates keep discovery order.
    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    info!(
        source = %transcript.source_id,
        segments = segments.len(),
        hands = candidates.len(),
        "detected potential poker hands"
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::TranscriptSegment;
    use chrono::{TimeZone, Utc};

    fn transcript(texts: &[&str]) -> Transcript {
        let segments: Vec<TranscriptSegment> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| TranscriptSegment::new(*t, i as f64 * 5.0, (i as f64 + 1.0) * 5.0))
            .collect();
        Transcript {
            source_id: "test.mp3".into(),
            duration_seconds: texts.len() as f64 * 5.0,
            language: "en".into(),
            full_text: texts.join(" "),
            segments,
            processed_at: Utc.with_ymd_and_hms(2025, 8, 16, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn candidate_count_never_exceeds_segment_count() {
        let t = transcript(&[
            "I had pocket aces preflop",
            "flop comes king high",
            "nothing at all",
        ]);
        let hands = detect_hands(&t).unwrap();
        assert!(hands.len() <= t.segments.len());
        for h in &hands {
            assert!((0.0..=1.0).contains(&h.confidence));
        }
    }

    #[test]
    fn malformed_transcript_yields_no_partial_output() {
        let mut t = transcript(&["I had pocket aces preflop"]);
        t.segments[0].end = f64::NAN;
        assert!(detect_hands(&t).is_err());
    }

    #[test]
    fn candidate_serializes_with_score_breakdown() {
        let t = transcript(&["I had pocket aces preflop"]);
        let hands = detect_hands(&t).unwrap();
        assert_eq!(hands.len(), 1);

        let v = serde_json::to_value(&hands[0]).unwrap();
        assert_eq!(v["timestamp"], serde_json::json!(0.0));
        assert_eq!(v["duration"], serde_json::json!(5.0));
        assert_eq!(v["scores"]["hand_start"], serde_json::json!(2));
        assert_eq!(v["scores"]["cards"], serde_json::json!(2));
        assert!(v["confidence"].as_f64().unwrap() > 0.0);
    }
}
