//! End-to-end detection over the canonical three-segment transcript:
//! hand framing + cards qualify, bare action chatter does not.

use chrono::{TimeZone, Utc};
use poker_hand_analyzer::{detect_hands, Transcript, TranscriptSegment};

fn transcript(segments: Vec<TranscriptSegment>) -> Transcript {
    let full_text = segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let duration = segments.last().map(|s| s.end).unwrap_or(0.0);
    Transcript {
        source_id: "episode_042.mp3".into(),
        duration_seconds: duration,
        language: "en".into(),
        full_text,
        segments,
        processed_at: Utc.with_ymd_and_hms(2025, 8, 16, 10, 0, 0).unwrap(),
    }
}

fn seg(text: &str, start: f64, end: f64) -> TranscriptSegment {
    TranscriptSegment::new(text, start, end)
}

#[test]
fn pocket_aces_segment_qualifies_action_segment_does_not() {
    let t = transcript(vec![
        seg("I had pocket aces preflop", 0.0, 5.0),
        seg("he raises to 200", 5.0, 8.0),
        seg("flop comes king high", 8.0, 12.0),
    ]);

    let hands = detect_hands(&t).unwrap();
    assert_eq!(hands.len(), 2);

    // Top hand: the pocket-aces segment (hand_start 2, cards 2, context 1).
    assert_eq!(hands[0].text, "I had pocket aces preflop");
    assert_eq!(hands[0].timestamp, 0.0);
    assert_eq!(hands[0].duration, 5.0);
    assert!(hands[0].scores.hand_start >= 2);
    assert!(hands[0].scores.cards >= 1);
    assert!(hands[0].scores.context >= 1);
    assert!((hands[0].confidence - 0.625).abs() < 1e-6);

    // Second: the flop segment.
    assert_eq!(hands[1].timestamp, 8.0);
    assert!((hands[1].confidence - 0.5).abs() < 1e-6);

    // The action-only middle segment never qualifies.
    assert!(!hands.iter().any(|h| h.text.contains("raises to 200")));
}

#[test]
fn detection_is_idempotent() {
    let t = transcript(vec![
        seg("I had pocket aces preflop", 0.0, 5.0),
        seg("he raises to 200", 5.0, 8.0),
        seg("flop comes king high", 8.0, 12.0),
    ]);

    let first = detect_hands(&t).unwrap();
    let second = detect_hands(&t).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_transcript_yields_no_hands() {
    let t = transcript(vec![]);
    assert!(detect_hands(&t).unwrap().is_empty());
}
