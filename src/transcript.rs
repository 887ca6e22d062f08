// src/transcript.rs
//! Transcript data model: what the transcription collaborator hands us.
//!
//! The engine only reads these structs. Serde aliases accept the upstream
//! JSON artifact keys (`file`, `duration`, `text`) so transcripts written by
//! the transcription step deserialize without a mapping layer.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped span of transcribed speech.
///
/// Ordered by `start` within a transcript (insertion order is chronological
/// order). Upstream segment metadata (token ids, temperatures, ...) is
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    /// Seconds from the start of the audio.
    pub start: f64,
    pub end: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// A complete transcription result for one audio source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Identifier of the transcribed source (the original audio path or URL).
    #[serde(alias = "file")]
    pub source_id: String,
    #[serde(alias = "duration")]
    pub duration_seconds: f64,
    pub language: String,
    /// Concatenated text of the whole transcript.
    #[serde(alias = "text")]
    pub full_text: String,
    pub segments: Vec<TranscriptSegment>,
    pub processed_at: DateTime<Utc>,
}

impl Transcript {
    /// Fail fast on malformed numeric fields.
    ///
    /// Type-level problems (missing fields, wrong JSON types) are already
    /// rejected by serde at the deserialization boundary; what remains here
    /// are values that parse as floats but are not meaningful timestamps.
    /// Well-formed transcripts never error: empty segment lists, empty text,
    /// and overlapping segments are all valid inputs.
    pub fn validate(&self) -> Result<()> {
        if !self.duration_seconds.is_finite() {
            bail!(
                "transcript `duration_seconds` is not a finite number (got {})",
                self.duration_seconds
            );
        }
        for (i, seg) in self.segments.iter().enumerate() {
            if !seg.start.is_finite() {
                bail!(
                    "segment {i}: `start` is not a finite number (got {})",
                    seg.start
                );
            }
            if !seg.end.is_finite() {
                bail!("segment {i}: `end` is not a finite number (got {})", seg.end);
            }
        }
        Ok(())
    }
}
