// src/report.rs
//! Report renderer: ranked candidates → deterministic Markdown artifact.
//!
//! `render_report` builds a structured [`Report`] for programmatic reuse;
//! [`Report::to_markdown`] serializes it. Writing the result anywhere is the
//! caller's responsibility.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::detector::Candidate;
use crate::transcript::Transcript;

/// One ranked entry of the report, with the candidate's text trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// 1-based rank.
    pub rank: usize,
    /// Seconds from the start of the audio.
    pub timestamp: f64,
    pub confidence: f32,
    pub text: String,
}

/// Structured report: header + summary + ranked entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub source: String,
    pub duration_seconds: f64,
    pub language: String,
    pub processed_at: DateTime<Utc>,
    pub total_hands: usize,
    /// Mean candidate confidence; 0.0 for an empty candidate list.
    pub average_confidence: f32,
    pub hands: Vec<ReportEntry>,
}

/// Build a [`Report`] from a transcript and its ranked candidates.
/// Deterministic and pure; `candidates` is expected in rank order.
pub fn render_report(transcript: &Transcript, candidates: &[Candidate]) -> Report {
    let average_confidence = if candidates.is_empty() {
        0.0
    } else {
        candidates.iter().map(|c| c.confidence).sum::<f32>() / candidates.len() as f32
    };

    let hands = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| ReportEntry {
            rank: i + 1,
            timestamp: c.timestamp,
            confidence: c.confidence,
            text: c.text.trim().to_string(),
        })
        .collect();

    Report {
        source: transcript.source_id.clone(),
        duration_seconds: transcript.duration_seconds,
        language: transcript.language.clone(),
        processed_at: transcript.processed_at,
        total_hands: candidates.len(),
        average_confidence,
        hands,
    }
}

impl Report {
    /// Serialize to the Markdown artifact. Fixed order: header, summary,
    /// then one section per hand in rank order. The per-hand section is
    /// omitted entirely when no hands were detected.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "# Poker Hands Analysis");
        let _ = writeln!(out);
        let _ = writeln!(out, "**Source:** {}", self.source);
        let _ = writeln!(out, "**Duration:** {:.1} seconds", self.duration_seconds);
        let _ = writeln!(out, "**Language:** {}", self.language);
        let _ = writeln!(
            out,
            "**Processed:** {}",
            self.processed_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "## Summary");
        let _ = writeln!(out);
        let _ = writeln!(out, "- **Total hands detected:** {}", self.total_hands);
        let _ = writeln!(out, "- **Average confidence:** {:.2}", self.average_confidence);

        if !self.hands.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "## Detected Hands");
            for hand in &self.hands {
                let _ = writeln!(out);
                let _ = writeln!(out, "### Hand {}", hand.rank);
                let _ = writeln!(out, "**Timestamp:** {}", format_timestamp(hand.timestamp));
                let _ = writeln!(out, "**Confidence:** {:.2}", hand.confidence);
                let _ = writeln!(out, "**Text:** {}", hand.text);
                let _ = writeln!(out);
                let _ = writeln!(out, "---");
            }
        }

        out
    }
}

/// `minutes:seconds`, seconds zero-padded to 2 digits. `125.7` → `"2:05"`.
pub fn format_timestamp(seconds: f64) -> String {
    let minutes = (seconds / 60.0) as u64;
    let secs = (seconds % 60.0) as u64;
    format!("{minutes}:{secs:02}")
}
