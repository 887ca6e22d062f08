// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod detector;
pub mod patterns;
pub mod report;
pub mod scoring;
pub mod transcript;

// ---- Re-exports for stable public API ----
// The two engine entry points plus the data model they exchange.
pub use crate::detector::{detect_hands, Candidate};
pub use crate::report::{render_report, Report, ReportEntry};
pub use crate::scoring::SignalScores;
pub use crate::transcript::{Transcript, TranscriptSegment};
