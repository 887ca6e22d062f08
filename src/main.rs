//! Poker Hand Analyzer — Binary Entrypoint
//! Loads a transcript JSON artifact, runs hand detection, and writes the
//! Markdown report. Transcription itself happens upstream; this binary only
//! consumes its output.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use poker_hand_analyzer::{detect_hands, render_report, Transcript};

#[derive(Parser, Debug)]
#[command(
    name = "poker-hand-analyzer",
    version,
    about = "Detect poker hand discussions in a timestamped podcast transcript"
)]
struct Args {
    /// Path to a transcript JSON file produced by the transcription step
    transcript: PathBuf,

    /// Directory for the generated report (defaults to the transcript's directory)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Also write the ranked hand list as JSON next to the report
    #[arg(long)]
    json: bool,
}

/// Compact logs, `RUST_LOG` overridable, `info` by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.transcript)
        .with_context(|| format!("reading transcript {}", args.transcript.display()))?;
    let transcript: Transcript = serde_json::from_str(&raw)
        .with_context(|| format!("parsing transcript {}", args.transcript.display()))?;
    info!(
        source = %transcript.source_id,
        segments = transcript.segments.len(),
        "transcript loaded"
    );

    let hands = detect_hands(&transcript)?;
    let report = render_report(&transcript, &hands);

    let out_dir = match args.output_dir {
        Some(dir) => dir,
        None => args
            .transcript
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let stem = args
        .transcript
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("transcript");

    let report_path = out_dir.join(format!("{stem}_poker_hands.md"));
    fs::write(&report_path, report.to_markdown())
        .with_context(|| format!("writing report {}", report_path.display()))?;

    if args.json {
        let json_path = out_dir.join(format!("{stem}_hands.json"));
        fs::write(&json_path, serde_json::to_string_pretty(&hands)?)
            .with_context(|| format!("writing hand list {}", json_path.display()))?;
        info!(path = %json_path.display(), "hand list written");
    }

    info!(
        hands = hands.len(),
        report = %report_path.display(),
        "analysis complete"
    );
    Ok(())
}
