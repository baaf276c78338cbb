use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use talknotes_core::analytics::infrastructure::textrank_summarizer::TextRankSummarizer;
use talknotes_core::analytics::infrastructure::vader_analyzer::VaderAnalyzer;
use talknotes_core::audio::infrastructure::wav_clip_reader::WavClipReader;
use talknotes_core::pipeline::analyze_transcript_use_case::{
    AnalyzeTranscriptUseCase, TranscriptReport,
};
use talknotes_core::pipeline::transcribe_clip_use_case::TranscribeClipUseCase;
use talknotes_core::recognition::domain::language::Language;
use talknotes_core::recognition::infrastructure::model_cache::ModelCache;
use talknotes_core::recognition::infrastructure::vosk_recognizer::VoskRecognizerFactory;
use talknotes_core::session::export;
use talknotes_core::session::history::SessionHistory;
use talknotes_core::shared::constants::{MAX_SUMMARY_SENTENCES, MIN_SUMMARY_SENTENCES};

/// Offline speech transcription with word counts, sentiment, and summaries.
#[derive(Parser)]
#[command(name = "talknotes")]
struct Cli {
    /// WAV clips to transcribe, processed in order within one session.
    clips: Vec<PathBuf>,

    /// Transcription language: en, es, or fr (unrecognized tags fall back to en).
    #[arg(long, default_value = "en")]
    language: String,

    /// Sentences in the extractive summary (1-5).
    #[arg(long, default_value = "3")]
    summary_sentences: usize,

    /// Write each transcript as a .txt file into this directory.
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Directory holding pre-fetched model bundles (checked before the cache).
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// Emit each report as JSON instead of formatted text.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;
    let language = Language::from_tag(&cli.language);

    let cache = ModelCache::new(cli.model_dir.clone())
        .with_download_progress(Arc::new(download_progress));
    let mut transcriber = TranscribeClipUseCase::new(
        Box::new(WavClipReader::new()),
        Box::new(VoskRecognizerFactory::new(cache)),
    );
    let analyzer = AnalyzeTranscriptUseCase::new(
        Box::new(VaderAnalyzer::new()),
        Box::new(TextRankSummarizer::new()),
    );
    let mut history = SessionHistory::new();

    if cli.clips.is_empty() {
        // Mirrors the no-upload case: report the message, don't fail
        let outcome = transcriber.run(None, language);
        let report = analyzer.run(&outcome, cli.summary_sentences);
        print_report(&cli, "(no clip)", &report)?;
        return Ok(());
    }

    for clip in &cli.clips {
        let outcome = transcriber.run(Some(clip), language);
        clear_progress_line();
        let report = analyzer.run(&outcome, cli.summary_sentences);
        print_report(&cli, &clip.display().to_string(), &report)?;

        if let Some(transcript) = &report.transcript {
            history.record(transcript);
            if let Some(dir) = &cli.export_dir {
                let path = export::write_transcript(dir, transcript)?;
                println!("Exported: {}", path.display());
            }
        }
    }

    if !cli.json {
        print_history(&history);
    }
    log::info!("Processed {} clip(s)", cli.clips.len());
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !(MIN_SUMMARY_SENTENCES..=MAX_SUMMARY_SENTENCES).contains(&cli.summary_sentences) {
        return Err(format!(
            "Summary sentences must be between {MIN_SUMMARY_SENTENCES} and \
             {MAX_SUMMARY_SENTENCES}, got {}",
            cli.summary_sentences
        )
        .into());
    }
    for clip in &cli.clips {
        if !clip.exists() {
            return Err(format!("Clip not found: {}", clip.display()).into());
        }
    }
    Ok(())
}

fn print_report(
    cli: &Cli,
    clip_name: &str,
    report: &TranscriptReport,
) -> Result<(), Box<dyn std::error::Error>> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("=== {clip_name} ===");
    match (&report.transcript, &report.notice) {
        (Some(text), _) if text.trim().is_empty() => {
            println!("Transcription: (no speech recognized)")
        }
        (Some(text), _) => println!("Transcription: {text}"),
        (None, Some(notice)) => println!("Transcription: {notice}"),
        (None, None) => {}
    }
    println!("Quick stats: {}", report.stats);

    use talknotes_core::analytics::domain::sentiment::SentimentReading;
    match report.sentiment {
        SentimentReading::Scored(score) => println!(
            "Sentiment: {} (polarity {:.2}, subjectivity {:.2})",
            score.label, score.polarity, score.subjectivity
        ),
        SentimentReading::NotApplicable => println!("Sentiment: n/a"),
    }

    match &report.summary {
        Some(summary) => {
            println!("Summary:");
            for line in summary.lines() {
                println!("  {line}");
            }
        }
        None => println!("Summary: n/a"),
    }
    println!();
    Ok(())
}

fn print_history(history: &SessionHistory) {
    if history.is_empty() {
        return;
    }
    println!("Recent transcripts (newest first):");
    for (i, entry) in history.entries().enumerate() {
        println!("  {}. {}", i + 1, preview(entry, 60));
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}

fn clear_progress_line() {
    // Overwrite whatever download_progress last wrote on this line
    eprint!("\r{:40}\r", "");
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading speech model... {pct}%");
    } else {
        eprint!("\rDownloading speech model... {downloaded} bytes");
    }
}
