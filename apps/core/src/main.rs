// examnotes - study guides from exam paper text

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use examnotes_core::input::{read_corpus, write_output};
use examnotes_core::{analyze_content, ExamLevel, GuideContext, NotesConfig, Summarizer};

/// Turn text extracted from an exam paper into study notes.
#[derive(Parser, Debug)]
#[command(name = "examnotes", version, about)]
struct Cli {
    /// Text file to analyze, or `-` for stdin
    input: PathBuf,

    /// Subject name; overrides the detected subject
    #[arg(short, long)]
    subject: Option<String>,

    /// Exam level (JCE or MSCE)
    #[arg(short, long)]
    level: Option<ExamLevel>,

    /// Print the analysis record as JSON instead of the guide
    #[arg(long)]
    json: bool,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = NotesConfig::from_env().context("Invalid EXAMNOTES_* configuration")?;

    let corpus = read_corpus(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let rendered = if cli.json {
        let record = analyze_content(&corpus);
        serde_json::to_string_pretty(&record).context("Failed to serialize analysis")?
    } else {
        let context = GuideContext::new(cli.subject, cli.level);
        let summary = Summarizer::new(config)
            .summarize(&corpus, None, &context)
            .await;
        info!(source = ?summary.source, "Study guide ready");
        summary.text
    };

    write_output(cli.output.as_deref(), &rendered).context("Failed to write output")?;
    Ok(())
}
