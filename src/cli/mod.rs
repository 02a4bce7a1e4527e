//! CLI surface: argument definitions and the summarize command handler.

use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::summarizer::{OpenAiProvider, SummaryService};

#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(about = "Summarize meeting transcripts and email the result", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Print version information
    Version,
    /// Summarize a transcript file without starting the server
    Summarize(SummarizeCliArgs),
}

#[derive(ClapArgs, Debug)]
pub struct SummarizeCliArgs {
    /// Path to a plain-text transcript file
    pub file: PathBuf,

    /// Free-text instruction controlling the summary style
    #[arg(short, long, default_value = "Summarize the key points and action items")]
    pub instruction: String,

    /// Write the summary to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the summarize CLI command.
///
/// Reads the transcript file and runs it through the same summarizer
/// core the HTTP API uses.
pub async fn handle_summarize_command(args: SummarizeCliArgs) -> Result<()> {
    if !args.file.exists() {
        bail!("File not found: {}", args.file.display());
    }

    let transcript =
        std::fs::read_to_string(&args.file).context("Failed to read transcript file")?;

    if transcript.trim().is_empty() {
        bail!("Transcript file is empty: {}", args.file.display());
    }

    let config = Config::from_env();
    let api_key = config.openai_api_key.context("OPENAI_API_KEY is not set")?;

    let provider = OpenAiProvider::new(api_key, config.openai_model.clone(), None);
    let service = SummaryService::new(Arc::new(provider));

    let summary = service.summarize(&transcript, &args.instruction).await?;

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &summary).context("Failed to write output file")?;
        eprintln!("Summary saved to: {}", output_path.display());
    } else {
        println!("{}", summary);
    }

    Ok(())
}
