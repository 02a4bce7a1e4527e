//! Summary generation from meeting transcripts.
//!
//! Builds a single prompt from the transcript and instruction and runs
//! it through a completion provider exactly once. No caching, no retry:
//! identical inputs issue a fresh provider call every time.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

pub mod providers;

pub use providers::{CompletionProvider, OpenAiProvider};

/// Generates summaries by delegating to a completion provider.
pub struct SummaryService {
    provider: Arc<dyn CompletionProvider>,
}

impl SummaryService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Generate a summary for the given transcript and instruction.
    ///
    /// The provider's response text is returned verbatim.
    pub async fn summarize(&self, transcript: &str, instruction: &str) -> Result<String> {
        let prompt = build_prompt(transcript, instruction);

        info!(
            "Generating summary via {} ({} transcript chars)",
            self.provider.name(),
            transcript.len()
        );

        self.provider.complete(&prompt).await
    }
}

/// Compose the prompt sent to the completion provider.
///
/// The transcript and instruction are embedded as labeled sections,
/// closed by a fixed directive.
pub fn build_prompt(transcript: &str, instruction: &str) -> String {
    format!(
        "You are an assistant that summarizes meeting transcripts.\n\n\
         Instruction: {instruction}\n\n\
         Transcript:\n{transcript}\n\n\
         Produce a clear, well-structured summary following the instruction."
    )
}
