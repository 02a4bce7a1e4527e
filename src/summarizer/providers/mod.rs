use anyhow::Result;
use async_trait::async_trait;

pub mod openai_api;

pub use openai_api::OpenAiProvider;

/// A text-completion backend: given a fully built prompt, returns the
/// generated text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn complete(&self, prompt: &str) -> Result<String>;
}
