use anyhow::Result;
use async_trait::async_trait;

pub mod resend_api;

pub use resend_api::ResendProvider;

use super::OutboundEmail;

/// An outbound mail relay: accepts one fully rendered message and
/// delivers it, or fails.
#[async_trait]
pub trait MailProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn send(&self, email: &OutboundEmail) -> Result<()>;
}
