//! Email delivery for generated summaries.
//!
//! Renders a fixed HTML template and hands one message, addressed to all
//! recipients jointly, to a mail relay provider. Fire-and-forget: one
//! attempt, no per-recipient result reporting, no bounce handling.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

pub mod providers;

pub use providers::{MailProvider, ResendProvider};

/// Subject line used for all summary emails.
pub const EMAIL_SUBJECT: &str = "Your Meeting Summary";

/// A rendered message ready for relay.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Sends summary emails through a mail relay provider.
pub struct Notifier {
    provider: Arc<dyn MailProvider>,
    from: String,
}

impl Notifier {
    pub fn new(provider: Arc<dyn MailProvider>, from: String) -> Self {
        Self { provider, from }
    }

    /// Send the summary to all recipients as a single message.
    pub async fn send_summary(&self, summary: &str, recipients: &[String]) -> Result<()> {
        let email = OutboundEmail {
            from: self.from.clone(),
            to: recipients.to_vec(),
            subject: EMAIL_SUBJECT.to_string(),
            html: render_email_html(summary),
        };

        info!(
            "Sending summary email to {} recipient(s) via {}",
            email.to.len(),
            self.provider.name()
        );

        self.provider.send(&email).await
    }
}

/// Render the fixed summary email template.
///
/// The summary is HTML-escaped before embedding, so markup in the
/// summary arrives as text rather than live HTML.
pub fn render_email_html(summary: &str) -> String {
    format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\
         <h2>Meeting Summary</h2>\
         <pre style=\"white-space: pre-wrap; font-family: inherit;\">{}</pre>\
         <p style=\"color: #888; font-size: 12px;\">Sent with Recap</p>\
         </div>",
        escape_html(summary)
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
