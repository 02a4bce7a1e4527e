use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::MailProvider;
use crate::mailer::OutboundEmail;

const DEFAULT_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, Serialize)]
struct SendPayload<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
    name: Option<String>,
}

pub struct ResendProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl ResendProvider {
    pub fn new(api_key: String, endpoint: Option<String>) -> Self {
        let client = reqwest::Client::new();
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        info!("Initialized Resend provider with endpoint: {}", endpoint);

        Self {
            client,
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl MailProvider for ResendProvider {
    fn name(&self) -> &'static str {
        "Resend API"
    }

    async fn send(&self, email: &OutboundEmail) -> Result<()> {
        let body = SendPayload {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html: &email.html,
        };

        debug!("Sending mail relay request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("Failed to send request to mail relay")?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            error!(
                "Mail relay request failed with status {}: {}",
                status, response_text
            );

            if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&response_text) {
                return Err(anyhow::anyhow!(
                    "Mail relay error: {} (name: {:?})",
                    error_response.message,
                    error_response.name
                ));
            }

            return Err(anyhow::anyhow!(
                "Mail relay request failed with status {}: {}",
                status,
                response_text
            ));
        }

        let accepted: SendResponse =
            serde_json::from_str(&response_text).context("Failed to parse mail relay response")?;

        info!("Mail relay accepted message: {}", accepted.id);

        Ok(())
    }
}
