use crate::api::{ApiServer, AppState};
use crate::config::Config;
use crate::mailer::{Notifier, ResendProvider};
use crate::summarizer::{OpenAiProvider, SummaryService};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn run_service() -> Result<()> {
    info!("Starting Recap service");

    let config = Config::from_env();
    let state = build_state(&config);

    if state.summarizer.is_none() {
        warn!("Completion provider credential not configured; summary requests will fail");
    }
    if state.notifier.is_none() {
        warn!("Mail relay credentials not configured; email requests will fail");
    }
    if config.ui_dir.is_some() {
        info!("Co-hosted mode: serving UI bundle from {:?}", config.ui_dir);
    }

    let api_server = ApiServer::new(&config, state);

    info!("Recap is ready!");

    api_server.start().await
}

/// Construct provider clients once and hand them to the request
/// handlers. Missing credentials leave the matching service unset; the
/// affected endpoint reports a configuration error per request.
pub fn build_state(config: &Config) -> AppState {
    let summarizer = config.openai_api_key.clone().map(|api_key| {
        let provider = OpenAiProvider::new(api_key, config.openai_model.clone(), None);
        Arc::new(SummaryService::new(Arc::new(provider)))
    });

    let notifier = match (config.mail_api_key.clone(), config.mail_from.clone()) {
        (Some(api_key), Some(from)) => {
            let provider = ResendProvider::new(api_key, None);
            Some(Arc::new(Notifier::new(Arc::new(provider), from)))
        }
        _ => None,
    };

    AppState {
        summarizer,
        notifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_empty_without_credentials() {
        let state = build_state(&Config::default());
        assert!(state.summarizer.is_none());
        assert!(state.notifier.is_none());
    }

    #[test]
    fn test_state_with_full_credentials() {
        let config = Config {
            openai_api_key: Some("sk-test".to_string()),
            mail_api_key: Some("re-test".to_string()),
            mail_from: Some("summaries@example.com".to_string()),
            ..Config::default()
        };

        let state = build_state(&config);
        assert!(state.summarizer.is_some());
        assert!(state.notifier.is_some());
    }

    #[test]
    fn test_notifier_requires_both_key_and_sender() {
        let config = Config {
            mail_api_key: Some("re-test".to_string()),
            ..Config::default()
        };

        let state = build_state(&config);
        assert!(state.notifier.is_none());
    }
}
