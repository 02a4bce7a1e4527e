//! Service configuration loaded from the environment.
//!
//! Secrets are optional at load time: a missing credential surfaces as a
//! per-request configuration error from the affected endpoint, never as
//! a startup failure.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8787;
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Listen port for the API server.
    pub port: u16,
    /// Completion provider credential.
    pub openai_api_key: Option<String>,
    /// Completion model name.
    pub openai_model: String,
    /// Mail relay credential.
    pub mail_api_key: Option<String>,
    /// Sender address for outbound summary emails.
    pub mail_from: Option<String>,
    /// Directory holding the prebuilt UI bundle. When set, unmatched
    /// routes serve the bundle (co-hosted mode).
    pub ui_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values are
    /// treated as unset.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let get_nonempty = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let port = get_nonempty("RECAP_PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            openai_api_key: get_nonempty("OPENAI_API_KEY"),
            openai_model: get_nonempty("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            mail_api_key: get_nonempty("MAIL_API_KEY"),
            mail_from: get_nonempty("MAIL_FROM"),
            ui_dir: get_nonempty("RECAP_UI_DIR").map(PathBuf::from),
        }
    }
}
