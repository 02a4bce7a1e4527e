//! REST API server for Recap.
//!
//! Provides HTTP endpoints for:
//! - Summary generation (POST /api/generate-summary)
//! - Summary email delivery (POST /api/send-email)
//! - Transcript file upload (POST /api/upload-transcript)
//! - Liveness checks (GET /api/health)
//!
//! In co-hosted mode the router also serves the prebuilt single-page UI
//! for any path that does not match an API route.

pub mod error;
pub mod routes;

use crate::config::Config;
use crate::mailer::Notifier;
use crate::summarizer::SummaryService;
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use error::ApiError;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
};
use tracing::{error, info};

/// Cap on JSON request bodies, independent of the upload ceiling.
pub const MAX_JSON_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Provider services shared by all request handlers.
///
/// A `None` service means the matching credential is not configured;
/// the affected handler reports a configuration error per request.
#[derive(Clone, Default)]
pub struct AppState {
    pub summarizer: Option<Arc<SummaryService>>,
    pub notifier: Option<Arc<Notifier>>,
}

pub struct ApiServer {
    port: u16,
    state: AppState,
    ui_dir: Option<PathBuf>,
}

impl ApiServer {
    pub fn new(config: &Config, state: AppState) -> Self {
        Self {
            port: config.port,
            state,
            ui_dir: config.ui_dir.clone(),
        }
    }

    /// Build the application router. Separate from `start` so tests can
    /// drive the router directly with injected fakes.
    pub fn router(state: AppState, ui_dir: Option<&Path>) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let api = Router::new()
            .route("/api/health", get(health))
            .route(
                "/api/generate-summary",
                post(routes::summary::generate_summary),
            )
            .route("/api/send-email", post(routes::email::send_email))
            .layer(DefaultBodyLimit::max(MAX_JSON_BODY_BYTES))
            .merge(routes::upload::router())
            .with_state(state);

        let app = match ui_dir {
            // Co-hosted mode: unmatched paths serve the UI bundle, with
            // index.html as the client-side routing fallback.
            Some(dir) => api.fallback_service(
                ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
            ),
            None => api.fallback(fallback_not_found),
        };

        app.layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(cors),
        )
    }

    pub async fn start(self) -> Result<()> {
        let app = Self::router(self.state, self.ui_dir.as_deref());

        let listener = tokio::net::TcpListener::bind(&format!("0.0.0.0:{}", self.port)).await?;

        info!("API server listening on http://0.0.0.0:{}", self.port);
        info!("Endpoints:");
        info!("  GET  /api/health            - Liveness check");
        info!("  POST /api/generate-summary  - Generate a summary");
        info!("  POST /api/send-email        - Email a summary");
        info!("  POST /api/upload-transcript - Upload a transcript file");
        if self.ui_dir.is_some() {
            info!("  *                           - Single-page UI");
        }

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// GET /api/health - Liveness probe, succeeds regardless of
/// configuration state.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Recap API is running",
    }))
}

async fn fallback_not_found() -> ApiError {
    ApiError::NotFound
}

/// Uniform response for any panic escaping a request handler. The fault
/// is logged; the client sees only a generic message.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };

    error!("Unhandled fault in request handler: {}", detail);

    ApiError::Internal.into_response()
}
