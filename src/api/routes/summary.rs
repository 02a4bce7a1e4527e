//! Summary generation endpoint.

use crate::api::error::{ApiError, ApiResult};
use crate::api::AppState;
use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use tracing::{error, info};

use super::non_empty_str;

/// POST /api/generate-summary - Generate a summary from a transcript.
///
/// # Request Body
/// JSON with fields:
/// - `transcript`: string - Raw meeting transcript text
/// - `instruction`: string - Free-text directive for the summary style
///
/// # Response
/// Returns JSON with the generated `summary`, verbatim from the
/// completion provider.
pub async fn generate_summary(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let transcript = non_empty_str(&body, "transcript");
    let instruction = non_empty_str(&body, "instruction");

    let (Some(transcript), Some(instruction)) = (transcript, instruction) else {
        return Err(ApiError::validation(
            "Transcript and instruction are required",
        ));
    };

    let summarizer = state.summarizer.as_ref().ok_or_else(|| {
        error!("Summary requested but no completion credential is configured");
        ApiError::Configuration
    })?;

    info!(
        "Summary generation requested ({} transcript chars)",
        transcript.len()
    );

    let summary = summarizer
        .summarize(transcript, instruction)
        .await
        .map_err(|e| {
            error!("Summary generation failed: {:#}", e);
            ApiError::Upstream("Failed to generate summary. Please try again.")
        })?;

    Ok(Json(json!({ "summary": summary })))
}
