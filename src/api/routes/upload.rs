//! Transcript file upload endpoint.

use crate::api::error::{ApiError, ApiResult};
use axum::{
    extract::{DefaultBodyLimit, Multipart},
    response::Json,
    routing::post,
    Router,
};
use serde_json::{json, Value};
use tracing::{info, warn};

/// Hard ceiling on uploaded transcript files, enforced as the route's
/// body limit, independent of the JSON body cap.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// MIME types accepted for transcript uploads. Browsers sometimes label
/// `.txt` files as generic binary, so the octet-stream type is allowed.
const ACCEPTED_MIME_TYPES: &[&str] = &["text/plain", "application/octet-stream"];

/// Create the upload router with its own transport-level size cap.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api/upload-transcript", post(upload_transcript))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// POST /api/upload-transcript - Decode an uploaded transcript file.
///
/// Accepts one multipart file part named `transcript`, declared as plain
/// text, and returns its UTF-8 decoded contents unmodified. Nothing is
/// persisted.
async fn upload_transcript(mut multipart: Multipart) -> ApiResult<Json<Value>> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Malformed multipart upload: {}", e);
        ApiError::validation("No file uploaded")
    })? {
        if field.name() != Some("transcript") {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        if !content_type.as_deref().is_some_and(is_accepted_mime) {
            return Err(ApiError::validation("Only .txt files are allowed"));
        }

        let bytes = field.bytes().await.map_err(|e| {
            warn!("Failed to read uploaded file: {}", e);
            ApiError::validation("Failed to read uploaded file")
        })?;

        let transcript = String::from_utf8_lossy(&bytes).into_owned();
        info!("Transcript uploaded ({} bytes)", bytes.len());

        return Ok(Json(json!({ "transcript": transcript })));
    }

    Err(ApiError::validation("No file uploaded"))
}

/// Check the declared MIME type, ignoring parameters such as charset.
fn is_accepted_mime(content_type: &str) -> bool {
    let main = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    ACCEPTED_MIME_TYPES.contains(&main.as_str())
}
