//! Summary email endpoint.

use crate::api::error::{ApiError, ApiResult};
use crate::api::AppState;
use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use tracing::{error, info};

use super::non_empty_str;

/// POST /api/send-email - Email a summary to a list of recipients.
///
/// # Request Body
/// JSON with fields:
/// - `summary`: string - The summary text, as edited by the user
/// - `recipients`: array of string - Destination addresses
///
/// # Response
/// Returns `{success: true, message}` once the relay accepts the
/// message. All recipients are addressed on one outbound message.
pub async fn send_email(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let summary = non_empty_str(&body, "summary");
    let recipients = recipient_list(&body);

    let (Some(summary), Some(recipients)) = (summary, recipients) else {
        return Err(ApiError::validation(
            "Summary and at least one recipient email are required",
        ));
    };

    let notifier = state.notifier.as_ref().ok_or_else(|| {
        error!("Email requested but mail relay credentials are not configured");
        ApiError::Configuration
    })?;

    info!("Summary email requested for {} recipient(s)", recipients.len());

    notifier.send_summary(summary, &recipients).await.map_err(|e| {
        error!("Summary email failed: {:#}", e);
        ApiError::Upstream("Failed to send email. Please check your email configuration.")
    })?;

    Ok(Json(json!({
        "success": true,
        "message": "Email sent successfully",
    })))
}

/// Extract the recipient list: a JSON array with at least one non-empty
/// string entry. Anything else is a validation failure.
fn recipient_list(body: &Value) -> Option<Vec<String>> {
    let entries = body.get("recipients")?.as_array()?;
    let recipients: Vec<String> = entries
        .iter()
        .filter_map(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if recipients.is_empty() {
        None
    } else {
        Some(recipients)
    }
}
