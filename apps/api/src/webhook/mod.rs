//! Webhook dispatch — the single outbound network call in the service.
//!
//! The session carries one webhook URL (Zapier/Make/IFTTT style). A test
//! dispatch POSTs the last saved ad as JSON. Failures are reported to the
//! caller and never retried; nothing in the session is mutated by a dispatch.

use std::time::Duration;

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::session::SavedAd;
use crate::state::AppState;

/// `source` field of every payload. Fixed identifier consumed by downstream
/// automation flows — do not change without migrating those flows.
pub const SOURCE_NAME: &str = "Illuminati Ad Poster";

/// Outbound dispatch timeout. Blocking from the caller's point of view;
/// a slow receiver fails the request rather than hanging the session.
const DISPATCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the shared HTTP client used for all webhook dispatches.
pub fn build_client() -> Client {
    Client::builder()
        .timeout(DISPATCH_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client")
}

/// Builds the webhook payload: the last saved ad (or an empty object) plus
/// a fresh ISO-8601 UTC timestamp.
pub fn build_payload(ad_saved: Option<&SavedAd>) -> Value {
    let ad = ad_saved
        .and_then(|ad| serde_json::to_value(ad).ok())
        .unwrap_or_else(|| json!({}));

    json!({
        "source": SOURCE_NAME,
        "ad": ad,
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

/// Sends a payload to `url`, returning the upstream HTTP status code.
/// No retry, no signature header. Errors carry the underlying text.
pub async fn dispatch(client: &Client, url: &str, payload: &Value) -> Result<u16, AppError> {
    let response = client
        .post(url)
        .json(payload)
        .send()
        .await
        .map_err(|e| AppError::Webhook(format!("Webhook error: {e}")))?;

    Ok(response.status().as_u16())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookUrl {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct WebhookTestResponse {
    pub status: u16,
}

/// GET /api/v1/settings/webhook
pub async fn handle_get_webhook(State(state): State<AppState>) -> Json<WebhookUrl> {
    let url = state.session.read().await.webhook_url.clone();
    Json(WebhookUrl { url })
}

/// PUT /api/v1/settings/webhook
pub async fn handle_set_webhook(
    State(state): State<AppState>,
    Json(req): Json<WebhookUrl>,
) -> Json<WebhookUrl> {
    let url = req.url.trim().to_string();
    state.session.write().await.webhook_url = url.clone();
    info!("Webhook URL updated ({} chars)", url.len());
    Json(WebhookUrl { url })
}

/// GET /api/v1/settings/webhook/payload
///
/// Previews the payload a test dispatch would send, without sending it.
pub async fn handle_payload_preview(State(state): State<AppState>) -> Json<Value> {
    let session = state.session.read().await;
    Json(build_payload(session.ad_saved.as_ref()))
}

/// POST /api/v1/settings/webhook/test
pub async fn handle_send_test(
    State(state): State<AppState>,
) -> Result<Json<WebhookTestResponse>, AppError> {
    let (url, payload) = {
        let session = state.session.read().await;
        if session.webhook_url.trim().is_empty() {
            return Err(AppError::Validation(
                "Add a webhook URL first.".to_string(),
            ));
        }
        (
            session.webhook_url.clone(),
            build_payload(session.ad_saved.as_ref()),
        )
    };

    let status = dispatch(&state.http, &url, &payload).await?;
    info!("Test webhook sent, upstream status {status}");

    Ok(Json(WebhookTestResponse { status }))
}
