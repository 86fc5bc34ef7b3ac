//! Axum route handlers for the posting log and campaign tracker.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tracking::models::{CampaignSnapshot, PostingLogEntry};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LogPostingRequest {
    pub site: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Deserialize)]
pub struct AddSnapshotRequest {
    pub site: String,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub leads: u64,
    #[serde(default)]
    pub sales: u64,
    #[serde(default)]
    pub revenue: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/history
///
/// Logs one manual posting. The site name is a free string; it is not
/// checked against the directory.
pub async fn handle_log_posting(
    State(state): State<AppState>,
    Json(request): Json<LogPostingRequest>,
) -> Result<Json<PostingLogEntry>, AppError> {
    if request.site.trim().is_empty() {
        return Err(AppError::Validation("Select a site first.".to_string()));
    }

    let entry = PostingLogEntry {
        time: Utc::now(),
        site: request.site,
        note: request.note,
        link: request.link,
    };

    let mut session = state.session.write().await;
    session.history.push(entry.clone());
    info!(
        "Logged posting to '{}' ({} total)",
        entry.site,
        session.history.len()
    );

    Ok(Json(entry))
}

/// GET /api/v1/history
pub async fn handle_list_history(State(state): State<AppState>) -> Json<Vec<PostingLogEntry>> {
    Json(state.session.read().await.history.clone())
}

/// POST /api/v1/campaign
///
/// Appends a metrics snapshot. EPC and conversion rate are derived here;
/// client-supplied values for them are ignored by construction.
pub async fn handle_add_snapshot(
    State(state): State<AppState>,
    Json(request): Json<AddSnapshotRequest>,
) -> Result<Json<CampaignSnapshot>, AppError> {
    if request.site.trim().is_empty() {
        return Err(AppError::Validation("Select a site first.".to_string()));
    }

    let snapshot = CampaignSnapshot::derive(
        Utc::now(),
        request.site,
        request.impressions,
        request.clicks,
        request.leads,
        request.sales,
        request.revenue,
    );

    let mut session = state.session.write().await;
    session.campaign.push(snapshot.clone());
    info!(
        "Campaign snapshot added for '{}' ({} total)",
        snapshot.site,
        session.campaign.len()
    );

    Ok(Json(snapshot))
}

/// GET /api/v1/campaign
pub async fn handle_list_campaign(State(state): State<AppState>) -> Json<Vec<CampaignSnapshot>> {
    Json(state.session.read().await.campaign.clone())
}
