//! Axum route handlers for the site directory.

use axum::{
    extract::{Multipart, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::sites::models::{filter_sites, SiteEntry};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SiteFilterQuery {
    pub region: Option<String>,
    pub category: Option<String>,
    /// Case-insensitive substring match on the site name.
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddSiteRequest {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_needs_account")]
    pub needs_account: bool,
    pub url: String,
    #[serde(default)]
    pub notes: String,
}

fn default_needs_account() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct SiteListResponse {
    pub sites: Vec<SiteEntry>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub imported: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/sites
pub async fn handle_list_sites(
    State(state): State<AppState>,
    Query(params): Query<SiteFilterQuery>,
) -> Json<SiteListResponse> {
    let session = state.session.read().await;
    let sites = filter_sites(
        &session.sites,
        params.region.as_deref(),
        params.category.as_deref(),
        params.q.as_deref(),
    );
    let total = session.sites.len();
    Json(SiteListResponse { sites, total })
}

/// POST /api/v1/sites
///
/// Adds one site for this session. Name and URL are required; an empty
/// region defaults to "Global". The name is the directory key, so
/// duplicates are rejected.
pub async fn handle_add_site(
    State(state): State<AppState>,
    Json(request): Json<AddSiteRequest>,
) -> Result<Json<SiteEntry>, AppError> {
    let name = request.name.trim();
    let url = request.url.trim();
    if name.is_empty() || url.is_empty() {
        return Err(AppError::Validation("Name and URL required.".to_string()));
    }

    let entry = SiteEntry {
        name: name.to_string(),
        region: if request.region.trim().is_empty() {
            "Global".to_string()
        } else {
            request.region.trim().to_string()
        },
        category: request.category,
        needs_account: request.needs_account,
        url: url.to_string(),
        notes: request.notes,
    };

    let mut session = state.session.write().await;
    if session.sites.iter().any(|s| s.name == entry.name) {
        return Err(AppError::Validation(format!(
            "Site '{}' already exists.",
            entry.name
        )));
    }
    session.sites.push(entry.clone());
    info!("Added site '{}' ({} total)", entry.name, session.sites.len());

    Ok(Json(entry))
}

/// POST /api/v1/sites/import
///
/// Bulk import: a multipart upload whose first file field is a JSON array of
/// site entries. Replaces the whole directory on success; on malformed JSON
/// the error message carries the parse error text and the prior directory is
/// retained.
pub async fn handle_import_sites(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?
        .ok_or_else(|| AppError::Validation("No file uploaded.".to_string()))?;

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?;

    let sites: Vec<SiteEntry> = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::Validation(format!("Invalid JSON: {e}")))?;

    let imported = sites.len();
    state.session.write().await.sites = sites;
    info!("Imported {imported} sites (directory replaced)");

    Ok(Json(ImportResponse { imported }))
}

/// GET /api/v1/sites/export
///
/// Downloads the directory as `sites.json`, pretty-printed with 2-space
/// indent. Importing the result reproduces the directory exactly.
pub async fn handle_export_sites(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.session.read().await;
    let body = serde_json::to_string_pretty(&session.sites)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize sites: {e}")))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/json; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sites.json\"".to_string(),
            ),
        ],
        body,
    ))
}
