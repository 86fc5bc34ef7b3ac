pub mod admin;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{copy, export, sites, tracking, webhook};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Admin
        .route("/api/v1/admin/login", post(admin::handle_login))
        // Compose: scoring, styles, variants
        .route("/api/v1/copy/score", post(copy::handlers::handle_score))
        .route("/api/v1/copy/styles", get(copy::handlers::handle_list_styles))
        .route(
            "/api/v1/copy/variants",
            get(copy::handlers::handle_list_variants).post(copy::handlers::handle_generate),
        )
        // Site directory
        .route(
            "/api/v1/sites",
            get(sites::handlers::handle_list_sites).post(sites::handlers::handle_add_site),
        )
        .route("/api/v1/sites/import", post(sites::handlers::handle_import_sites))
        .route("/api/v1/sites/export", get(sites::handlers::handle_export_sites))
        // Posting log
        .route(
            "/api/v1/history",
            get(tracking::handlers::handle_list_history).post(tracking::handlers::handle_log_posting),
        )
        .route(
            "/api/v1/history/export",
            get(export::handlers::handle_export_history),
        )
        // Campaign tracker
        .route(
            "/api/v1/campaign",
            get(tracking::handlers::handle_list_campaign)
                .post(tracking::handlers::handle_add_snapshot),
        )
        // Variant downloads
        .route(
            "/api/v1/exports/variants/:format",
            get(export::handlers::handle_export_variants),
        )
        // Webhook settings + test dispatch
        .route(
            "/api/v1/settings/webhook",
            get(webhook::handle_get_webhook).put(webhook::handle_set_webhook),
        )
        .route(
            "/api/v1/settings/webhook/payload",
            get(webhook::handle_payload_preview),
        )
        .route(
            "/api/v1/settings/webhook/test",
            post(webhook::handle_send_test),
        )
        .with_state(state)
}
