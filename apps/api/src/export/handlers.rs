//! Axum route handlers for file downloads.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::errors::AppError;
use crate::export::formats::{export_variants, history_csv, ExportFormat};
use crate::state::AppState;

/// GET /api/v1/exports/variants/:format
///
/// Downloads the session's variants as `classified_variants.{csv,md,html}`.
/// An empty variant list is not an error — the document is just content-free.
pub async fn handle_export_variants(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let format: ExportFormat = format
        .parse()
        .map_err(|e| AppError::Validation(format!("{e}")))?;

    let variants = state.session.read().await.variants.clone();
    let body = export_variants(&variants, format);

    Ok(download_response(
        format.content_type(),
        format.file_name(),
        body,
    ))
}

/// GET /api/v1/history/export
///
/// Downloads the posting history as `posting_history.csv`.
pub async fn handle_export_history(State(state): State<AppState>) -> impl IntoResponse {
    let history = state.session.read().await.history.clone();
    download_response(
        "text/csv; charset=utf-8",
        "posting_history.csv",
        history_csv(&history),
    )
}

/// Wraps bytes as an attachment download.
fn download_response(content_type: &str, file_name: &str, body: Vec<u8>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_unknown_format_is_a_validation_error() {
        let state = AppState::new(test_config());
        let result = handle_export_variants(State(state), Path("pdf".to_string())).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_empty_variant_export_succeeds_with_headers() {
        let state = AppState::new(test_config());
        let response = handle_export_variants(State(state), Path("csv".to_string()))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.contains("classified_variants.csv"));
    }

    #[tokio::test]
    async fn test_history_export_names_the_file() {
        let state = AppState::new(test_config());
        let response = handle_export_history(State(state)).await.into_response();
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.contains("posting_history.csv"));
    }
}
