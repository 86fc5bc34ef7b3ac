//! Axum route handlers for the compose API: scoring, style catalog, and
//! variant generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::copy::generator::{make_variants, AdBrief, AdVariant};
use crate::copy::scorer::{score, CopyScore};
use crate::copy::styles::MASTER_STYLES;
use crate::errors::AppError;
use crate::session::SavedAd;
use crate::state::AppState;

/// Default CTA recorded on the saved ad when the brief leaves it out.
const DEFAULT_CTA: &str = "Click here to get started";
/// Default style when the brief leaves it out (first catalog entry).
const DEFAULT_STYLE: &str = "Gary Halbert";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateVariantsRequest {
    pub product: String,
    pub benefit: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_cta")]
    pub cta: String,
    #[serde(default)]
    pub body_extra: String,
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

fn default_cta() -> String {
    DEFAULT_CTA.to_string()
}

#[derive(Debug, Serialize)]
pub struct GenerateVariantsResponse {
    pub variants: Vec<AdVariant>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct VariantListResponse {
    pub variants: Vec<AdVariant>,
}

#[derive(Debug, Serialize)]
pub struct StyleInfo {
    pub name: &'static str,
    pub descriptor: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/copy/score
///
/// Scores a block of ad copy. Total: empty text returns an all-zero
/// breakdown rather than an error.
pub async fn handle_score(Json(request): Json<ScoreRequest>) -> Json<CopyScore> {
    Json(score(&request.text))
}

/// GET /api/v1/copy/styles
pub async fn handle_list_styles() -> Json<Vec<StyleInfo>> {
    Json(
        MASTER_STYLES
            .iter()
            .map(|&(name, descriptor)| StyleInfo { name, descriptor })
            .collect(),
    )
}

/// POST /api/v1/copy/variants
///
/// Generates five variants from the brief, stores them (plus the full saved
/// ad for the webhook payload) in the session, and returns them. Product and
/// benefit are required; audience and style fall back to defaults.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateVariantsRequest>,
) -> Result<Json<GenerateVariantsResponse>, AppError> {
    if request.product.trim().is_empty() || request.benefit.trim().is_empty() {
        return Err(AppError::Validation(
            "Please add at least product and benefit.".to_string(),
        ));
    }

    let brief = AdBrief {
        product: request.product.clone(),
        benefit: request.benefit.clone(),
        audience: request.audience.clone(),
        style: request.style.clone(),
        body_extra: request.body_extra.clone(),
    };

    let variants = make_variants(&brief);

    {
        let mut session = state.session.write().await;
        session.variants = variants.clone();
        session.ad_saved = Some(SavedAd {
            product: request.product,
            audience: request.audience,
            benefit: request.benefit,
            cta: request.cta,
            style: request.style,
            body_extra: request.body_extra,
            variants: variants.clone(),
        });
    }

    info!("Generated {} variants", variants.len());

    Ok(Json(GenerateVariantsResponse {
        count: variants.len(),
        variants,
    }))
}

/// GET /api/v1/copy/variants
pub async fn handle_list_variants(State(state): State<AppState>) -> Json<VariantListResponse> {
    let variants = state.session.read().await.variants.clone();
    Json(VariantListResponse { variants })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    fn request(product: &str, benefit: &str) -> GenerateVariantsRequest {
        GenerateVariantsRequest {
            product: product.to_string(),
            benefit: benefit.to_string(),
            audience: "busy parents".to_string(),
            style: DEFAULT_STYLE.to_string(),
            cta: DEFAULT_CTA.to_string(),
            body_extra: String::new(),
        }
    }

    #[tokio::test]
    async fn test_generate_requires_product_and_benefit() {
        let state = AppState::new(test_config());

        let missing_product = handle_generate(State(state.clone()), Json(request("", "Y"))).await;
        assert!(matches!(missing_product, Err(AppError::Validation(_))));

        let missing_benefit = handle_generate(State(state.clone()), Json(request("X", " "))).await;
        assert!(matches!(missing_benefit, Err(AppError::Validation(_))));

        // Failed validation must not mutate the session.
        let session = state.session.read().await;
        assert!(session.variants.is_empty());
        assert!(session.ad_saved.is_none());
    }

    #[tokio::test]
    async fn test_generate_stores_variants_and_saved_ad() {
        let state = AppState::new(test_config());
        let response = handle_generate(State(state.clone()), Json(request("WidgetPro", "save time")))
            .await
            .unwrap();
        assert_eq!(response.0.count, 5);

        let session = state.session.read().await;
        assert_eq!(session.variants.len(), 5);
        let saved = session.ad_saved.as_ref().unwrap();
        assert_eq!(saved.product, "WidgetPro");
        assert_eq!(saved.cta, DEFAULT_CTA);
        assert_eq!(saved.variants, session.variants);
    }

    #[tokio::test]
    async fn test_regeneration_replaces_the_batch() {
        let state = AppState::new(test_config());
        handle_generate(State(state.clone()), Json(request("A", "first benefit")))
            .await
            .unwrap();
        handle_generate(State(state.clone()), Json(request("B", "second benefit")))
            .await
            .unwrap();

        let session = state.session.read().await;
        assert_eq!(session.variants.len(), 5);
        assert!(session.variants[0].headline.contains('B'));
        assert_eq!(session.ad_saved.as_ref().unwrap().product, "B");
    }

    #[tokio::test]
    async fn test_score_endpoint_is_total() {
        let Json(breakdown) = handle_score(Json(ScoreRequest {
            text: String::new(),
        }))
        .await;
        assert_eq!(breakdown.score, 0.0);
    }

    #[tokio::test]
    async fn test_style_listing_matches_catalog() {
        let Json(styles) = handle_list_styles().await;
        assert_eq!(styles.len(), MASTER_STYLES.len());
        assert_eq!(styles[0].name, "Gary Halbert");
    }

    #[test]
    fn test_request_defaults_for_optional_fields() {
        let request: GenerateVariantsRequest = serde_json::from_str(
            r#"{"product": "WidgetPro", "benefit": "save time"}"#,
        )
        .unwrap();
        assert_eq!(request.style, DEFAULT_STYLE);
        assert_eq!(request.cta, DEFAULT_CTA);
        assert!(request.audience.is_empty());
        assert!(request.body_extra.is_empty());
    }
}
