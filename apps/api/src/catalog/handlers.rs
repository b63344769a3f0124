//! Axum route handlers for the catalog and recommendations.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::budget::BudgetRange;
use crate::catalog::products::{Product, ProductDetail, INSPIRATION_IMAGES};
use crate::catalog::recommend::select;
use crate::errors::AppError;
use crate::state::AppState;
use crate::style::preferences::{PreferenceCollector, PreferenceSequence};

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    /// One answer per survey question, in survey order.
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub vibe: String,
    pub matched_celebrity: String,
    pub style_profile: PreferenceSequence,
    pub budget: BudgetRange,
    pub products: Vec<Product>,
    pub inspiration_images: &'static [&'static str],
}

/// GET /api/v1/products
pub async fn handle_list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}

/// GET /api/v1/products/:id
pub async fn handle_get_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ProductDetail>, AppError> {
    state
        .catalog
        .find(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Product {id} not found")))
}

/// POST /api/v1/recommendations
///
/// Full pipeline: survey answers → collector → vibe classification → catalog filter.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let Json(request) = payload
        .map_err(|_| AppError::Validation("Expected an answers array of strings".to_string()))?;

    let collector = PreferenceCollector::from_answers(request.answers)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let preferences = collector
        .to_sequence()
        .ok_or_else(|| AppError::Validation("Survey is incomplete".to_string()))?;

    let classification = state.classifier.classify(&preferences).await?;

    let budget_answer = preferences.budget_answer().unwrap_or_default();
    let budget = BudgetRange::from_answer(budget_answer);
    let products = select(state.catalog.products(), &classification, budget_answer);
    info!(
        vibe = %classification.vibe,
        matches = products.len(),
        "Selected recommendations"
    );

    Ok(Json(RecommendationResponse {
        vibe: classification.vibe,
        matched_celebrity: classification.celebrity,
        style_profile: preferences,
        budget,
        products,
        inspiration_images: INSPIRATION_IMAGES,
    }))
}
