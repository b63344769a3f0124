pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::state::AppState;
use crate::style::handlers as style;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Style classification
        .route("/api/airecommendation", post(style::handle_ai_recommendation))
        .route("/api/v1/survey", get(style::handle_get_survey))
        // Catalog & recommendations
        .route("/api/v1/products", get(catalog::handle_list_products))
        .route("/api/v1/products/:id", get(catalog::handle_get_product))
        .route(
            "/api/v1/recommendations",
            post(catalog::handle_recommendations),
        )
        .with_state(state)
}
