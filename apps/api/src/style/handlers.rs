//! Axum route handlers for the survey and style classification.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::style::preferences::{PreferenceAnswer, PreferenceSequence, SurveyQuestion, SURVEY};

pub const INVALID_PREFERENCES: &str = "Invalid request body. Expected userPreferences array.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleMatch {
    pub vibe: String,
    pub matched_celebrity: String,
    pub style_profile: PreferenceSequence,
}

#[derive(Debug, Serialize)]
pub struct StyleMatchResponse {
    pub success: bool,
    pub data: StyleMatch,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/survey
pub async fn handle_get_survey() -> Json<&'static [SurveyQuestion]> {
    Json(SURVEY)
}

/// POST /api/airecommendation
///
/// Classifies a shopper's answers into a style vibe and a celebrity match.
/// A failed or unparsable model reply still yields 200 with the fallback vibe.
pub async fn handle_ai_recommendation(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<StyleMatchResponse>, AppError> {
    let preferences = parse_user_preferences(payload)?;
    info!(count = preferences.answers().len(), "Received user preferences");

    let classification = state.classifier.classify(&preferences).await?;

    Ok(Json(StyleMatchResponse {
        success: true,
        data: StyleMatch {
            vibe: classification.vibe,
            matched_celebrity: classification.celebrity,
            style_profile: preferences,
        },
    }))
}

/// Pulls `userPreferences` out of the body. Anything other than an array of
/// `{question, answer}` objects is rejected before the classifier is consulted.
fn parse_user_preferences(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<PreferenceSequence, AppError> {
    let invalid = || AppError::Validation(INVALID_PREFERENCES.to_string());

    let Json(mut body) = payload.map_err(|_| invalid())?;
    let raw = body
        .get_mut("userPreferences")
        .map(Value::take)
        .filter(Value::is_array)
        .ok_or_else(invalid)?;

    let answers: Vec<PreferenceAnswer> = serde_json::from_value(raw).map_err(|_| invalid())?;
    Ok(answers.into())
}
