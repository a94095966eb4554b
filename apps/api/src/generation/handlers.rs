//! Axum route handlers for the Content API.
//!
//! Request shape checks live here; the generator assumes validated input.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::generator::MAX_VARIATIONS;
use crate::generation::models::{ContentSuggestion, GenerationRequest, ImprovementType};
use crate::state::AppState;

const MIN_PROMPT_CHARS: usize = 10;
const MAX_PROMPT_CHARS: usize = 1000;
const DEFAULT_VARIATION_COUNT: usize = 3;
const DEFAULT_HASHTAG_COUNT: usize = 5;
const MAX_HASHTAGS: usize = 30;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct VariationsRequest {
    #[serde(flatten)]
    pub request: GenerationRequest,
    #[serde(default = "default_variation_count")]
    pub count: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveRequest {
    pub content: String,
    pub improvement_type: ImprovementType,
    #[serde(default)]
    pub target_audience: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HashtagsRequest {
    pub content: String,
    #[serde(default = "default_hashtag_count")]
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestion: ContentSuggestion,
}

#[derive(Debug, Serialize)]
pub struct VariationsResponse {
    pub suggestions: Vec<ContentSuggestion>,
}

#[derive(Debug, Serialize)]
pub struct HashtagsResponse {
    pub hashtags: Vec<String>,
}

fn default_variation_count() -> usize {
    DEFAULT_VARIATION_COUNT
}

fn default_hashtag_count() -> usize {
    DEFAULT_HASHTAG_COUNT
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/content/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    validate_prompt(&request.prompt)?;

    let suggestion = state.generator.generate_content(&request).await?;

    Ok(Json(SuggestionResponse { suggestion }))
}

/// POST /api/v1/content/variations
///
/// All-or-nothing: one failed variation fails the whole response.
pub async fn handle_variations(
    State(state): State<AppState>,
    Json(body): Json<VariationsRequest>,
) -> Result<Json<VariationsResponse>, AppError> {
    validate_prompt(&body.request.prompt)?;
    validate_count("count", body.count, MAX_VARIATIONS)?;

    let suggestions = state
        .generator
        .generate_variations(&body.request, body.count)
        .await?;

    Ok(Json(VariationsResponse { suggestions }))
}

/// POST /api/v1/content/improve
pub async fn handle_improve(
    State(state): State<AppState>,
    Json(body): Json<ImproveRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    if body.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let suggestion = state
        .generator
        .improve_content(&body.content, body.improvement_type, body.target_audience)
        .await?;

    Ok(Json(SuggestionResponse { suggestion }))
}

/// POST /api/v1/content/hashtags
///
/// Never fails on provider errors; returns an empty list instead.
pub async fn handle_hashtags(
    State(state): State<AppState>,
    Json(body): Json<HashtagsRequest>,
) -> Result<Json<HashtagsResponse>, AppError> {
    if body.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    validate_count("count", body.count, MAX_HASHTAGS)?;

    let hashtags = state
        .generator
        .generate_hashtags(&body.content, body.count)
        .await;

    Ok(Json(HashtagsResponse { hashtags }))
}

fn validate_prompt(prompt: &str) -> Result<(), AppError> {
    let chars = prompt.chars().count();
    if !(MIN_PROMPT_CHARS..=MAX_PROMPT_CHARS).contains(&chars) {
        return Err(AppError::Validation(format!(
            "prompt must be between {MIN_PROMPT_CHARS} and {MAX_PROMPT_CHARS} characters (got {chars})"
        )));
    }
    Ok(())
}

fn validate_count(field: &str, count: usize, max: usize) -> Result<(), AppError> {
    if !(1..=max).contains(&count) {
        return Err(AppError::Validation(format!(
            "{field} must be between 1 and {max}"
        )));
    }
    Ok(())
}
