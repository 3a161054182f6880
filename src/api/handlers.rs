use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    models::{Genre, RecommendationCard},
    services::recommendations,
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub genre: String,
    pub filter_text: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<RecommendationCard>,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Returns the accepted genre names, in display order, for the client's form
pub async fn get_genres() -> Json<Vec<&'static str>> {
    Json(Genre::names())
}

/// Handler for the recommendation endpoint
///
/// The response may legitimately carry fewer than three recommendations,
/// including none; that is not an error condition.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let recommendations = recommendations::recommend(
        state.catalog.clone(),
        state.model.clone(),
        &request.genre,
        &request.filter_text,
    )
    .await?;

    Ok(Json(RecommendationResponse { recommendations }))
}
