//! The `/api/suggestions` endpoint.

use axum::Json;
use serde::Serialize;

use crate::suggestions::{random_suggestions, SuggestionCategory};

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<SuggestionCategory>,
}

/// Handle `GET /api/suggestions`.
pub async fn suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: random_suggestions(),
    })
}
