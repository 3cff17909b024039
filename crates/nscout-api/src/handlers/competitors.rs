//! The `/api/competitors` saturation endpoint.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use nscout_engine::{CompetitorReport, EngineError};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompetitorsParams {
    #[serde(default)]
    pub niche: String,
}

/// Handle `GET /api/competitors`.
pub async fn competitors(
    State(state): State<AppState>,
    Query(params): Query<CompetitorsParams>,
) -> Response {
    let niche = params.niche.trim().to_lowercase();
    if niche.is_empty() {
        return Json(json!({ "error": "Please provide a niche parameter" })).into_response();
    }

    info!(niche = %niche, "analyzing competitors");

    let report = match state.competitors.analyze(&niche).await {
        Ok(report) => report,
        Err(err) => {
            warn!(niche = %niche, "competitor analysis failed: {}", err);
            let reason = match err {
                EngineError::NoResults => "No video search results found",
                EngineError::Scrape(_) => "Scraper unavailable",
            };
            CompetitorReport::empty(&niche, reason)
        }
    };

    Json(report).into_response()
}
