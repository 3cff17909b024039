//! The `/api/channels` rising-star endpoint.

use std::time::Instant;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use nscout_cache::CacheStats;
use nscout_engine::RisingStarsReport;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::handlers::analyze::discovery_failure_reason;
use crate::state::AppState;

const DISCOVERY_RESULTS: usize = 50;

#[derive(Debug, Deserialize)]
pub struct ChannelsParams {
    #[serde(default)]
    pub niche: String,
    pub min_duration: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ChannelsPerformance {
    pub discovery_time_seconds: f64,
    pub scraper_calls: u64,
    pub cache: CacheStats,
}

#[derive(Debug, Serialize)]
pub struct ChannelsResponse {
    #[serde(flatten)]
    pub report: RisingStarsReport,
    pub performance: ChannelsPerformance,
}

/// Handle `GET /api/channels`.
pub async fn channels(
    State(state): State<AppState>,
    Query(params): Query<ChannelsParams>,
) -> Response {
    let niche = params.niche.trim().to_lowercase();
    if niche.is_empty() {
        return Json(json!({ "error": "Please provide a niche parameter" })).into_response();
    }

    let start = Instant::now();
    let min_duration = params.min_duration.unwrap_or(state.config.long_form_minutes);
    info!(niche = %niche, min_duration, "discovering channels");

    let report = match state
        .discovery
        .find(&niche, DISCOVERY_RESULTS, min_duration)
        .await
    {
        Ok(report) => report,
        Err(err) => {
            warn!(niche = %niche, "channel discovery failed: {}", err);
            RisingStarsReport::empty(&niche, discovery_failure_reason(&err))
        }
    };

    let elapsed = start.elapsed().as_secs_f64();
    info!(niche = %niche, elapsed, "channel discovery complete");

    Json(ChannelsResponse {
        report,
        performance: ChannelsPerformance {
            discovery_time_seconds: (elapsed * 100.0).round() / 100.0,
            scraper_calls: state.gateway.call_count(),
            cache: state.cache.stats().await,
        },
    })
    .into_response()
}
