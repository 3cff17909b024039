//! The `/api/analyze` orchestrator.
//!
//! Runs the main niche's full scoring, then recommendations, then
//! rising-star discovery, under a request-level deadline. Only the main
//! scoring is load-bearing; the later stages degrade to empty or estimated
//! blocks so the response always carries whatever was computed.

use std::time::Instant;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use nscout_cache::CacheStats;
use nscout_engine::{EngineError, Recommendation, RisingStarsReport};
use nscout_models::NicheScore;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::metrics;
use crate::state::AppState;

/// Video search width for rising-star discovery.
const DISCOVERY_RESULTS: usize = 50;

#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    #[serde(default)]
    pub niche: String,
    pub min_duration: Option<u32>,
}

/// Per-request performance counters.
#[derive(Debug, Serialize)]
pub struct PerformanceBlock {
    pub analysis_time_seconds: f64,
    pub scraper_calls: u64,
    pub trends_calls: u64,
    pub cache: CacheStats,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub score: NicheScore,
    pub recommendation: String,
    pub recommendations: Vec<Recommendation>,
    pub rising_star_channels: RisingStarsReport,
    pub performance: PerformanceBlock,
}

/// Handle `GET /api/analyze`.
pub async fn analyze(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Response {
    let niche = params.niche.trim().to_lowercase();
    if niche.is_empty() {
        // Legacy front-end compatibility: error body with HTTP 200.
        return Json(json!({ "error": "Please provide a niche" })).into_response();
    }

    let start = Instant::now();
    let deadline = start + state.config.request_deadline;
    let min_duration = params.min_duration.unwrap_or(state.config.long_form_minutes);

    info!(niche = %niche, min_duration, "analyzing niche");

    let score = state.scorer.full_score(&niche).await;

    let recommendations = state
        .recommendations
        .recommend(&niche, score.total_score, Some(deadline))
        .await;

    let rising_star_channels =
        discover_within_deadline(&state, &niche, min_duration, deadline).await;

    let elapsed = start.elapsed().as_secs_f64();
    metrics::record_analysis(elapsed);
    info!(niche = %niche, elapsed, total = score.total_score, "analysis complete");

    let recommendation = recommendation_text(score.total_score);
    let performance = PerformanceBlock {
        analysis_time_seconds: (elapsed * 100.0).round() / 100.0,
        scraper_calls: state.gateway.call_count(),
        trends_calls: state.trends.call_count(),
        cache: state.cache.stats().await,
    };

    Json(AnalyzeResponse {
        score,
        recommendation,
        recommendations,
        rising_star_channels,
        performance,
    })
    .into_response()
}

/// Rising-star discovery bounded by the request deadline; failures and
/// deadline expiry degrade to an empty report.
async fn discover_within_deadline(
    state: &AppState,
    niche: &str,
    min_duration: u32,
    deadline: Instant,
) -> RisingStarsReport {
    let Some(remaining) = deadline.checked_duration_since(Instant::now()) else {
        return RisingStarsReport::empty(niche, "Analysis deadline reached");
    };

    match tokio::time::timeout(
        remaining,
        state.discovery.find(niche, DISCOVERY_RESULTS, min_duration),
    )
    .await
    {
        Ok(Ok(report)) => report,
        Ok(Err(err)) => {
            warn!(niche, "rising-star discovery failed: {}", err);
            RisingStarsReport::empty(niche, discovery_failure_reason(&err))
        }
        Err(_) => {
            warn!(niche, "rising-star discovery cancelled at the deadline");
            RisingStarsReport::empty(niche, "Analysis deadline reached")
        }
    }
}

/// Short client-safe reason for a discovery failure.
pub(crate) fn discovery_failure_reason(err: &EngineError) -> &'static str {
    match err {
        EngineError::NoResults => "No video search results found",
        EngineError::Scrape(_) => "Scraper unavailable",
    }
}

/// Human recommendation keyed off the total score.
pub(crate) fn recommendation_text(total: f64) -> String {
    let text = if total >= 85.0 {
        "Excellent niche with high growth potential"
    } else if total >= 75.0 {
        "Great niche with strong opportunities"
    } else if total >= 65.0 {
        "Good niche worth exploring"
    } else if total >= 55.0 {
        "Moderate potential, research further"
    } else {
        "Challenging niche, consider alternatives"
    };
    text.to_string()
}
