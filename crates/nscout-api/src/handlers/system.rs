//! Health, status, and statistics endpoints.

use std::sync::atomic::Ordering;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use nscout_cache::CacheStats;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint (liveness probe).
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub caching: String,
    pub uptime: f64,
}

/// Handle `GET /api/status`.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "live".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        caching: "enabled".to_string(),
        uptime: state.uptime_seconds(),
    })
}

#[derive(Serialize)]
pub struct ApiCallCounters {
    pub scraper: u64,
    pub trends: u64,
    pub total: u64,
}

#[derive(Serialize)]
pub struct MemoryStats {
    pub cached_entries: usize,
    pub expired_cleaned: usize,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub uptime_seconds: f64,
    pub total_requests: u64,
    pub requests_per_minute: f64,
    pub api_calls: ApiCallCounters,
    pub cache: CacheStats,
    pub memory: MemoryStats,
}

/// Handle `GET /api/stats`.
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let uptime = state.uptime_seconds();
    let total_requests = state.request_count.load(Ordering::Relaxed);
    let requests_per_minute = if uptime > 0.0 {
        ((total_requests as f64 / (uptime / 60.0)) * 100.0).round() / 100.0
    } else {
        0.0
    };

    let scraper = state.gateway.call_count();
    let trends = state.trends.call_count();

    // Stats double as light housekeeping: expired entries are swept here.
    let expired_cleaned = state.cache.sweep().await;
    let cache = state.cache.stats().await;

    Json(StatsResponse {
        uptime_seconds: uptime,
        total_requests,
        requests_per_minute,
        api_calls: ApiCallCounters {
            scraper,
            trends,
            total: scraper + trends,
        },
        cache,
        memory: MemoryStats {
            cached_entries: cache.entries,
            expired_cleaned,
        },
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
