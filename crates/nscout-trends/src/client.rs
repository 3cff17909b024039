//! Rate-limited trends client.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use metrics::counter;
use nscout_cache::{cache_key, TtlCache};
use reqwest::Client;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{TrendsError, TrendsResult};
use crate::fallback::FallbackScorer;
use crate::types::InterestSeries;

/// Trend scores age slowly; cache them well past the default TTL.
pub const TRENDS_CACHE_TTL: Duration = Duration::from_secs(4 * 3600);

const TRENDS_CALLS_METRIC: &str = "nscout_trends_calls_total";

/// Configuration for the trends client.
#[derive(Debug, Clone)]
pub struct TrendsClientConfig {
    /// Base URL of the trends provider.
    pub base_url: String,
    /// Interest window requested from the provider.
    pub timeframe: String,
    /// Minimum interval between provider calls.
    pub min_interval: Duration,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for TrendsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8600".to_string(),
            timeframe: "today 12-m".to_string(),
            min_interval: Duration::from_secs(1),
            timeout: Duration::from_secs(10),
        }
    }
}

impl TrendsClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("TRENDS_SERVICE_URL").unwrap_or(defaults.base_url),
            timeframe: std::env::var("TRENDS_TIMEFRAME").unwrap_or(defaults.timeframe),
            min_interval: Duration::from_millis(
                std::env::var("TRENDS_MIN_INTERVAL_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1000),
            ),
            timeout: Duration::from_secs(
                std::env::var("TRENDS_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }
}

/// Client for the external trend-popularity service.
///
/// `score` never fails: provider errors degrade to the keyword heuristic.
pub struct TrendsClient {
    http: Client,
    config: TrendsClientConfig,
    cache: Arc<TtlCache>,
    /// Timestamp of the last provider attempt. Holding this lock across the
    /// call serializes concurrent scoring requests.
    last_call: Mutex<Option<Instant>>,
    call_count: AtomicU64,
    fallback: FallbackScorer,
}

impl TrendsClient {
    pub fn new(config: TrendsClientConfig, cache: Arc<TtlCache>) -> TrendsResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(TrendsError::Network)?;

        Ok(Self {
            http,
            config,
            cache,
            last_call: Mutex::new(None),
            call_count: AtomicU64::new(0),
            fallback: FallbackScorer::new(),
        })
    }

    /// Replace the fallback scorer (seeded RNG for tests).
    pub fn with_fallback(mut self, fallback: FallbackScorer) -> Self {
        self.fallback = fallback;
        self
    }

    /// Provider calls so far.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// 12-month average popularity for a keyword, in [0, 100].
    pub async fn score(&self, keyword: &str) -> u32 {
        let keyword = keyword.trim().to_lowercase();
        let key = cache_key("trends", &json!({ "keyword": keyword }));

        if let Some(score) = self.cache.get_json::<u32>(&key).await {
            debug!(keyword = %keyword, score, "using cached trends score");
            return score;
        }

        let mut last_call = self.last_call.lock().await;

        // The minimum interval counts from the last network attempt,
        // successful or not.
        if let Some(previous) = *last_call {
            let elapsed = previous.elapsed();
            if elapsed < self.config.min_interval {
                let remaining = self.config.min_interval - elapsed;
                debug!(keyword = %keyword, remaining_ms = remaining.as_millis() as u64, "rate limiting");
                tokio::time::sleep(remaining).await;
            }
        }

        let attempt = self.fetch_score(&keyword).await;
        *last_call = Some(Instant::now());

        match attempt {
            Ok(score) => {
                self.call_count.fetch_add(1, Ordering::Relaxed);
                counter!(TRENDS_CALLS_METRIC).increment(1);
                info!(keyword = %keyword, score, "trends score");
                self.cache
                    .set_json_with_ttl(&key, &score, TRENDS_CACHE_TTL)
                    .await;
                score
            }
            Err(err) => {
                warn!(keyword = %keyword, "trends provider unavailable, using fallback: {}", err);
                self.fallback.score(&keyword)
            }
        }
    }

    async fn fetch_score(&self, keyword: &str) -> TrendsResult<u32> {
        let url = format!("{}/api/interest", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("keyword", keyword), ("timeframe", self.config.timeframe.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TrendsError::RequestFailed { status, body });
        }

        let series: InterestSeries = response.json().await?;
        series
            .mean()
            .map(|score| score.min(100))
            .ok_or(TrendsError::EmptySeries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> TrendsClientConfig {
        TrendsClientConfig {
            base_url,
            timeframe: "today 12-m".to_string(),
            min_interval: Duration::from_millis(10),
            timeout: Duration::from_secs(2),
        }
    }

    fn series_body(values: &[u32]) -> serde_json::Value {
        json!({
            "keyword": "ai tutorials",
            "points": values
                .iter()
                .enumerate()
                .map(|(i, v)| json!({"date": format!("2024-{:02}", i + 1), "value": v}))
                .collect::<Vec<_>>(),
        })
    }

    #[tokio::test]
    async fn test_score_is_series_mean() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/interest"))
            .and(query_param("keyword", "ai tutorials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(series_body(&[60, 80, 70])))
            .mount(&server)
            .await;

        let cache = Arc::new(TtlCache::default());
        let client = TrendsClient::new(test_config(server.uri()), cache).unwrap();

        assert_eq!(client.score("AI Tutorials").await, 70);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_second_call_hits_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/interest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(series_body(&[50])))
            .expect(1)
            .mount(&server)
            .await;

        let cache = Arc::new(TtlCache::default());
        let client = TrendsClient::new(test_config(server.uri()), cache).unwrap();

        assert_eq!(client.score("ai tutorials").await, 50);
        assert_eq!(client.score("ai tutorials").await, 50);
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_provider_error_falls_back_to_heuristic() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/interest"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let cache = Arc::new(TtlCache::default());
        let client = TrendsClient::new(test_config(server.uri()), cache)
            .unwrap()
            .with_fallback(FallbackScorer::with_seed(42));

        let score = client.score("crypto news").await;
        // "crypto" seed is 70 with jitter in [-5, 10].
        assert!((65..=80).contains(&score), "score {} out of band", score);
        // Failed attempts do not count as provider calls.
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_series_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/interest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(series_body(&[])))
            .mount(&server)
            .await;

        let cache = Arc::new(TtlCache::default());
        let client = TrendsClient::new(test_config(server.uri()), cache)
            .unwrap()
            .with_fallback(FallbackScorer::with_seed(1));

        let score = client.score("underwater basket weaving").await;
        assert!((40..=60).contains(&score));
    }

    #[tokio::test]
    async fn test_min_interval_enforced_between_attempts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/interest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(series_body(&[40])))
            .mount(&server)
            .await;

        let mut config = test_config(server.uri());
        config.min_interval = Duration::from_millis(80);

        let cache = Arc::new(TtlCache::default());
        let client = TrendsClient::new(config, cache).unwrap();

        let start = Instant::now();
        client.score("first keyword").await;
        client.score("second keyword").await;
        assert!(start.elapsed() >= Duration::from_millis(80));
    }
}
