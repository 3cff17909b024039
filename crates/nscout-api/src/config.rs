//! API configuration.

use std::time::Duration;

use nscout_trends::TrendsClientConfig;

/// API server configuration. All values are process-level; per-request
/// tuning is limited to query parameters.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Shared cache entry TTL
    pub cache_ttl: Duration,
    /// Scraper subprocess wall-clock budget
    pub scraper_timeout: Duration,
    /// Trends provider settings (base URL, min interval, timeout)
    pub trends: TrendsClientConfig,
    /// Politeness delay between rising-star enrichment calls
    pub enrich_delay: Duration,
    /// Default long-form threshold in minutes
    pub long_form_minutes: u32,
    /// Request-level deadline for `/api/analyze`
    pub request_deadline: Duration,
    /// Per-IP rate limit, requests per second
    pub rate_limit_rps: u32,
    /// Environment (development/production)
    pub environment: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: vec!["*".to_string()],
            cache_ttl: Duration::from_secs(3600),
            scraper_timeout: Duration::from_secs(30),
            trends: TrendsClientConfig::default(),
            enrich_delay: Duration::from_millis(200),
            long_form_minutes: 40,
            request_deadline: Duration::from_secs(60),
            rate_limit_rps: 10,
            environment: "development".to_string(),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            cache_ttl: Duration::from_secs(
                std::env::var("CACHE_TTL")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(3600),
            ),
            scraper_timeout: Duration::from_secs(
                std::env::var("SCRAPER_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            trends: TrendsClientConfig::from_env(),
            enrich_delay: Duration::from_millis(
                std::env::var("ENRICH_DELAY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(200),
            ),
            long_form_minutes: std::env::var("LONG_FORM_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.long_form_minutes),
            request_deadline: Duration::from_secs(
                std::env::var("REQUEST_DEADLINE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
            rate_limit_rps: std::env::var("RATE_LIMIT_RPS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.rate_limit_rps),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}
