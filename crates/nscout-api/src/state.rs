//! Application state.

use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use std::time::Instant;

use nscout_cache::TtlCache;
use nscout_engine::{CompetitorAnalyzer, NicheScorer, RecommendationEngine, RisingStarFinder};
use nscout_scrape::ScraperGateway;
use nscout_trends::TrendsClient;

use crate::config::ApiConfig;

/// Shared application state. The cache, gateway, and trends client are the
/// process-wide singletons every component works against; their lifecycle
/// is init at startup, drop at shutdown.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub cache: Arc<TtlCache>,
    pub gateway: Arc<ScraperGateway>,
    pub trends: Arc<TrendsClient>,
    pub scorer: Arc<NicheScorer>,
    pub recommendations: Arc<RecommendationEngine>,
    pub discovery: Arc<RisingStarFinder>,
    pub competitors: Arc<CompetitorAnalyzer>,
    pub started_at: Instant,
    pub request_count: Arc<AtomicU64>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let cache = Arc::new(TtlCache::new(config.cache_ttl));
        let gateway = Arc::new(ScraperGateway::new(
            Arc::clone(&cache),
            config.scraper_timeout,
        ));
        let trends = Arc::new(TrendsClient::new(config.trends.clone(), Arc::clone(&cache))?);
        let scorer = Arc::new(NicheScorer::new(Arc::clone(&gateway), Arc::clone(&trends)));
        let recommendations = Arc::new(RecommendationEngine::new(Arc::clone(&scorer)));
        let discovery = Arc::new(RisingStarFinder::new(
            Arc::clone(&gateway),
            config.enrich_delay,
        ));
        let competitors = Arc::new(CompetitorAnalyzer::new(Arc::clone(&gateway)));

        Ok(Self {
            config,
            cache,
            gateway,
            trends,
            scorer,
            recommendations,
            discovery,
            competitors,
            started_at: Instant::now(),
            request_count: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Seconds since startup.
    pub fn uptime_seconds(&self) -> f64 {
        (self.started_at.elapsed().as_secs_f64() * 10.0).round() / 10.0
    }
}
