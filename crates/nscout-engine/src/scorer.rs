//! Quick and full niche scoring.
//!
//! Both modes share the same five-factor decomposition: search volume (25),
//! competition (25), monetization (20), content availability (15), and
//! trend momentum (15). Quick mode avoids the trends provider and the
//! second content scrape so many candidates can be ranked cheaply.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use nscout_models::{FactorScore, Grade, NicheScore, ScoreBreakdown, SearchResult};
use nscout_scrape::{ScraperGateway, SearchKind};
use nscout_trends::TrendsClient;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::cpm::CpmEstimator;

/// Keywords currently riding a wave.
const TRENDING_KEYWORDS: &[&str] = &["ai", "crypto", "investing", "tutorial", "chatgpt", "2024"];
/// Keywords with steady demand.
const STABLE_KEYWORDS: &[&str] = &["cooking", "fitness", "tech", "business", "education"];
/// Keywords past their peak.
const DECLINING_KEYWORDS: &[&str] = &["facebook", "flash"];

/// Search metrics derived from one scrape.
///
/// `None` fields mean the scrape failed; factor formulas degrade to their
/// floor contributions rather than erroring.
#[derive(Debug, Clone, Default)]
pub struct NicheMetrics {
    /// Bounded volume estimate derived from `totalResults * 50`.
    pub search_volume: Option<u64>,
    pub channel_count: Option<usize>,
    /// View-velocity growth proxy in [0.02, 0.25]. Heuristic: higher
    /// average views on the top results read as a growing niche.
    pub avg_growth: Option<f64>,
}

impl NicheMetrics {
    /// Derive metrics from a search result.
    pub fn from_search(result: &SearchResult) -> Self {
        let channel_count = result.channels().count();
        let total = result.page_info.total_results;
        let search_volume = (total.saturating_mul(50)).clamp(10_000, 1_500_000);

        let views: Vec<u64> = result
            .videos()
            .take(10)
            .filter_map(|v| v.view_count)
            .collect();
        let avg_growth = if views.is_empty() {
            None
        } else {
            let avg = views.iter().sum::<u64>() as f64 / views.len() as f64;
            Some((avg / 1_000_000.0).clamp(0.02, 0.25))
        };

        Self {
            search_volume: Some(search_volume),
            channel_count: Some(channel_count),
            avg_growth,
        }
    }

    /// All-unknown metrics for the scrape-failed path.
    pub fn unavailable() -> Self {
        Self::default()
    }
}

/// Search volume factor, max 25.
pub fn search_volume_score(volume: Option<u64>, trend: u32) -> f64 {
    let volume_part = volume
        .map(|v| (v as f64 / 100_000.0 * 5.0).min(15.0))
        .unwrap_or(0.0);
    let trend_part = trend as f64 / 100.0 * 10.0;
    (volume_part + trend_part).clamp(0.0, 25.0)
}

/// Competition factor, max 25. Fewer visible channels score higher; the
/// growth proxy adds up to 7.5 points.
pub fn competition_score(channel_count: Option<usize>, avg_growth: Option<f64>) -> f64 {
    let channels = channel_count.unwrap_or(0);
    let growth = avg_growth.unwrap_or(0.0);

    let base = if channels < 200 {
        20.0
    } else if channels < 500 {
        16.0
    } else if channels < 1000 {
        12.0
    } else {
        8.0
    };

    (base + growth * 30.0).clamp(0.0, 25.0)
}

/// Monetization factor, max 20.
pub fn monetization_score(cpm: f64) -> f64 {
    (cpm / 12.0 * 20.0).clamp(0.0, 20.0)
}

/// Content availability factor, max 15: video abundance plus channel
/// diversity plus a saturation sweet-spot bonus.
pub fn content_availability_score(video_count: usize, channel_count: usize, total_results: u64) -> f64 {
    let mut score: f64 = 0.0;

    score += if video_count >= 40 {
        6.0
    } else if video_count >= 30 {
        5.0
    } else if video_count >= 20 {
        4.0
    } else if video_count >= 10 {
        3.0
    } else {
        2.0
    };

    score += if channel_count >= 15 {
        4.0
    } else if channel_count >= 10 {
        3.0
    } else if channel_count >= 5 {
        2.0
    } else {
        1.0
    };

    score += if total_results > 1_000_000 {
        2.0
    } else if total_results > 100_000 {
        4.0
    } else if total_results > 10_000 {
        5.0
    } else if total_results > 1_000 {
        4.0
    } else {
        2.0
    };

    score.min(15.0)
}

/// Trend momentum factor, max 15.
pub fn trend_momentum_score(trend: u32) -> f64 {
    (trend as f64 / 100.0 * 15.0).clamp(0.0, 15.0)
}

/// Two-mode niche scorer.
pub struct NicheScorer {
    gateway: Arc<ScraperGateway>,
    trends: Arc<TrendsClient>,
    estimator: CpmEstimator,
    rng: Mutex<SmallRng>,
}

impl NicheScorer {
    pub fn new(gateway: Arc<ScraperGateway>, trends: Arc<TrendsClient>) -> Self {
        Self {
            gateway,
            trends,
            estimator: CpmEstimator::new(),
            rng: Mutex::new(SmallRng::from_os_rng()),
        }
    }

    /// Fixed-seed construction for reproducible tests.
    pub fn with_rng_seed(gateway: Arc<ScraperGateway>, trends: Arc<TrendsClient>, seed: u64) -> Self {
        Self {
            gateway,
            trends,
            estimator: CpmEstimator::new(),
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Cheap score for ranking many candidates: cached scraper metrics when
    /// present, a keyword trend estimate, a static CPM lookup, and a
    /// jittered content sub-score.
    pub async fn quick_score(&self, niche: &str) -> f64 {
        let metrics = self.fetch_metrics(niche).await;
        let trend = self.estimate_trend(niche);
        let cpm = self.estimator.estimate_base(niche);

        let content = self.random_content_score();
        let total = search_volume_score(metrics.search_volume, trend)
            + competition_score(metrics.channel_count, metrics.avg_growth)
            + monetization_score(cpm.cpm)
            + content
            + trend_momentum_score(trend);

        debug!(niche, total, "quick score");
        total.clamp(0.0, 100.0)
    }

    /// Full score with the trends provider and a second content scrape.
    pub async fn full_score(&self, niche: &str) -> NicheScore {
        let metrics = self.fetch_metrics(niche).await;
        let trend = self.trends.score(niche).await;
        let cpm = self.estimator.estimate_base(niche);
        let (content, content_details, content_source) = self.content_availability(niche).await;

        let search = search_volume_score(metrics.search_volume, trend);
        let competition = competition_score(metrics.channel_count, metrics.avg_growth);
        let monetization = monetization_score(cpm.cpm);
        let momentum = trend_momentum_score(trend);

        let total = (search + competition + monetization + content + momentum).clamp(0.0, 100.0);
        let total = (total * 10.0).round() / 10.0;

        let volume_details = match metrics.search_volume {
            Some(volume) => format!("{} results, {}/100 trend", volume, trend),
            None => "search volume unavailable".to_string(),
        };
        let competition_details = match metrics.channel_count {
            Some(channels) => format!(
                "{} channels, {:.1}% growth",
                channels,
                metrics.avg_growth.unwrap_or(0.0) * 100.0
            ),
            None => "competition data unavailable".to_string(),
        };

        NicheScore {
            niche_name: niche.to_string(),
            total_score: total,
            grade: Grade::from_total(total),
            breakdown: ScoreBreakdown {
                search_volume: FactorScore::new(
                    round1(search),
                    25.0,
                    volume_details,
                    "live: scraper + trends",
                ),
                competition: FactorScore::new(
                    round1(competition),
                    25.0,
                    competition_details,
                    "live: scraper",
                ),
                monetization: FactorScore::new(
                    round1(monetization),
                    20.0,
                    format!("${:.2} CPM ({})", cpm.cpm, cpm.tier()),
                    cpm.source.clone(),
                ),
                content_availability: FactorScore::new(
                    round1(content),
                    15.0,
                    content_details,
                    content_source,
                ),
                trend_momentum: FactorScore::new(
                    round1(momentum),
                    15.0,
                    format!("{}/100 trend strength (12-month avg)", trend),
                    "live: trends provider",
                ),
            },
            analyzed_at: Utc::now().to_rfc3339(),
        }
    }

    async fn fetch_metrics(&self, niche: &str) -> NicheMetrics {
        match self.gateway.search(niche, 30, SearchKind::All).await {
            Ok(result) => NicheMetrics::from_search(&result),
            Err(err) => {
                warn!(niche, "metrics scrape failed: {}", err);
                NicheMetrics::unavailable()
            }
        }
    }

    /// Content-availability sub-score from a wider search. Falls back to a
    /// jittered mid-band value when the scrape fails.
    async fn content_availability(&self, niche: &str) -> (f64, String, String) {
        match self.gateway.search(niche, 50, SearchKind::All).await {
            Ok(result) => {
                let videos = result.videos().count();
                let channels = result.channels().count();
                let total = result.page_info.total_results;
                let score = content_availability_score(videos, channels, total);
                (
                    score,
                    format!("{} videos across {} channels", videos, channels),
                    "live: scraper analysis".to_string(),
                )
            }
            Err(err) => {
                warn!(niche, "content availability scrape failed: {}", err);
                (
                    self.random_content_score(),
                    "content data unavailable".to_string(),
                    "estimated".to_string(),
                )
            }
        }
    }

    /// Keyword trend estimate used by quick mode; no provider call.
    fn estimate_trend(&self, niche: &str) -> u32 {
        let niche = niche.to_lowercase();
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let mut score: i32 = 45;

        for kw in TRENDING_KEYWORDS {
            if niche.contains(kw) {
                score += rng.random_range(8..=15);
            }
        }
        for kw in STABLE_KEYWORDS {
            if niche.contains(kw) {
                score += rng.random_range(3..=8);
            }
        }
        for kw in DECLINING_KEYWORDS {
            if niche.contains(kw) {
                score -= rng.random_range(5..=15);
            }
        }

        (score + rng.random_range(-8..=12)).clamp(15, 95) as u32
    }

    fn random_content_score(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random_range(8.0..13.0)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use nscout_models::{ItemKind, PageInfo, SearchItem};

    #[test]
    fn test_fixed_metrics_record_scores_deterministically() {
        let search = search_volume_score(Some(200_000), 80);
        let competition = competition_score(Some(150), Some(0.15));
        let monetization = monetization_score(8.0);
        let content = content_availability_score(30, 10, 50_000);
        let momentum = trend_momentum_score(80);

        assert!((search - 18.0).abs() < 1e-9);
        assert!((competition - 24.5).abs() < 1e-9);
        assert!((monetization - 13.333333333333334).abs() < 1e-9);
        assert!((content - 13.0).abs() < 1e-9);
        assert!((momentum - 12.0).abs() < 1e-9);

        let total = search + competition + monetization + content + momentum;
        assert!((total - 80.83).abs() < 0.01);
        assert_eq!(Grade::from_total(total), Grade::AMinus);
    }

    #[test]
    fn test_factor_bounds_hold_across_extremes() {
        for volume in [None, Some(0), Some(10_000), Some(1_500_000), Some(u64::MAX / 100)] {
            for trend in [0u32, 50, 100] {
                let score = search_volume_score(volume, trend);
                assert!((0.0..=25.0).contains(&score));
            }
        }
        for channels in [None, Some(0), Some(199), Some(500), Some(10_000)] {
            for growth in [None, Some(0.02), Some(0.25)] {
                let score = competition_score(channels, growth);
                assert!((0.0..=25.0).contains(&score));
            }
        }
        for cpm in [0.0, 3.5, 12.0, 50.0] {
            assert!((0.0..=20.0).contains(&monetization_score(cpm)));
        }
        for videos in [0, 10, 40, 500] {
            for channels in [0, 5, 15] {
                for total in [0u64, 1_001, 10_001, 100_001, 1_000_001] {
                    let score = content_availability_score(videos, channels, total);
                    assert!((0.0..=15.0).contains(&score));
                }
            }
        }
        assert!((0.0..=15.0).contains(&trend_momentum_score(100)));
    }

    #[test]
    fn test_competition_growth_cap() {
        // Low competition plus maximum growth would exceed the factor
        // ceiling without the clamp.
        let score = competition_score(Some(10), Some(0.25));
        assert_eq!(score, 25.0);
    }

    fn video_item(id: &str, views: Option<u64>) -> SearchItem {
        SearchItem {
            kind: ItemKind::Video,
            id: id.into(),
            title: "t".into(),
            channel_id: "UCx".into(),
            channel_title: "c".into(),
            channel_handle: None,
            channel_url: String::new(),
            description: String::new(),
            published_at: None,
            thumbnail_url: None,
            view_count: views,
        }
    }

    #[test]
    fn test_metrics_from_search_derivation() {
        let result = SearchResult {
            items: vec![
                video_item("a", Some(400_000)),
                video_item("b", Some(200_000)),
                video_item("c", None),
            ],
            page_info: PageInfo {
                total_results: 300,
                results_per_page: 3,
            },
        };

        let metrics = NicheMetrics::from_search(&result);
        assert_eq!(metrics.search_volume, Some(15_000));
        assert_eq!(metrics.channel_count, Some(0));
        // avg of observed views = 300k -> 0.3 clamps to 0.25.
        assert!((metrics.avg_growth.unwrap() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_metrics_growth_none_without_views() {
        let result = SearchResult {
            items: vec![video_item("a", None)],
            page_info: PageInfo {
                total_results: 100,
                results_per_page: 1,
            },
        };
        assert!(NicheMetrics::from_search(&result).avg_growth.is_none());
    }

    #[test]
    fn test_volume_clamp_bounds() {
        let mut result = SearchResult {
            items: Vec::new(),
            page_info: PageInfo {
                total_results: 0,
                results_per_page: 0,
            },
        };
        assert_eq!(NicheMetrics::from_search(&result).search_volume, Some(10_000));

        result.page_info.total_results = 10_000_000;
        assert_eq!(NicheMetrics::from_search(&result).search_volume, Some(1_500_000));
    }
}
