//! Competitor saturation analysis.
//!
//! One video search page supplies the channel sample; the top channels by
//! aggregated views are enriched with a channel lookup, the rest are
//! estimated from view patterns, and the saturation snapshot is computed
//! over the unique-channel count.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use nscout_models::{
    CompetitorChannel, SaturationLevel, SaturationReport, SubscriberTier, TierBreakdown,
};
use nscout_scrape::ScraperGateway;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};

/// Search page size for the sample.
const SEARCH_RESULTS: usize = 30;
/// Channels enriched with a channel lookup.
const ENRICH_LIMIT: usize = 3;
/// Competitors listed in the report.
const TOP_COMPETITORS: usize = 5;

/// Per-run performance counters attached to the report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompetitorPerformance {
    pub analysis_time_seconds: f64,
    pub channels_analyzed: usize,
    pub scraper_calls: u64,
}

/// Saturation report plus run metadata.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompetitorReport {
    #[serde(flatten)]
    pub report: SaturationReport,
    pub performance: CompetitorPerformance,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,
}

impl CompetitorReport {
    /// Empty report for the failure path.
    pub fn empty(niche: &str, reason: impl Into<String>) -> Self {
        Self {
            report: SaturationReport::empty(niche),
            performance: CompetitorPerformance {
                analysis_time_seconds: 0.0,
                channels_analyzed: 0,
                scraper_calls: 0,
            },
            success: false,
            error_reason: Some(reason.into()),
        }
    }
}

struct AggregatedChannel {
    name: String,
    id: String,
    video_count: usize,
    total_views: u64,
}

/// Analyzes the competitive landscape of a niche.
pub struct CompetitorAnalyzer {
    gateway: Arc<ScraperGateway>,
}

impl CompetitorAnalyzer {
    pub fn new(gateway: Arc<ScraperGateway>) -> Self {
        Self { gateway }
    }

    /// Build a saturation snapshot for a niche.
    pub async fn analyze(&self, niche: &str) -> EngineResult<CompetitorReport> {
        let start = Instant::now();
        info!(niche, "analyzing competitors");

        let videos = self.gateway.search_videos(niche, SEARCH_RESULTS).await?;
        if videos.is_empty() {
            return Err(EngineError::NoResults);
        }

        // Aggregate sample views per channel.
        let mut channels: HashMap<String, AggregatedChannel> = HashMap::new();
        for video in &videos {
            if video.channel_id.is_empty() || video.channel_title.is_empty() {
                continue;
            }
            let entry = channels
                .entry(video.channel_id.clone())
                .or_insert_with(|| AggregatedChannel {
                    name: video.channel_title.clone(),
                    id: video.channel_id.clone(),
                    video_count: 0,
                    total_views: 0,
                });
            entry.video_count += 1;
            entry.total_views += video.view_count.unwrap_or(0);
        }
        let total_unique_channels = channels.len();

        // Enrich the biggest channels; estimate the rest of the enriched
        // set from view patterns when the lookup fails.
        let mut sorted: Vec<&AggregatedChannel> = channels.values().collect();
        sorted.sort_by_key(|c| std::cmp::Reverse(c.total_views));

        let mut competitors: Vec<CompetitorChannel> = Vec::new();
        for channel in sorted.iter().take(ENRICH_LIMIT) {
            let subscribers = match self.gateway.get_channel(&channel.id).await {
                Ok(info) => info.subscribers,
                Err(err) => {
                    warn!(channel = channel.id.as_str(), "channel lookup failed: {}", err);
                    estimate_subscribers(channel.total_views, channel.video_count)
                }
            };

            let avg_views =
                (channel.total_views as f64 / channel.video_count.max(1) as f64).round() as u64;

            competitors.push(CompetitorChannel {
                name: channel.name.clone(),
                id: channel.id.clone(),
                subscribers,
                avg_views,
                video_count: channel.video_count,
                total_views: channel.total_views,
                subscriber_tier: SubscriberTier::from_subscribers(subscribers),
            });
        }

        let mut tier_breakdown = TierBreakdown::default();
        for competitor in &competitors {
            tier_breakdown.add(competitor.subscriber_tier);
        }

        let mut top_competitors = competitors.clone();
        top_competitors.sort_by_key(|c| std::cmp::Reverse(c.subscribers));
        top_competitors.truncate(TOP_COMPETITORS);

        let report = SaturationReport {
            niche: niche.to_string(),
            saturation_level: SaturationLevel::from_channel_count(total_unique_channels),
            saturation_score: total_unique_channels,
            channel_count: total_unique_channels,
            tier_breakdown,
            top_competitors,
        };

        info!(
            niche,
            channels = total_unique_channels,
            level = %report.saturation_level,
            "competitor analysis complete"
        );

        Ok(CompetitorReport {
            report,
            performance: CompetitorPerformance {
                analysis_time_seconds: (start.elapsed().as_secs_f64() * 100.0).round() / 100.0,
                channels_analyzed: competitors.len(),
                scraper_calls: self.gateway.call_count(),
            },
            success: true,
            error_reason: None,
        })
    }
}

/// Estimate subscribers from average views. Larger channels convert a
/// smaller share of views into subscribers.
pub fn estimate_subscribers(total_views: u64, video_count: usize) -> u64 {
    if video_count == 0 {
        return 0;
    }
    let avg_views = total_views as f64 / video_count as f64;

    let ratio = if avg_views > 500_000.0 {
        0.05
    } else if avg_views > 50_000.0 {
        0.08
    } else if avg_views > 5_000.0 {
        0.12
    } else {
        0.15
    };

    (avg_views * ratio) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_subscriber_bands() {
        // avg 1M views -> 5%
        assert_eq!(estimate_subscribers(2_000_000, 2), 50_000);
        // avg 100k -> 8%
        assert_eq!(estimate_subscribers(200_000, 2), 8_000);
        // avg 10k -> 12%
        assert_eq!(estimate_subscribers(20_000, 2), 1_200);
        // avg 1k -> 15%
        assert_eq!(estimate_subscribers(2_000, 2), 150);
        assert_eq!(estimate_subscribers(1_000, 0), 0);
    }

    #[test]
    fn test_estimates_are_monotonic_in_views() {
        let mut last = 0;
        for views in [1_000u64, 10_000, 100_000, 1_000_000, 10_000_000] {
            let estimate = estimate_subscribers(views, 1);
            assert!(estimate >= last, "estimate dropped at {} views", views);
            last = estimate;
        }
    }
}
