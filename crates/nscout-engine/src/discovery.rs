//! Rising-star channel discovery.
//!
//! One video search supplies the channel sample; only the most active
//! channels are enriched with a detailed video fetch, then every channel is
//! classified, filtered by long-form duration, scored, and ranked.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use nscout_models::{ChannelSummary, RisingStarScore};
use nscout_scrape::ScraperGateway;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::content_type::{ContentTypeAnalyzer, VideoSample};
use crate::error::{EngineError, EngineResult};

/// Channels enriched with a detailed video fetch, by sample count.
const ENRICH_LIMIT: usize = 10;
/// Minimum rising-star total to keep a channel.
const SCORE_THRESHOLD: f64 = 50.0;
/// Channels returned.
const TOP_CHANNELS: usize = 10;

/// Summary block of a discovery run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DiscoveryAnalysis {
    pub total_channels_found: usize,
    pub rising_stars_identified: usize,
    pub best_opportunity: Option<String>,
    /// Channels dropped by the long-form duration filter.
    pub filtered_by_duration: usize,
    pub analysis_time_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,
}

/// Result of a discovery run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RisingStarsReport {
    pub niche: String,
    pub channels: Vec<ChannelSummary>,
    pub analysis: DiscoveryAnalysis,
    pub success: bool,
}

impl RisingStarsReport {
    /// Empty report for the failure path.
    pub fn empty(niche: &str, reason: impl Into<String>) -> Self {
        Self {
            niche: niche.to_string(),
            channels: Vec::new(),
            analysis: DiscoveryAnalysis {
                total_channels_found: 0,
                rising_stars_identified: 0,
                best_opportunity: None,
                filtered_by_duration: 0,
                analysis_time_seconds: 0.0,
                error_reason: Some(reason.into()),
            },
            success: false,
        }
    }
}

/// Finds small channels with disproportionate engagement.
pub struct RisingStarFinder {
    gateway: Arc<ScraperGateway>,
    analyzer: ContentTypeAnalyzer,
    /// Politeness delay between enrichment calls.
    enrich_delay: Duration,
}

impl RisingStarFinder {
    pub fn new(gateway: Arc<ScraperGateway>, enrich_delay: Duration) -> Self {
        Self {
            gateway,
            analyzer: ContentTypeAnalyzer::new(),
            enrich_delay,
        }
    }

    /// Discover rising stars for a niche.
    ///
    /// `min_duration_minutes > 0` drops channels whose average sample
    /// duration falls short; unenriched channels have no duration data and
    /// are dropped with them.
    pub async fn find(
        &self,
        niche: &str,
        max_results: usize,
        min_duration_minutes: u32,
    ) -> EngineResult<RisingStarsReport> {
        let start = Instant::now();
        info!(niche, max_results, min_duration_minutes, "finding rising stars");

        let videos = self.gateway.search_videos(niche, max_results).await?;
        if videos.is_empty() {
            return Err(EngineError::NoResults);
        }

        // Aggregate the sample by channel.
        let mut channels: HashMap<String, ChannelSummary> = HashMap::new();
        for video in videos {
            if video.channel_id.is_empty() {
                continue;
            }

            let summary = channels.entry(video.channel_id.clone()).or_insert_with(|| {
                ChannelSummary::from_search(&video.channel_id, &video.channel_title, &video.channel_url)
            });

            summary.video_count += 1;
            if let Some(published) = &video.published_at {
                // RFC 3339 strings in UTC compare lexicographically.
                if summary
                    .latest_upload
                    .as_deref()
                    .map_or(true, |latest| published.as_str() > latest)
                {
                    summary.latest_upload = Some(published.clone());
                }
            }
            summary.videos.push(video);
        }
        let total_channels_found = channels.len();

        // Enrich the most active channels with one detailed video fetch.
        let mut order: Vec<String> = channels.keys().cloned().collect();
        order.sort_by_key(|id| std::cmp::Reverse(channels[id].video_count));

        let enrich_ids: Vec<String> = order.iter().take(ENRICH_LIMIT).cloned().collect();
        for (i, id) in enrich_ids.iter().enumerate() {
            let summary = channels.get_mut(id).expect("aggregated channel");
            if let Err(err) = self.enrich(summary).await {
                warn!(channel = id.as_str(), "enrichment failed: {}", err);
            }
            if i + 1 < enrich_ids.len() {
                tokio::time::sleep(self.enrich_delay).await;
            }
        }

        // Classify content type from the aggregated sample.
        for summary in channels.values_mut() {
            let samples: Vec<VideoSample> = summary
                .videos
                .iter()
                .map(|v| VideoSample::new(v.title.clone(), v.description.clone()))
                .collect();
            let verdict = self.analyzer.analyze(&summary.name, "", &samples);

            summary.content_type = verdict.content_type;
            summary.faceless_score = verdict.faceless_score;
            summary.copy_indicators = verdict.copy_indicators;
            if summary.avg_duration_minutes == 0.0 {
                summary.avg_duration_minutes = verdict.avg_duration_minutes;
            }
            summary.has_long_videos = summary.avg_duration_minutes >= min_duration_minutes as f64;
        }

        // Filter by duration, score, and rank.
        let mut filtered_by_duration = 0usize;
        let mut rising_stars: Vec<ChannelSummary> = Vec::new();
        for (_, mut summary) in channels {
            if min_duration_minutes > 0 && !summary.has_long_videos {
                debug!(channel = summary.name.as_str(), "filtered by duration");
                filtered_by_duration += 1;
                continue;
            }

            let score = rising_star_score(summary.subscribers, summary.total_views, summary.video_count);
            if score.total < SCORE_THRESHOLD {
                continue;
            }
            summary.rising_star_score = Some(score);
            rising_stars.push(summary);
        }

        rising_stars.sort_by(|a, b| {
            let a_total = a.rising_star_score.map(|s| s.total).unwrap_or(0.0);
            let b_total = b.rising_star_score.map(|s| s.total).unwrap_or(0.0);
            b_total.total_cmp(&a_total)
        });
        rising_stars.truncate(TOP_CHANNELS);

        let analysis = DiscoveryAnalysis {
            total_channels_found,
            rising_stars_identified: rising_stars.len(),
            best_opportunity: rising_stars.first().map(|c| c.name.clone()),
            filtered_by_duration,
            analysis_time_seconds: round2(start.elapsed().as_secs_f64()),
            error_reason: None,
        };

        info!(
            niche,
            found = total_channels_found,
            rising = rising_stars.len(),
            filtered = filtered_by_duration,
            "rising-star discovery complete"
        );

        Ok(RisingStarsReport {
            niche: niche.to_string(),
            channels: rising_stars,
            analysis,
            success: true,
        })
    }

    /// Fetch one sample video's details to seed subscribers, synthesized
    /// total views, and the duration estimate.
    async fn enrich(&self, summary: &mut ChannelSummary) -> EngineResult<()> {
        let Some(first_video) = summary.videos.first() else {
            return Ok(());
        };
        let video_url = format!("https://www.youtube.com/watch?v={}", first_video.id);

        let info = self.gateway.get_video_info(&video_url).await?;
        summary.subscribers = info.channel_follower_count.unwrap_or(0);
        if let Some(views) = info.view_count {
            summary.total_views = views.saturating_mul(summary.video_count as u64);
        }
        if info.duration > 0.0 {
            summary.avg_duration_minutes = (info.duration / 60.0 * 10.0).round() / 10.0;
        }
        Ok(())
    }
}

/// Rising-star score: viral potential (40) + size opportunity (30) +
/// sample activity (30).
pub fn rising_star_score(subscribers: u64, total_views: u64, video_count: usize) -> RisingStarScore {
    let viral = if subscribers > 0 {
        (total_views as f64 / subscribers as f64 / 10.0).min(40.0)
    } else {
        // Unknown subscribers, moderate score.
        20.0
    };

    let size = if subscribers == 0 {
        25.0
    } else if subscribers < 10_000 {
        30.0
    } else if subscribers < 50_000 {
        25.0
    } else if subscribers < 100_000 {
        20.0
    } else {
        10.0
    };

    let activity = if video_count >= 5 {
        30.0
    } else if video_count >= 3 {
        25.0
    } else if video_count >= 2 {
        20.0
    } else {
        15.0
    };

    RisingStarScore::new(viral, size, activity)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viral_score_monotonic_in_views() {
        let mut last = 0.0;
        for views in [0u64, 10_000, 100_000, 1_000_000, 10_000_000] {
            let score = rising_star_score(5_000, views, 3);
            assert!(score.viral >= last, "viral dropped at {} views", views);
            last = score.viral;
        }
    }

    #[test]
    fn test_viral_capped_at_40() {
        let score = rising_star_score(10, 1_000_000_000, 3);
        assert_eq!(score.viral, 40.0);
    }

    #[test]
    fn test_unknown_subscribers_get_moderate_viral() {
        let score = rising_star_score(0, 500_000, 3);
        assert_eq!(score.viral, 20.0);
        assert_eq!(score.size, 25.0);
    }

    #[test]
    fn test_size_bands() {
        assert_eq!(rising_star_score(0, 0, 1).size, 25.0);
        assert_eq!(rising_star_score(9_999, 0, 1).size, 30.0);
        assert_eq!(rising_star_score(49_999, 0, 1).size, 25.0);
        assert_eq!(rising_star_score(99_999, 0, 1).size, 20.0);
        assert_eq!(rising_star_score(100_000, 0, 1).size, 10.0);
    }

    #[test]
    fn test_activity_bands() {
        assert_eq!(rising_star_score(1, 0, 5).activity, 30.0);
        assert_eq!(rising_star_score(1, 0, 4).activity, 25.0);
        assert_eq!(rising_star_score(1, 0, 2).activity, 20.0);
        assert_eq!(rising_star_score(1, 0, 1).activity, 15.0);
    }

    #[test]
    fn test_total_is_bounded_sum() {
        let score = rising_star_score(5_000, 10_000_000, 6);
        assert_eq!(score.total, (score.viral + score.size + score.activity).min(100.0));
        assert!(score.total <= 100.0);
    }

    #[test]
    fn test_small_active_viral_channel_clears_threshold() {
        // 8k subscribers, 2M synthesized views, 5 sample videos.
        let score = rising_star_score(8_000, 2_000_000, 5);
        assert!(score.total >= 85.0);
    }

    #[test]
    fn test_empty_report_shape() {
        let report = RisingStarsReport::empty("ai tutorials", "No video search results found");
        assert!(!report.success);
        assert_eq!(report.analysis.total_channels_found, 0);
        assert!(report.channels.is_empty());
        assert!(report.analysis.error_reason.is_some());
    }
}
