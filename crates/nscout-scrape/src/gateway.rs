//! Cache-aware scraper gateway.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use nscout_cache::{cache_key, TtlCache};
use nscout_models::{ChannelInfo, SearchItem, SearchResult, VideoInfo};
use serde_json::json;
use tracing::{debug, info};

use crate::command::{SearchKind, YtdlpRequest, YtdlpRunner};
use crate::error::{ScrapeError, ScrapeResult};
use crate::normalize;

/// Default subprocess wall-clock budget.
pub const DEFAULT_SCRAPER_TIMEOUT: Duration = Duration::from_secs(30);

const SCRAPER_CALLS_METRIC: &str = "nscout_scraper_calls_total";

/// Gateway over the external scraping tool.
///
/// All four operations share the cache and a monotonic call counter; the
/// counter tracks actual subprocess runs, not cache hits.
pub struct ScraperGateway {
    cache: Arc<TtlCache>,
    runner: YtdlpRunner,
    call_count: AtomicU64,
}

impl ScraperGateway {
    pub fn new(cache: Arc<TtlCache>, timeout: Duration) -> Self {
        Self {
            cache,
            runner: YtdlpRunner::new(timeout),
            call_count: AtomicU64::new(0),
        }
    }

    /// Subprocess invocations so far.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    fn record_call(&self) {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        counter!(SCRAPER_CALLS_METRIC).increment(1);
    }

    /// Search for up to `max_results` items and normalize the records.
    pub async fn search(
        &self,
        query: &str,
        max_results: usize,
        kind: SearchKind,
    ) -> ScrapeResult<SearchResult> {
        let key = cache_key(
            "ytdlp_search",
            &json!({
                "query": query,
                "max_results": max_results,
                "type": kind.as_str(),
            }),
        );

        if let Some(cached) = self.cache.get_json::<SearchResult>(&key).await {
            debug!(query, "using cached search result");
            return Ok(cached);
        }

        info!(query, max_results, kind = kind.as_str(), "searching via scraper");
        let output = self
            .runner
            .run(&YtdlpRequest::Search {
                query: query.to_string(),
                max_results,
                kind,
            })
            .await?;
        self.record_call();

        let records = output.json_lines();
        if records.is_empty() {
            return Err(ScrapeError::Empty);
        }

        let result = normalize::search_result(records, max_results, kind);
        self.cache.set_json(&key, &result).await;
        Ok(result)
    }

    /// Resolve a channel id to channel-level metadata.
    ///
    /// The id may be the platform-native `UC` form, a handle with a leading
    /// `@`, or a bare handle.
    pub async fn get_channel(&self, channel_id: &str) -> ScrapeResult<ChannelInfo> {
        let key = cache_key("ytdlp_channel", &json!({ "channel_id": channel_id }));

        if let Some(cached) = self.cache.get_json::<ChannelInfo>(&key).await {
            debug!(channel_id, "using cached channel info");
            return Ok(cached);
        }

        let url = resolve_channel_url(channel_id);
        info!(channel_id, url = %url, "fetching channel via scraper");
        let output = self.runner.run(&YtdlpRequest::Channel { url }).await?;
        self.record_call();

        let records = output.json_lines();
        let info = normalize::channel_info(&records, channel_id)
            .ok_or_else(|| ScrapeError::ChannelUnavailable(channel_id.to_string()))?;

        self.cache.set_json(&key, &info).await;
        Ok(info)
    }

    /// Rich metadata for one video URL.
    pub async fn get_video_info(&self, video_url: &str) -> ScrapeResult<VideoInfo> {
        let key = cache_key("ytdlp_video", &json!({ "url": video_url }));

        if let Some(cached) = self.cache.get_json::<VideoInfo>(&key).await {
            debug!(video_url, "using cached video info");
            return Ok(cached);
        }

        info!(video_url, "fetching video info via scraper");
        let output = self
            .runner
            .run(&YtdlpRequest::Video {
                url: video_url.to_string(),
            })
            .await?;
        self.record_call();

        // A single-video dump is one JSON document; tolerate trailing noise
        // by falling back to per-line parsing.
        let info: VideoInfo = serde_json::from_str(output.stdout.trim())
            .ok()
            .or_else(|| {
                output
                    .json_lines()
                    .into_iter()
                    .next()
                    .and_then(|value| serde_json::from_value(value).ok())
            })
            .ok_or(ScrapeError::Empty)?;

        self.cache.set_json(&key, &info).await;
        Ok(info)
    }

    /// Convenience view: search and keep only video items.
    pub async fn search_videos(&self, query: &str, max_results: usize) -> ScrapeResult<Vec<SearchItem>> {
        let result = self.search(query, max_results, SearchKind::Video).await?;
        Ok(result.videos().cloned().collect())
    }
}

/// Build the channel URL for the id forms the scraper understands.
fn resolve_channel_url(channel_id: &str) -> String {
    if let Some(handle) = channel_id.strip_prefix('@') {
        format!("https://www.youtube.com/@{}", handle)
    } else if channel_id.starts_with("UC") {
        format!("https://www.youtube.com/channel/{}", channel_id)
    } else {
        // Assume a bare handle.
        format!("https://www.youtube.com/@{}", channel_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_channel_url_forms() {
        assert_eq!(
            resolve_channel_url("@somebody"),
            "https://www.youtube.com/@somebody"
        );
        assert_eq!(
            resolve_channel_url("UCabc123"),
            "https://www.youtube.com/channel/UCabc123"
        );
        assert_eq!(
            resolve_channel_url("somebody"),
            "https://www.youtube.com/@somebody"
        );
    }

    #[tokio::test]
    async fn test_cached_search_is_returned_without_subprocess() {
        let cache = Arc::new(TtlCache::default());
        let gateway = ScraperGateway::new(Arc::clone(&cache), DEFAULT_SCRAPER_TIMEOUT);

        // Seed the cache under the exact key the gateway derives.
        let key = cache_key(
            "ytdlp_search",
            &json!({"query": "ai", "max_results": 5, "type": "video"}),
        );
        let seeded = SearchResult {
            items: Vec::new(),
            page_info: nscout_models::PageInfo {
                total_results: 0,
                results_per_page: 0,
            },
        };
        cache.set_json(&key, &seeded).await;

        let result = gateway.search("ai", 5, SearchKind::Video).await.unwrap();
        assert!(result.items.is_empty());
        // The subprocess never ran.
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_cached_video_info_round_trips() {
        let cache = Arc::new(TtlCache::default());
        let gateway = ScraperGateway::new(Arc::clone(&cache), DEFAULT_SCRAPER_TIMEOUT);

        let key = cache_key("ytdlp_video", &json!({"url": "https://youtu.be/x"}));
        let info = VideoInfo {
            duration: 120.0,
            uploader: "Someone".into(),
            channel_follower_count: Some(500),
            ..Default::default()
        };
        cache.set_json(&key, &info).await;

        let fetched = gateway.get_video_info("https://youtu.be/x").await.unwrap();
        assert_eq!(fetched.duration, 120.0);
        assert_eq!(fetched.channel_follower_count, Some(500));
        assert_eq!(gateway.call_count(), 0);
    }
}
