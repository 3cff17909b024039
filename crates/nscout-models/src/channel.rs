//! Channel summaries and rising-star scores.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::ContentType;
use crate::search::SearchItem;

/// Subscriber-count tier of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubscriberTier {
    Micro,
    Small,
    Medium,
    Large,
}

impl SubscriberTier {
    /// Classify a subscriber count: micro < 1k, small < 10k, medium < 100k,
    /// large >= 100k.
    pub fn from_subscribers(subscribers: u64) -> Self {
        if subscribers >= 100_000 {
            SubscriberTier::Large
        } else if subscribers >= 10_000 {
            SubscriberTier::Medium
        } else if subscribers >= 1_000 {
            SubscriberTier::Small
        } else {
            SubscriberTier::Micro
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriberTier::Micro => "micro",
            SubscriberTier::Small => "small",
            SubscriberTier::Medium => "medium",
            SubscriberTier::Large => "large",
        }
    }
}

impl fmt::Display for SubscriberTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Channel-level metadata resolved from one of its uploads.
///
/// The scraper has no direct channel endpoint; this is extracted from the
/// first parseable record of a shallow playlist fetch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChannelInfo {
    pub id: String,
    pub title: String,
    pub subscribers: u64,
    /// Total channel views when the scraper reports them.
    pub total_views: Option<u64>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

/// Rising-star score breakdown.
///
/// `total` is the sum of the three sub-scores, bounded to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RisingStarScore {
    /// Views-per-subscriber viral potential, 0-40.
    pub viral: f64,
    /// Small-channel opportunity bonus, 0-30.
    pub size: f64,
    /// Sample activity, 0-30.
    pub activity: f64,
    pub total: f64,
}

impl RisingStarScore {
    pub fn new(viral: f64, size: f64, activity: f64) -> Self {
        let total = (viral + size + activity).clamp(0.0, 100.0);
        Self {
            viral,
            size,
            activity,
            total,
        }
    }
}

/// A channel aggregated from a video search, progressively enriched.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChannelSummary {
    pub id: String,
    pub name: String,
    pub url: String,
    /// Number of videos this channel contributed to the search sample.
    pub video_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_upload: Option<String>,
    /// Synthesized from one enriched video's views times the sample count.
    pub total_views: u64,
    /// Zero until enriched from a detailed video fetch.
    pub subscribers: u64,
    /// Zero until enriched.
    pub avg_duration_minutes: f64,
    pub has_long_videos: bool,
    pub content_type: ContentType,
    pub faceless_score: u32,
    pub copy_indicators: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rising_star_score: Option<RisingStarScore>,
    /// The sample videos, kept for content analysis.
    #[serde(skip)]
    pub videos: Vec<SearchItem>,
}

impl ChannelSummary {
    /// A fresh, unenriched summary for a channel first seen in a search.
    pub fn from_search(id: &str, name: &str, url: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            url: url.to_string(),
            video_count: 0,
            latest_upload: None,
            total_views: 0,
            subscribers: 0,
            avg_duration_minutes: 0.0,
            has_long_videos: false,
            content_type: ContentType::Unknown,
            faceless_score: 0,
            copy_indicators: Vec::new(),
            rising_star_score: None,
            videos: Vec::new(),
        }
    }
}
