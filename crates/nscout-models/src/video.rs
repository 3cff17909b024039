//! Rich per-video metadata from the scraper.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Detailed video metadata as reported by a full (non-flat) scrape of a
/// single video URL.
///
/// Field names match the scraper's JSON output so records deserialize
/// directly; anything the scraper omits falls back to the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VideoInfo {
    /// Duration in seconds.
    pub duration: f64,
    pub view_count: Option<u64>,
    pub uploader: String,
    /// May carry a leading `@` handle marker.
    pub uploader_id: Option<String>,
    pub uploader_url: Option<String>,
    pub channel_id: Option<String>,
    /// Subscriber count of the uploading channel.
    pub channel_follower_count: Option<u64>,
    /// Total channel views; the scraper does not always report this.
    pub channel_view_count: Option<u64>,
    /// Scraper-native `YYYYMMDD` form.
    pub upload_date: Option<String>,
    pub description: String,
}

impl VideoInfo {
    /// Duration in whole minutes, rounded down.
    pub fn duration_minutes(&self) -> f64 {
        self.duration / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_minutes() {
        let info = VideoInfo {
            duration: 2712.0,
            ..Default::default()
        };
        assert!((info.duration_minutes() - 45.2).abs() < 1e-9);
    }
}
