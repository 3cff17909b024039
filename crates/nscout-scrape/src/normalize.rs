//! Normalization of raw scraper records to the shared search schema.

use nscout_models::{upload_date_to_iso, ChannelInfo, ItemKind, PageInfo, SearchItem, SearchResult};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::command::SearchKind;

/// Maximum description length carried through normalization.
const MAX_DESCRIPTION_CHARS: usize = 200;

/// A raw flat-playlist record. Only the fields normalization needs;
/// everything is optional because the scraper's coverage varies by item.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub uploader: Option<String>,
    pub channel: Option<String>,
    pub uploader_id: Option<String>,
    pub channel_id: Option<String>,
    pub uploader_url: Option<String>,
    pub description: Option<String>,
    pub upload_date: Option<String>,
    pub thumbnail: Option<String>,
    pub view_count: Option<u64>,
    pub channel_follower_count: Option<u64>,
    pub channel_view_count: Option<u64>,
}

impl RawRecord {
    fn channel_title(&self) -> String {
        self.uploader
            .clone()
            .or_else(|| self.channel.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Channel URL from the `@` handle when available, else the channel id.
    fn channel_url(&self) -> String {
        match self.uploader_id.as_deref() {
            Some(handle) if !handle.is_empty() => {
                format!("https://www.youtube.com/{}", handle)
            }
            _ => format!(
                "https://www.youtube.com/channel/{}",
                self.channel_id.as_deref().unwrap_or_default()
            ),
        }
    }
}

/// Convert raw search records into the normalized result, capping at
/// `max_results` and dropping records without an id.
pub fn search_result(records: Vec<Value>, max_results: usize, kind: SearchKind) -> SearchResult {
    let mut items = Vec::new();

    for value in records.into_iter().take(max_results) {
        let raw: RawRecord = match serde_json::from_value(value) {
            Ok(raw) => raw,
            Err(err) => {
                debug!("Dropping unparseable search record: {}", err);
                continue;
            }
        };

        let Some(id) = raw.id.clone().filter(|id| !id.is_empty()) else {
            continue;
        };

        let item = match kind {
            SearchKind::Channel => channel_item(&raw, &id),
            _ => video_item(&raw, &id),
        };
        items.push(item);
    }

    let total_results = (items.len() as u64) * 100;
    let results_per_page = items.len() as u64;

    SearchResult {
        items,
        page_info: PageInfo {
            total_results,
            results_per_page,
        },
    }
}

fn video_item(raw: &RawRecord, id: &str) -> SearchItem {
    SearchItem {
        kind: ItemKind::Video,
        id: id.to_string(),
        title: raw.title.clone().unwrap_or_default(),
        channel_id: raw.channel_id.clone().unwrap_or_default(),
        channel_title: raw.channel_title(),
        channel_handle: raw.uploader_id.clone().filter(|h| !h.is_empty()),
        channel_url: raw.channel_url(),
        description: truncate_description(raw.description.as_deref()),
        published_at: raw
            .upload_date
            .as_deref()
            .and_then(|date| upload_date_to_iso(date).ok()),
        thumbnail_url: raw.thumbnail.clone(),
        view_count: raw.view_count,
    }
}

fn channel_item(raw: &RawRecord, fallback_id: &str) -> SearchItem {
    // Channel search lines describe uploads; the channel id is the stable
    // identity, with the record id as a last resort.
    let channel_id = raw
        .channel_id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| fallback_id.to_string());

    SearchItem {
        kind: ItemKind::Channel,
        id: channel_id.clone(),
        title: raw.channel_title(),
        channel_id,
        channel_title: raw.channel_title(),
        channel_handle: raw.uploader_id.clone().filter(|h| !h.is_empty()),
        channel_url: raw.channel_url(),
        description: truncate_description(raw.description.as_deref()),
        published_at: raw
            .upload_date
            .as_deref()
            .and_then(|date| upload_date_to_iso(date).ok()),
        thumbnail_url: raw.thumbnail.clone(),
        view_count: None,
    }
}

/// Extract channel-level metadata from the first parseable upload record.
pub fn channel_info(records: &[Value], channel_id: &str) -> Option<ChannelInfo> {
    for value in records {
        let raw: RawRecord = match serde_json::from_value(value.clone()) {
            Ok(raw) => raw,
            Err(_) => continue,
        };

        return Some(ChannelInfo {
            id: channel_id.to_string(),
            title: raw.channel_title(),
            subscribers: raw.channel_follower_count.unwrap_or(0),
            total_views: raw.channel_view_count,
            url: raw
                .uploader_url
                .clone()
                .unwrap_or_else(|| format!("https://www.youtube.com/channel/{}", channel_id)),
            published_at: raw
                .upload_date
                .as_deref()
                .and_then(|date| upload_date_to_iso(date).ok()),
        });
    }
    None
}

fn truncate_description(description: Option<&str>) -> String {
    description
        .unwrap_or_default()
        .chars()
        .take(MAX_DESCRIPTION_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_video(id: &str) -> Value {
        json!({
            "id": id,
            "title": "Learn AI in 10 minutes",
            "uploader": "AI Academy",
            "uploader_id": "@aiacademy",
            "channel_id": "UCabc",
            "description": "A quick intro.",
            "upload_date": "20240115",
            "thumbnail": "https://i.ytimg.com/vi/x/default.jpg",
            "view_count": 4200
        })
    }

    #[test]
    fn test_video_normalization() {
        let result = search_result(vec![raw_video("vid1")], 10, SearchKind::Video);
        assert_eq!(result.items.len(), 1);

        let item = &result.items[0];
        assert_eq!(item.kind, ItemKind::Video);
        assert_eq!(item.id, "vid1");
        assert_eq!(item.channel_id, "UCabc");
        assert_eq!(item.channel_title, "AI Academy");
        assert_eq!(item.channel_handle.as_deref(), Some("@aiacademy"));
        assert_eq!(item.channel_url, "https://www.youtube.com/@aiacademy");
        assert_eq!(item.view_count, Some(4200));
        assert!(item.published_at.as_deref().unwrap().starts_with("2024-01-15"));
    }

    #[test]
    fn test_channel_url_falls_back_to_channel_id() {
        let record = json!({"id": "vid1", "title": "t", "channel_id": "UCxyz"});
        let result = search_result(vec![record], 10, SearchKind::Video);
        assert_eq!(
            result.items[0].channel_url,
            "https://www.youtube.com/channel/UCxyz"
        );
    }

    #[test]
    fn test_description_truncated_to_200_chars() {
        let mut record = raw_video("vid1");
        record["description"] = json!("x".repeat(500));
        let result = search_result(vec![record], 10, SearchKind::Video);
        assert_eq!(result.items[0].description.chars().count(), 200);
    }

    #[test]
    fn test_records_without_id_dropped() {
        let records = vec![json!({"title": "no id"}), raw_video("vid1")];
        let result = search_result(records, 10, SearchKind::Video);
        assert_eq!(result.items.len(), 1);
    }

    #[test]
    fn test_max_results_cap_and_total_estimate() {
        let records: Vec<Value> = (0..5).map(|i| raw_video(&format!("v{}", i))).collect();
        let result = search_result(records, 3, SearchKind::Video);
        assert_eq!(result.items.len(), 3);
        assert_eq!(result.page_info.total_results, 300);
        assert_eq!(result.page_info.results_per_page, 3);
    }

    #[test]
    fn test_channel_kind_items_use_channel_identity() {
        let result = search_result(vec![raw_video("vid1")], 10, SearchKind::Channel);
        let item = &result.items[0];
        assert_eq!(item.kind, ItemKind::Channel);
        assert_eq!(item.id, "UCabc");
        assert_eq!(item.title, "AI Academy");
        assert_eq!(item.view_count, None);
    }

    #[test]
    fn test_channel_info_from_first_record() {
        let records = vec![
            json!({
                "id": "vid1",
                "uploader": "AI Academy",
                "channel_follower_count": 15000,
                "channel_view_count": 2000000,
                "uploader_url": "https://www.youtube.com/@aiacademy",
                "upload_date": "20240110"
            }),
            json!({"id": "vid2"}),
        ];

        let info = channel_info(&records, "UCabc").unwrap();
        assert_eq!(info.id, "UCabc");
        assert_eq!(info.title, "AI Academy");
        assert_eq!(info.subscribers, 15000);
        assert_eq!(info.total_views, Some(2000000));
        assert_eq!(info.url, "https://www.youtube.com/@aiacademy");
    }

    #[test]
    fn test_channel_info_none_when_no_records() {
        assert!(channel_info(&[], "UCabc").is_none());
    }
}
