//! Normalized search results from the scraper.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a search result item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Video,
    Channel,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Video => "video",
            ItemKind::Channel => "channel",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single normalized search result item.
///
/// Invariant: `kind` matches the shape of `id` (video id for videos,
/// channel id for channels).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    pub kind: ItemKind,
    /// Platform-native id of the item itself.
    pub id: String,
    pub title: String,
    pub channel_id: String,
    pub channel_title: String,
    /// Uploader handle, `@name` form, when the scraper reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_handle: Option<String>,
    pub channel_url: String,
    /// Truncated to at most 200 characters at normalization time.
    pub description: String,
    /// ISO-8601, UTC midnight of the scraper's YYYYMMDD upload date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Only present on video items, and only when the scraper reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
}

/// Result-count estimate for a search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_results: u64,
    pub results_per_page: u64,
}

/// Normalized output of one scraper search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub items: Vec<SearchItem>,
    pub page_info: PageInfo,
}

impl SearchResult {
    /// Items of video kind.
    pub fn videos(&self) -> impl Iterator<Item = &SearchItem> {
        self.items.iter().filter(|i| i.kind == ItemKind::Video)
    }

    /// Items of channel kind.
    pub fn channels(&self) -> impl Iterator<Item = &SearchItem> {
        self.items.iter().filter(|i| i.kind == ItemKind::Channel)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: ItemKind) -> SearchItem {
        SearchItem {
            kind,
            id: "abc".into(),
            title: "t".into(),
            channel_id: "UCx".into(),
            channel_title: "c".into(),
            channel_handle: None,
            channel_url: "https://www.youtube.com/channel/UCx".into(),
            description: String::new(),
            published_at: None,
            thumbnail_url: None,
            view_count: None,
        }
    }

    #[test]
    fn test_kind_filters() {
        let result = SearchResult {
            items: vec![item(ItemKind::Video), item(ItemKind::Channel), item(ItemKind::Video)],
            page_info: PageInfo {
                total_results: 300,
                results_per_page: 3,
            },
        };

        assert_eq!(result.videos().count(), 2);
        assert_eq!(result.channels().count(), 1);
    }

    #[test]
    fn test_item_kind_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&ItemKind::Video).unwrap(), "\"video\"");
        assert_eq!(serde_json::to_string(&ItemKind::Channel).unwrap(), "\"channel\"");
    }
}
