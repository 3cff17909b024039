//! Content-type classification of a channel.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content style of a channel, inferred from metadata alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    FacelessVoiceover,
    Compilation,
    ScreenRecording,
    Tutorial,
    PossiblyFaceless,
    #[default]
    Unknown,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::FacelessVoiceover => "faceless_voiceover",
            ContentType::Compilation => "compilation",
            ContentType::ScreenRecording => "screen_recording",
            ContentType::Tutorial => "tutorial",
            ContentType::PossiblyFaceless => "possibly_faceless",
            ContentType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of the metadata-only content-type analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContentTypeVerdict {
    /// 0-100 likelihood of faceless content.
    pub faceless_score: u32,
    pub content_type: ContentType,
    /// Matched keyword indicators, deduplicated.
    pub copy_indicators: Vec<String>,
    /// Average sample video duration; zero when no duration data.
    pub avg_duration_minutes: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ContentType::FacelessVoiceover).unwrap(),
            "\"faceless_voiceover\""
        );
        assert_eq!(
            serde_json::to_string(&ContentType::PossiblyFaceless).unwrap(),
            "\"possibly_faceless\""
        );
    }
}
