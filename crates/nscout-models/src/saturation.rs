//! Competitor saturation reports.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::channel::SubscriberTier;

/// Market saturation level for a niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum SaturationLevel {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl SaturationLevel {
    /// Classify from the number of unique channels seen in one search page:
    /// low < 10, medium < 50, high otherwise.
    pub fn from_channel_count(count: usize) -> Self {
        if count < 10 {
            SaturationLevel::Low
        } else if count < 50 {
            SaturationLevel::Medium
        } else {
            SaturationLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SaturationLevel::Low => "low",
            SaturationLevel::Medium => "medium",
            SaturationLevel::High => "high",
            SaturationLevel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SaturationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Channel counts per subscriber tier.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
pub struct TierBreakdown {
    pub micro: usize,
    pub small: usize,
    pub medium: usize,
    pub large: usize,
}

impl TierBreakdown {
    pub fn add(&mut self, tier: SubscriberTier) {
        match tier {
            SubscriberTier::Micro => self.micro += 1,
            SubscriberTier::Small => self.small += 1,
            SubscriberTier::Medium => self.medium += 1,
            SubscriberTier::Large => self.large += 1,
        }
    }
}

/// An enriched competitor channel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompetitorChannel {
    pub name: String,
    pub id: String,
    pub subscribers: u64,
    pub avg_views: u64,
    pub video_count: usize,
    pub total_views: u64,
    pub subscriber_tier: SubscriberTier,
}

/// Saturation snapshot for a niche.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SaturationReport {
    pub niche: String,
    pub saturation_level: SaturationLevel,
    /// The raw unique-channel count behind the level.
    pub saturation_score: usize,
    pub channel_count: usize,
    pub tier_breakdown: TierBreakdown,
    pub top_competitors: Vec<CompetitorChannel>,
}

impl SaturationReport {
    /// Empty report for the no-results path.
    pub fn empty(niche: &str) -> Self {
        Self {
            niche: niche.to_string(),
            saturation_level: SaturationLevel::Unknown,
            saturation_score: 0,
            channel_count: 0,
            tier_breakdown: TierBreakdown::default(),
            top_competitors: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturation_thresholds() {
        assert_eq!(SaturationLevel::from_channel_count(0), SaturationLevel::Low);
        assert_eq!(SaturationLevel::from_channel_count(9), SaturationLevel::Low);
        assert_eq!(SaturationLevel::from_channel_count(10), SaturationLevel::Medium);
        assert_eq!(SaturationLevel::from_channel_count(49), SaturationLevel::Medium);
        assert_eq!(SaturationLevel::from_channel_count(50), SaturationLevel::High);
    }

    #[test]
    fn test_tier_breakdown_counts() {
        let mut breakdown = TierBreakdown::default();
        breakdown.add(SubscriberTier::Micro);
        breakdown.add(SubscriberTier::Large);
        breakdown.add(SubscriberTier::Large);
        assert_eq!(breakdown.micro, 1);
        assert_eq!(breakdown.large, 2);
        assert_eq!(breakdown.small, 0);
    }
}
