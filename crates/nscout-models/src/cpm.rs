//! CPM (revenue per thousand views) estimates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the estimator arrived at a category match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CpmMatchType {
    /// A category keyword phrase occurs verbatim in the niche.
    Exact,
    /// A keyword's word set is a subset of the niche's words.
    ExactWords,
    /// Token-set-ratio similarity above threshold.
    Fuzzy,
    /// Keyword/niche containment or a long keyword word in the niche.
    Substring,
    /// Caller-provided category hint resolved via the fallback table.
    Category,
    /// Category inferred from common words in the niche.
    Inferred,
    /// Global default.
    Default,
}

impl CpmMatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CpmMatchType::Exact => "exact",
            CpmMatchType::ExactWords => "exact_words",
            CpmMatchType::Fuzzy => "fuzzy",
            CpmMatchType::Substring => "substring",
            CpmMatchType::Category => "category",
            CpmMatchType::Inferred => "inferred",
            CpmMatchType::Default => "default",
        }
    }
}

impl fmt::Display for CpmMatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CPM tier used in monetization provenance strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CpmTier {
    Premium,
    Strong,
    Moderate,
    ScaleBased,
}

impl CpmTier {
    /// Tier 1 at >= $10, Tier 2 at >= $4, Tier 3 at >= $2, else Tier 4.
    pub fn from_cpm(cpm: f64) -> Self {
        if cpm >= 10.0 {
            CpmTier::Premium
        } else if cpm >= 4.0 {
            CpmTier::Strong
        } else if cpm >= 2.0 {
            CpmTier::Moderate
        } else {
            CpmTier::ScaleBased
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CpmTier::Premium => "Tier 1: Premium",
            CpmTier::Strong => "Tier 2: Strong",
            CpmTier::Moderate => "Tier 3: Moderate",
            CpmTier::ScaleBased => "Tier 4: Scale-based",
        }
    }
}

impl fmt::Display for CpmTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Multipliers applied to the base CPM.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CpmAdjustments {
    pub geographic_multiplier: f64,
    pub seasonal_multiplier: f64,
    pub country: String,
    pub month: u32,
}

/// A CPM estimate with provenance.
///
/// `cpm = base_cpm * geographic_multiplier * seasonal_multiplier`; the range
/// is scaled in parallel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CpmEstimate {
    pub base_cpm: f64,
    pub cpm: f64,
    pub cpm_range: (f64, f64),
    /// 0.0 - 1.0 confidence in the category match.
    pub confidence: f64,
    /// Data source citation for the matched category.
    pub source: String,
    pub match_type: CpmMatchType,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_keyword: Option<String>,
    pub adjustments: CpmAdjustments,
}

impl CpmEstimate {
    pub fn tier(&self) -> CpmTier {
        CpmTier::from_cpm(self.cpm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(CpmTier::from_cpm(12.0), CpmTier::Premium);
        assert_eq!(CpmTier::from_cpm(10.0), CpmTier::Premium);
        assert_eq!(CpmTier::from_cpm(9.99), CpmTier::Strong);
        assert_eq!(CpmTier::from_cpm(4.0), CpmTier::Strong);
        assert_eq!(CpmTier::from_cpm(2.0), CpmTier::Moderate);
        assert_eq!(CpmTier::from_cpm(1.5), CpmTier::ScaleBased);
    }
}
