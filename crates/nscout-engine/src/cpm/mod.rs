//! CPM estimation with hierarchical fuzzy matching.
//!
//! The cascade stops at the first strategy that produces a match:
//! exact phrase / word-set, token-set fuzzy, substring, caller category
//! hint, inferred category, global default. Geographic and seasonal
//! multipliers are applied after matching.

pub mod database;
pub mod matching;

use chrono::{Datelike, Utc};
use nscout_models::{CpmAdjustments, CpmEstimate, CpmMatchType};
use tracing::debug;

use database::{
    category_fallback, geographic_multiplier, seasonal_multiplier, CpmCategory, CATEGORY_HINTS,
    CPM_DATABASE, DEFAULT_CPM, DEFAULT_CPM_RANGE,
};
use matching::{token_set_ratio, words};

/// Fuzzy-match acceptance threshold.
const FUZZY_THRESHOLD: f64 = 80.0;

/// Estimation options.
#[derive(Debug, Clone)]
pub struct CpmOptions {
    /// Optional caller-provided category hint for the cascade's level 4.
    pub category_hint: Option<String>,
    /// Viewer country for the geographic multiplier.
    pub country_code: String,
    pub apply_geographic: bool,
    pub apply_seasonal: bool,
    /// Month override (1-12); the current month when `None`.
    pub month: Option<u32>,
}

impl Default for CpmOptions {
    fn default() -> Self {
        Self {
            category_hint: None,
            country_code: "US".to_string(),
            apply_geographic: true,
            apply_seasonal: true,
            month: None,
        }
    }
}

impl CpmOptions {
    /// Options with both multipliers disabled (identity adjustments).
    pub fn base() -> Self {
        Self {
            apply_geographic: false,
            apply_seasonal: false,
            ..Self::default()
        }
    }
}

struct MatchDraft {
    base_cpm: f64,
    cpm_range: (f64, f64),
    confidence: f64,
    source: String,
    match_type: CpmMatchType,
    category: String,
    matched_keyword: Option<String>,
}

impl MatchDraft {
    fn from_category(
        category: &CpmCategory,
        confidence: f64,
        match_type: CpmMatchType,
        matched_keyword: Option<&str>,
    ) -> Self {
        Self {
            base_cpm: category.avg_cpm,
            cpm_range: category.cpm_range,
            confidence,
            source: category.source.to_string(),
            match_type,
            category: category.name.to_string(),
            matched_keyword: matched_keyword.map(str::to_string),
        }
    }

    fn from_fallback(name: &str, cpm: f64, confidence: f64, match_type: CpmMatchType) -> Self {
        Self {
            base_cpm: cpm,
            cpm_range: (cpm * 0.7, cpm * 1.3),
            confidence,
            source: format!("Category fallback ({})", name),
            match_type,
            category: name.to_string(),
            matched_keyword: None,
        }
    }
}

/// Maps niche text to a revenue tier via the match cascade.
pub struct CpmEstimator {
    /// Flattened (keyword, database index) pairs for the fuzzy and
    /// substring passes.
    keywords: Vec<(&'static str, usize)>,
}

impl CpmEstimator {
    pub fn new() -> Self {
        let keywords = CPM_DATABASE
            .iter()
            .enumerate()
            .flat_map(|(idx, category)| category.keywords.iter().map(move |kw| (*kw, idx)))
            .collect();
        Self { keywords }
    }

    /// Estimate the CPM for a niche phrase.
    pub fn estimate(&self, niche: &str, options: &CpmOptions) -> CpmEstimate {
        let niche_lower = niche.trim().to_lowercase();
        let niche_words = words(&niche_lower);

        let draft = self
            .exact_match(&niche_lower, &niche_words)
            .or_else(|| self.fuzzy_match(&niche_lower))
            .or_else(|| self.substring_match(&niche_lower))
            .or_else(|| {
                options
                    .category_hint
                    .as_deref()
                    .and_then(Self::category_hint_match)
            })
            .or_else(|| Self::inferred_match(&niche_words))
            .unwrap_or_else(|| MatchDraft {
                base_cpm: DEFAULT_CPM,
                cpm_range: DEFAULT_CPM_RANGE,
                confidence: 0.30,
                source: "Global YouTube average".to_string(),
                match_type: CpmMatchType::Default,
                category: "unknown".to_string(),
                matched_keyword: None,
            });

        debug!(
            niche = %niche_lower,
            category = %draft.category,
            match_type = %draft.match_type,
            "cpm match"
        );
        apply_adjustments(draft, options)
    }

    /// Base estimate with identity adjustments.
    pub fn estimate_base(&self, niche: &str) -> CpmEstimate {
        self.estimate(niche, &CpmOptions::base())
    }

    /// Level 1: keyword phrase contained in the niche, or keyword word set
    /// a subset of the niche's words. Longest match wins.
    fn exact_match(&self, niche_lower: &str, niche_words: &[String]) -> Option<MatchDraft> {
        let mut best: Option<(usize, &'static str, CpmMatchType, usize)> = None;

        for (keyword, idx) in &self.keywords {
            let kw_lower = keyword.to_lowercase();

            if niche_lower.contains(&kw_lower) {
                let score = kw_lower.len();
                if best.map_or(true, |(_, _, _, s)| score > s) {
                    best = Some((*idx, *keyword, CpmMatchType::Exact, score));
                }
            } else {
                let kw_words = words(&kw_lower);
                if !kw_words.is_empty() && kw_words.iter().all(|w| niche_words.contains(w)) {
                    let score = kw_words.len();
                    if best.map_or(true, |(_, _, _, s)| score > s) {
                        best = Some((*idx, *keyword, CpmMatchType::ExactWords, score));
                    }
                }
            }
        }

        best.map(|(idx, keyword, match_type, _)| {
            let confidence = match match_type {
                CpmMatchType::Exact => 0.95,
                _ => 0.90,
            };
            MatchDraft::from_category(&CPM_DATABASE[idx], confidence, match_type, Some(keyword))
        })
    }

    /// Level 2: token-set-ratio similarity against every keyword.
    fn fuzzy_match(&self, niche_lower: &str) -> Option<MatchDraft> {
        let (keyword, idx, score) = self
            .keywords
            .iter()
            .map(|(kw, idx)| (*kw, *idx, token_set_ratio(niche_lower, kw)))
            .max_by(|a, b| a.2.total_cmp(&b.2))?;

        if score < FUZZY_THRESHOLD {
            return None;
        }

        let confidence = score / 100.0 * 0.85;
        Some(MatchDraft::from_category(
            &CPM_DATABASE[idx],
            confidence,
            CpmMatchType::Fuzzy,
            Some(keyword),
        ))
    }

    /// Level 3: containment either direction, or any keyword word longer
    /// than three characters occurring in the niche.
    fn substring_match(&self, niche_lower: &str) -> Option<MatchDraft> {
        let mut best: Option<(&'static str, usize, usize)> = None;

        for (keyword, idx) in &self.keywords {
            let kw_lower = keyword.to_lowercase();
            if kw_lower.contains(niche_lower) || niche_lower.contains(&kw_lower) {
                if best.map_or(true, |(_, _, len)| kw_lower.len() > len) {
                    best = Some((*keyword, *idx, kw_lower.len()));
                }
            } else {
                for word in kw_lower.split_whitespace() {
                    if word.len() > 3 && niche_lower.contains(word) {
                        if best.map_or(true, |(_, _, len)| word.len() > len) {
                            best = Some((*keyword, *idx, word.len()));
                        }
                    }
                }
            }
        }

        best.map(|(keyword, idx, _)| {
            MatchDraft::from_category(&CPM_DATABASE[idx], 0.70, CpmMatchType::Substring, Some(keyword))
        })
    }

    /// Level 4: caller-provided category hint via the fallback table.
    fn category_hint_match(hint: &str) -> Option<MatchDraft> {
        category_fallback(hint)
            .map(|(name, cpm)| MatchDraft::from_fallback(name, cpm, 0.60, CpmMatchType::Category))
    }

    /// Level 5: infer a parent category from common words.
    fn inferred_match(niche_words: &[String]) -> Option<MatchDraft> {
        for word in niche_words {
            for (hint, category) in CATEGORY_HINTS {
                if word.contains(hint) {
                    return category_fallback(category).map(|(name, cpm)| {
                        MatchDraft::from_fallback(name, cpm, 0.60, CpmMatchType::Inferred)
                    });
                }
            }
        }
        None
    }
}

impl Default for CpmEstimator {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_adjustments(draft: MatchDraft, options: &CpmOptions) -> CpmEstimate {
    let country = options.country_code.to_uppercase();
    let month = options.month.unwrap_or_else(|| Utc::now().month());

    let geo = if options.apply_geographic {
        geographic_multiplier(&country)
    } else {
        1.0
    };
    let seasonal = if options.apply_seasonal {
        seasonal_multiplier(month)
    } else {
        1.0
    };

    let round2 = |v: f64| (v * 100.0).round() / 100.0;

    CpmEstimate {
        base_cpm: draft.base_cpm,
        cpm: round2(draft.base_cpm * geo * seasonal),
        cpm_range: (
            round2(draft.cpm_range.0 * geo * seasonal),
            round2(draft.cpm_range.1 * geo * seasonal),
        ),
        confidence: draft.confidence,
        source: draft.source,
        match_type: draft.match_type,
        category: draft.category,
        matched_keyword: draft.matched_keyword,
        adjustments: CpmAdjustments {
            geographic_multiplier: geo,
            seasonal_multiplier: seasonal,
            country,
            month,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> CpmEstimator {
        CpmEstimator::new()
    }

    #[test]
    fn test_personal_finance_exact_match() {
        let estimate = estimator().estimate_base("personal finance tips");
        assert_eq!(estimate.match_type, CpmMatchType::Exact);
        assert!(estimate.confidence >= 0.90);
        assert!(estimate.base_cpm >= 10.0);
        assert_eq!(estimate.category, "personal_finance");
    }

    #[test]
    fn test_manga_recap_matches_entertainment_tier() {
        let estimate = estimator().estimate_base("manga recap channel");
        assert!(estimate.confidence >= 0.70);
        assert_eq!(estimate.category, "anime_manga");
    }

    #[test]
    fn test_word_set_match_ignores_order() {
        let estimate = estimator().estimate_base("market analysis stock daily");
        // "stock market" words are a subset of the niche's words.
        assert_eq!(estimate.match_type, CpmMatchType::ExactWords);
        assert!((estimate.confidence - 0.90).abs() < 1e-9);
        assert_eq!(estimate.category, "investing");
    }

    #[test]
    fn test_longest_exact_match_wins() {
        // Both "finance" phrases and "investing" could match; the longer
        // "personal finance" phrase must win over shorter keywords.
        let estimate = estimator().estimate_base("personal finance investing");
        assert_eq!(estimate.matched_keyword.as_deref(), Some("personal finance"));
    }

    #[test]
    fn test_category_hint_used_when_nothing_matches() {
        let options = CpmOptions {
            category_hint: Some("finance".to_string()),
            apply_geographic: false,
            apply_seasonal: false,
            ..CpmOptions::default()
        };
        let estimate = estimator().estimate("zzqx", &options);
        assert_eq!(estimate.match_type, CpmMatchType::Category);
        assert!((estimate.confidence - 0.60).abs() < 1e-9);
        assert_eq!(estimate.base_cpm, 10.0);
    }

    #[test]
    fn test_inferred_category_from_common_word() {
        let estimate = estimator().estimate_base("ways to earn qqzz");
        // "earn" infers the finance parent category.
        assert_eq!(estimate.match_type, CpmMatchType::Inferred);
        assert_eq!(estimate.category, "finance");
    }

    #[test]
    fn test_default_fallback() {
        let estimate = estimator().estimate_base("zzqx vvrr");
        assert_eq!(estimate.match_type, CpmMatchType::Default);
        assert!((estimate.confidence - 0.30).abs() < 1e-9);
        assert_eq!(estimate.base_cpm, 3.5);
        assert_eq!(estimate.cpm, 3.5);
    }

    #[test]
    fn test_adjustments_multiply_commutatively() {
        let base = CpmOptions::base();
        let unadjusted = estimator().estimate("personal finance tips", &base);

        let options = CpmOptions {
            country_code: "DE".to_string(),
            month: Some(12),
            ..CpmOptions::default()
        };
        let adjusted = estimator().estimate("personal finance tips", &options);

        let expected = unadjusted.base_cpm * 0.80 * 1.25;
        assert!((adjusted.cpm - (expected * 100.0).round() / 100.0).abs() < 1e-9);
        assert_eq!(adjusted.adjustments.geographic_multiplier, 0.80);
        assert_eq!(adjusted.adjustments.seasonal_multiplier, 1.25);
        assert_eq!(adjusted.adjustments.country, "DE");
        assert_eq!(adjusted.adjustments.month, 12);

        // Range scales in parallel with the same multipliers.
        let expected_lo = (unadjusted.cpm_range.0 * 0.80 * 1.25 * 100.0).round() / 100.0;
        let expected_hi = (unadjusted.cpm_range.1 * 0.80 * 1.25 * 100.0).round() / 100.0;
        assert!((adjusted.cpm_range.0 - expected_lo).abs() < 1e-9);
        assert!((adjusted.cpm_range.1 - expected_hi).abs() < 1e-9);
    }

    #[test]
    fn test_unlisted_country_gets_default_multiplier() {
        let options = CpmOptions {
            country_code: "xq".to_string(),
            apply_seasonal: false,
            month: Some(5),
            ..CpmOptions::default()
        };
        let estimate = estimator().estimate("gaming", &options);
        assert_eq!(estimate.adjustments.geographic_multiplier, 0.5);
        assert!((estimate.cpm - estimate.base_cpm * 0.5).abs() < 0.01);
    }

    #[test]
    fn test_identity_adjustments_when_disabled() {
        let estimate = estimator().estimate_base("gaming");
        assert_eq!(estimate.adjustments.geographic_multiplier, 1.0);
        assert_eq!(estimate.adjustments.seasonal_multiplier, 1.0);
        assert_eq!(estimate.cpm, estimate.base_cpm);
    }
}
