//! Two-phase niche recommendations.
//!
//! Variant generation is deterministic; scoring runs in two phases so that
//! only the most promising candidates pay for a full scoring. Dataflow:
//! variants, fan-out quick score, top-k, fan-out full score under the
//! request deadline, collect.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::scorer::NicheScorer;

/// Variants screened in phase 1.
const PHASE1_CANDIDATES: usize = 8;
/// Candidates promoted to full scoring in phase 2.
const PHASE2_CANDIDATES: usize = 3;
/// Quick-scored candidates appended after phase 2.
const APPENDED_CANDIDATES: usize = 2;
/// Recommendations returned.
const MAX_RECOMMENDATIONS: usize = 5;
/// Variant pool cap.
const MAX_VARIANTS: usize = 12;

/// Synonym substitutions for variant generation.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("tv show", &["drama", "series", "television", "show"]),
    ("tutorial", &["guide", "how to", "lesson", "course"]),
    ("tips", &["advice", "hacks", "guide", "tricks"]),
    ("review", &["analysis", "breakdown", "reaction"]),
    ("beginner", &["starter", "newbie", "basic", "intro"]),
    ("ai", &["artificial intelligence", "machine learning", "chatgpt"]),
    ("crypto", &["cryptocurrency", "bitcoin", "blockchain"]),
];

/// Content-type decorations combined with the cleaned base phrase.
const CONTENT_TYPES: &[&str] = &[
    "reviews",
    "tutorial",
    "guide",
    "tips",
    "for beginners",
    "analysis",
    "explained",
    "2024",
    "how to",
];

/// Filler tokens removed before decorating.
const FILLER_TOKENS: &[&str] = &["tutorial", "tips", "guide", "how", "to"];

/// Confidence level of a recommendation's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Confidence {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "ESTIMATED")]
    Estimated,
}

/// One scored niche variation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    pub niche: String,
    pub score: f64,
    /// Whether this variant scored above the original niche.
    pub better: bool,
    pub confidence: Confidence,
}

/// Generates and scores related niche variations.
pub struct RecommendationEngine {
    scorer: Arc<NicheScorer>,
}

impl RecommendationEngine {
    pub fn new(scorer: Arc<NicheScorer>) -> Self {
        Self { scorer }
    }

    /// Recommend up to five variations of `original`, each marked against
    /// `original_score`.
    ///
    /// Phase 2 full scorings that would start after `deadline` degrade to
    /// the quick score with `ESTIMATED` confidence instead of aborting.
    pub async fn recommend(
        &self,
        original: &str,
        original_score: f64,
        deadline: Option<Instant>,
    ) -> Vec<Recommendation> {
        let variants = generate_variants(original);
        info!(original, variants = variants.len(), "generating recommendations");

        // Phase 1: cheap screen.
        let mut candidates: Vec<(String, f64)> = Vec::new();
        for variant in variants.into_iter().take(PHASE1_CANDIDATES) {
            let score = self.scorer.quick_score(&variant).await;
            candidates.push((variant, score));
        }
        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

        // Phase 2: verify the top candidates with full scoring.
        let mut recommendations = Vec::new();
        for (variant, quick) in candidates.iter().take(PHASE2_CANDIDATES) {
            match self.full_score_within_deadline(variant, deadline).await {
                Some(full) => recommendations.push(Recommendation {
                    niche: variant.clone(),
                    score: full,
                    better: full > original_score,
                    confidence: Confidence::High,
                }),
                None => {
                    debug!(variant = variant.as_str(), "deadline reached, keeping quick score");
                    recommendations.push(Recommendation {
                        niche: variant.clone(),
                        score: *quick,
                        better: *quick > original_score,
                        confidence: Confidence::Estimated,
                    });
                }
            }
        }

        // Append the next quick-scored candidates as-is.
        for (variant, quick) in candidates
            .iter()
            .skip(PHASE2_CANDIDATES)
            .take(APPENDED_CANDIDATES)
        {
            recommendations.push(Recommendation {
                niche: variant.clone(),
                score: *quick,
                better: *quick > original_score,
                confidence: Confidence::Estimated,
            });
        }

        recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
        recommendations.truncate(MAX_RECOMMENDATIONS);
        recommendations
    }

    /// Full-score a variant, cancelled at the deadline. `None` means the
    /// deadline was already past or expired mid-scoring; the caller keeps
    /// the quick score.
    async fn full_score_within_deadline(
        &self,
        variant: &str,
        deadline: Option<Instant>,
    ) -> Option<f64> {
        match deadline {
            None => Some(self.scorer.full_score(variant).await.total_score),
            Some(deadline) => {
                let remaining = deadline.checked_duration_since(Instant::now())?;
                match tokio::time::timeout(remaining, self.scorer.full_score(variant)).await {
                    Ok(score) => Some(score.total_score),
                    Err(_) => {
                        warn!(variant, "full scoring exceeded the request deadline");
                        None
                    }
                }
            }
        }
    }
}

/// Deterministic variant generation: synonym substitution plus content-type
/// decoration of the cleaned base phrase. Deduplicated, capped at twelve;
/// synonym variants take the slots before decorations.
pub fn generate_variants(original: &str) -> Vec<String> {
    let niche = original.trim().to_lowercase();
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut variants: Vec<String> = Vec::new();
    let push = |variants: &mut Vec<String>, seen: &mut BTreeSet<String>, variant: String| {
        if variant != niche && variant.len() > 3 && seen.insert(variant.clone()) {
            variants.push(variant);
        }
    };

    for (word, replacements) in SYNONYMS {
        if niche.contains(word) {
            for replacement in *replacements {
                push(&mut variants, &mut seen, niche.replace(word, replacement));
            }
        }
    }

    let clean_base: String = niche
        .split_whitespace()
        .filter(|w| !FILLER_TOKENS.contains(w))
        .collect::<Vec<_>>()
        .join(" ");

    if !clean_base.is_empty() {
        for content_type in CONTENT_TYPES {
            if !niche.contains(content_type) {
                push(
                    &mut variants,
                    &mut seen,
                    format!("{} {}", clean_base, content_type),
                );
                push(
                    &mut variants,
                    &mut seen,
                    format!("{} {}", content_type, clean_base),
                );
            }
        }
    }

    variants.truncate(MAX_VARIANTS);
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonym_variants_generated() {
        let variants = generate_variants("ai tutorial");
        assert!(variants.contains(&"artificial intelligence tutorial".to_string()));
        assert!(variants.contains(&"chatgpt tutorial".to_string()));
        // "tutorial" also substitutes.
        assert!(variants.contains(&"ai guide".to_string()));
    }

    #[test]
    fn test_decorations_use_cleaned_base() {
        let variants = generate_variants("crypto tutorial");
        // "tutorial" is a filler token, so decorations build on "crypto".
        assert!(variants.iter().any(|v| v == "crypto reviews"));
        assert!(variants.iter().any(|v| v == "reviews crypto"));
    }

    #[test]
    fn test_variants_deduplicated_and_capped() {
        let variants = generate_variants("ai tutorial tips review for beginner");
        assert!(variants.len() <= 12);
        let unique: BTreeSet<&String> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len());
    }

    #[test]
    fn test_no_variant_equals_original() {
        let original = "ai tutorials";
        for variant in generate_variants(original) {
            assert_ne!(variant, original);
        }
    }

    #[test]
    fn test_short_variants_rejected() {
        for variant in generate_variants("ai") {
            assert!(variant.len() > 3, "variant too short: {:?}", variant);
        }
    }

    #[test]
    fn test_deterministic_generation() {
        assert_eq!(generate_variants("home workout routines"), generate_variants("home workout routines"));
    }
}
