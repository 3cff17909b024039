//! Token-set similarity for the fuzzy match cascade step.

use std::collections::BTreeSet;

/// Lowercased word tokens of a phrase.
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_string())
        .collect()
}

/// Token-set-ratio similarity in [0, 100].
///
/// Both strings are reduced to sorted unique token sets; the score is the
/// best pairwise similarity between the intersection string and each
/// intersection-plus-remainder string. Shared tokens therefore dominate
/// regardless of word order or repetition.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let set_a: BTreeSet<String> = words(a).into_iter().collect();
    let set_b: BTreeSet<String> = words(b).into_iter().collect();

    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let intersection: Vec<&String> = set_a.intersection(&set_b).collect();
    let only_a: Vec<&String> = set_a.difference(&set_b).collect();
    let only_b: Vec<&String> = set_b.difference(&set_a).collect();

    let joined = |tokens: &[&String]| -> String {
        tokens
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    };

    let base = joined(&intersection);
    let combined_a = join_nonempty(&base, &joined(&only_a));
    let combined_b = join_nonempty(&base, &joined(&only_b));

    let ratios = [
        similarity(&base, &combined_a),
        similarity(&base, &combined_b),
        similarity(&combined_a, &combined_b),
    ];

    ratios.into_iter().fold(0.0, f64::max) * 100.0
}

fn join_nonempty(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b.to_string(),
        (_, true) => a.to_string(),
        _ => format!("{} {}", a, b),
    }
}

fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_tokenizes_and_lowercases() {
        assert_eq!(words("Manga-Recap Channel!"), vec!["manga", "recap", "channel"]);
        assert_eq!(words(""), Vec::<String>::new());
    }

    #[test]
    fn test_identical_token_sets_score_100() {
        assert_eq!(token_set_ratio("stock market", "market stock"), 100.0);
        assert_eq!(token_set_ratio("ai", "AI"), 100.0);
    }

    #[test]
    fn test_subset_scores_100() {
        // The intersection equals the smaller set, so one pairwise ratio
        // compares it against itself.
        assert_eq!(token_set_ratio("crypto", "crypto trading tips"), 100.0);
    }

    #[test]
    fn test_disjoint_sets_score_low() {
        assert!(token_set_ratio("gardening", "quantum physics") < 50.0);
    }

    #[test]
    fn test_partial_overlap_scores_between() {
        let score = token_set_ratio("personal finance tips", "personal finance");
        assert_eq!(score, 100.0);

        let score = token_set_ratio("finance tips daily", "finance news weekly");
        assert!(score > 30.0 && score < 100.0);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(token_set_ratio("", "anything"), 0.0);
        assert_eq!(token_set_ratio("anything", ""), 0.0);
    }
}
