//! Static niche suggestion seed list.

use rand::seq::IndexedRandom;
use serde::Serialize;

/// Suggestion categories and their niches. Starting points for users who
/// have no niche in mind yet.
pub const NICHE_SUGGESTIONS: &[(&str, &[&str])] = &[
    (
        "High CPM",
        &[
            "personal finance tips",
            "investing for beginners",
            "real estate investing",
            "cryptocurrency explained",
            "stock market analysis",
            "passive income ideas",
            "business automation",
            "B2B marketing",
            "SaaS tutorials",
        ],
    ),
    (
        "Tech & AI",
        &[
            "AI tools tutorial",
            "ChatGPT prompts",
            "machine learning basics",
            "coding for beginners",
            "python automation",
            "no-code app building",
            "tech gadget reviews",
            "smart home setup",
            "cybersecurity tips",
        ],
    ),
    (
        "Gaming",
        &[
            "indie game reviews",
            "gaming setup tours",
            "speedrun tutorials",
            "mobile game guides",
            "retro gaming",
            "game development",
            "Minecraft builds",
            "Roblox tutorials",
            "esports analysis",
        ],
    ),
    (
        "Health & Fitness",
        &[
            "home workout routines",
            "calisthenics for beginners",
            "yoga for stress",
            "healthy meal prep",
            "intermittent fasting",
            "supplement reviews",
            "running tips",
            "weight loss journey",
            "mental health wellness",
        ],
    ),
    (
        "Creative",
        &[
            "digital art tutorial",
            "procreate tips",
            "3D blender tutorial",
            "music production basics",
            "podcast editing",
            "video editing tips",
            "photography for beginners",
            "graphic design",
            "animation tutorial",
        ],
    ),
    (
        "Education",
        &[
            "study techniques",
            "language learning tips",
            "history explained",
            "science experiments",
            "math tricks",
            "book summaries",
            "productivity hacks",
            "online course creation",
            "exam preparation",
        ],
    ),
    (
        "Lifestyle",
        &[
            "minimalist living",
            "van life adventures",
            "budget travel tips",
            "DIY home projects",
            "organization hacks",
            "cooking for beginners",
            "plant care tips",
            "sustainable living",
            "apartment decorating",
        ],
    ),
    (
        "Social Media",
        &[
            "TikTok growth strategies",
            "Instagram reels tips",
            "YouTube shorts guide",
            "content repurposing",
            "viral video analysis",
            "influencer marketing",
            "social media automation",
            "brand building",
            "community management",
        ],
    ),
];

/// Categories returned per request.
const CATEGORY_COUNT: usize = 4;
/// Niches sampled per category.
const NICHES_PER_CATEGORY: usize = 3;

/// One suggestion category with sampled niches.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionCategory {
    pub category: String,
    pub niches: Vec<String>,
}

/// Draw four random categories with three niches each.
pub fn random_suggestions() -> Vec<SuggestionCategory> {
    let mut rng = rand::rng();

    NICHE_SUGGESTIONS
        .choose_multiple(&mut rng, CATEGORY_COUNT)
        .map(|(category, niches)| SuggestionCategory {
            category: category.to_string(),
            niches: niches
                .choose_multiple(&mut rng, NICHES_PER_CATEGORY.min(niches.len()))
                .map(|n| n.to_string())
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_four_categories_three_niches() {
        let suggestions = random_suggestions();
        assert_eq!(suggestions.len(), 4);
        for category in &suggestions {
            assert_eq!(category.niches.len(), 3);
        }
    }

    #[test]
    fn test_suggestions_drawn_from_seed_list() {
        for category in random_suggestions() {
            let (_, seed_niches) = NICHE_SUGGESTIONS
                .iter()
                .find(|(name, _)| *name == category.category)
                .expect("category comes from the seed list");
            for niche in &category.niches {
                assert!(seed_niches.contains(&niche.as_str()));
            }
        }
    }

    #[test]
    fn test_no_duplicate_categories() {
        let suggestions = random_suggestions();
        let mut names: Vec<&str> = suggestions.iter().map(|c| c.category.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
