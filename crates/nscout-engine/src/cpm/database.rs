//! Static CPM reference data.
//!
//! Sources: Lenostube, OutlierKit, FirstGrowthAgency, SMBillion, and
//! r/PartneredYoutube creator reports. Figures are USD RPM-adjacent CPM
//! averages for US traffic; geographic and seasonal multipliers adjust from
//! there.

/// One monetization category.
pub struct CpmCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub avg_cpm: f64,
    pub cpm_range: (f64, f64),
    pub source: &'static str,
}

/// Global fallback when nothing matches.
pub const DEFAULT_CPM: f64 = 3.5;

/// Range attached to the global fallback.
pub const DEFAULT_CPM_RANGE: (f64, f64) = (2.0, 5.0);

pub const CPM_DATABASE: &[CpmCategory] = &[
    // ------------------------------------------------------------------
    // Finance
    // ------------------------------------------------------------------
    CpmCategory {
        name: "personal_finance",
        keywords: &["personal finance", "money management", "budgeting", "saving money", "financial literacy"],
        avg_cpm: 12.0,
        cpm_range: (8.0, 22.0),
        source: "Lenostube: Tier 1 Premium finance",
    },
    CpmCategory {
        name: "investing",
        keywords: &["investing", "investment", "stock market", "stocks", "dividend", "index funds", "etf"],
        avg_cpm: 11.0,
        cpm_range: (7.0, 20.0),
        source: "OutlierKit: Finance/Investing",
    },
    CpmCategory {
        name: "cryptocurrency",
        keywords: &["crypto", "cryptocurrency", "blockchain", "defi", "nft", "altcoin"],
        avg_cpm: 10.0,
        cpm_range: (6.0, 18.0),
        source: "Lenostube: Finance tier crypto",
    },
    CpmCategory {
        name: "bitcoin",
        keywords: &["bitcoin", "btc trading"],
        avg_cpm: 11.0,
        cpm_range: (7.0, 19.0),
        source: "Lenostube: Crypto premium",
    },
    CpmCategory {
        name: "real_estate",
        keywords: &["real estate", "property investing", "house flipping", "rental property", "airbnb hosting"],
        avg_cpm: 14.0,
        cpm_range: (9.0, 25.0),
        source: "FirstGrowthAgency: Real estate",
    },
    CpmCategory {
        name: "insurance",
        keywords: &["insurance", "life insurance", "health insurance", "car insurance"],
        avg_cpm: 15.5,
        cpm_range: (10.0, 30.0),
        source: "FirstGrowthAgency: Insurance keywords",
    },
    CpmCategory {
        name: "credit",
        keywords: &["credit card", "credit score", "credit repair", "loans"],
        avg_cpm: 13.0,
        cpm_range: (8.0, 24.0),
        source: "SMBillion: Credit/lending",
    },
    CpmCategory {
        name: "taxes_accounting",
        keywords: &["taxes", "tax tips", "accounting", "bookkeeping"],
        avg_cpm: 12.5,
        cpm_range: (8.0, 22.0),
        source: "SMBillion: Accounting",
    },
    CpmCategory {
        name: "retirement",
        keywords: &["retirement", "retirement planning", "401k", "pension"],
        avg_cpm: 11.5,
        cpm_range: (7.0, 20.0),
        source: "OutlierKit: Retirement planning",
    },
    CpmCategory {
        name: "trading",
        keywords: &["day trading", "forex", "options trading", "swing trading"],
        avg_cpm: 9.5,
        cpm_range: (6.0, 17.0),
        source: "r/PartneredYoutube: Trading channels",
    },
    CpmCategory {
        name: "passive_income",
        keywords: &["passive income", "side hustle", "make money online", "financial freedom"],
        avg_cpm: 10.5,
        cpm_range: (7.0, 18.0),
        source: "OutlierKit: Passive income",
    },
    // ------------------------------------------------------------------
    // Business
    // ------------------------------------------------------------------
    CpmCategory {
        name: "digital_marketing",
        keywords: &["digital marketing", "seo", "social media marketing", "email marketing", "content marketing"],
        avg_cpm: 10.0,
        cpm_range: (6.0, 18.0),
        source: "FirstGrowthAgency: Marketing",
    },
    CpmCategory {
        name: "b2b_saas",
        keywords: &["b2b", "saas", "software as a service", "crm"],
        avg_cpm: 11.0,
        cpm_range: (7.0, 20.0),
        source: "FirstGrowthAgency: B2B/SaaS",
    },
    CpmCategory {
        name: "entrepreneurship",
        keywords: &["entrepreneur", "entrepreneurship", "startup", "business ideas", "small business"],
        avg_cpm: 8.5,
        cpm_range: (5.0, 15.0),
        source: "Lenostube: Business premium",
    },
    CpmCategory {
        name: "ecommerce",
        keywords: &["ecommerce", "online store", "shopify", "amazon fba"],
        avg_cpm: 9.0,
        cpm_range: (6.0, 16.0),
        source: "SMBillion: Ecommerce",
    },
    CpmCategory {
        name: "dropshipping",
        keywords: &["dropshipping", "print on demand"],
        avg_cpm: 8.0,
        cpm_range: (5.0, 14.0),
        source: "r/PartneredYoutube: Dropshipping",
    },
    CpmCategory {
        name: "affiliate_marketing",
        keywords: &["affiliate marketing", "affiliate"],
        avg_cpm: 9.5,
        cpm_range: (6.0, 16.0),
        source: "SMBillion: Affiliate",
    },
    CpmCategory {
        name: "freelancing",
        keywords: &["freelance", "freelancing", "upwork", "fiverr"],
        avg_cpm: 7.0,
        cpm_range: (4.0, 12.0),
        source: "OutlierKit: Freelancing",
    },
    CpmCategory {
        name: "sales",
        keywords: &["sales training", "negotiation", "cold calling", "business automation"],
        avg_cpm: 8.5,
        cpm_range: (5.0, 15.0),
        source: "FirstGrowthAgency: Sales",
    },
    // ------------------------------------------------------------------
    // Technology
    // ------------------------------------------------------------------
    CpmCategory {
        name: "artificial_intelligence",
        keywords: &["ai", "artificial intelligence", "machine learning", "chatgpt", "ai tools", "prompt engineering"],
        avg_cpm: 8.5,
        cpm_range: (5.0, 15.0),
        source: "Lenostube: Tech + AI premium",
    },
    CpmCategory {
        name: "programming",
        keywords: &["programming", "coding", "python", "javascript", "software development"],
        avg_cpm: 7.5,
        cpm_range: (4.0, 13.0),
        source: "OutlierKit: Programming",
    },
    CpmCategory {
        name: "web_development",
        keywords: &["web development", "web design", "frontend", "backend"],
        avg_cpm: 8.0,
        cpm_range: (5.0, 14.0),
        source: "OutlierKit: Web development",
    },
    CpmCategory {
        name: "cybersecurity",
        keywords: &["cybersecurity", "hacking", "ethical hacking", "infosec"],
        avg_cpm: 9.0,
        cpm_range: (6.0, 16.0),
        source: "FirstGrowthAgency: Cybersecurity",
    },
    CpmCategory {
        name: "cloud_computing",
        keywords: &["cloud computing", "aws", "azure", "devops", "kubernetes"],
        avg_cpm: 9.5,
        cpm_range: (6.0, 17.0),
        source: "FirstGrowthAgency: Cloud/DevOps",
    },
    CpmCategory {
        name: "data_science",
        keywords: &["data science", "data analytics", "sql", "data engineering"],
        avg_cpm: 8.5,
        cpm_range: (5.0, 15.0),
        source: "OutlierKit: Data science",
    },
    CpmCategory {
        name: "tech_reviews",
        keywords: &["tech review", "gadget review", "unboxing", "tech news"],
        avg_cpm: 4.15,
        cpm_range: (2.5, 8.0),
        source: "Lenostube: Tech baseline",
    },
    CpmCategory {
        name: "software_tutorials",
        keywords: &["software tutorial", "excel", "notion", "app tutorial"],
        avg_cpm: 6.5,
        cpm_range: (4.0, 11.0),
        source: "SMBillion: Software tutorials",
    },
    CpmCategory {
        name: "smartphones",
        keywords: &["smartphone", "iphone", "android", "mobile phone"],
        avg_cpm: 4.5,
        cpm_range: (2.5, 8.0),
        source: "Lenostube: Consumer tech",
    },
    CpmCategory {
        name: "smart_home",
        keywords: &["smart home", "home automation", "alexa", "home assistant"],
        avg_cpm: 5.0,
        cpm_range: (3.0, 9.0),
        source: "SMBillion: Smart home",
    },
    CpmCategory {
        name: "vpn_hosting",
        keywords: &["vpn", "web hosting", "domain"],
        avg_cpm: 12.0,
        cpm_range: (7.0, 22.0),
        source: "FirstGrowthAgency: VPN/hosting affiliate",
    },
    // ------------------------------------------------------------------
    // Education
    // ------------------------------------------------------------------
    CpmCategory {
        name: "online_education",
        keywords: &["education", "online course", "elearning", "teaching"],
        avg_cpm: 4.9,
        cpm_range: (3.0, 9.0),
        source: "Lenostube: Education",
    },
    CpmCategory {
        name: "language_learning",
        keywords: &["language learning", "learn english", "learn spanish", "learn japanese"],
        avg_cpm: 5.5,
        cpm_range: (3.0, 10.0),
        source: "OutlierKit: Language learning",
    },
    CpmCategory {
        name: "study_skills",
        keywords: &["study techniques", "study tips", "note taking", "exam preparation"],
        avg_cpm: 4.5,
        cpm_range: (2.5, 8.0),
        source: "r/PartneredYoutube: Study channels",
    },
    CpmCategory {
        name: "science",
        keywords: &["science", "physics", "chemistry", "biology", "astronomy"],
        avg_cpm: 4.8,
        cpm_range: (3.0, 9.0),
        source: "OutlierKit: Science explainers",
    },
    CpmCategory {
        name: "history",
        keywords: &["history", "world war", "ancient history", "documentary"],
        avg_cpm: 4.2,
        cpm_range: (2.5, 8.0),
        source: "Lenostube: History/documentary",
    },
    CpmCategory {
        name: "math",
        keywords: &["math", "mathematics", "calculus", "statistics"],
        avg_cpm: 4.6,
        cpm_range: (2.5, 8.5),
        source: "r/PartneredYoutube: Math tutorials",
    },
    CpmCategory {
        name: "tutorials",
        keywords: &["tutorial", "how to", "guide", "walkthrough", "course", "lesson"],
        avg_cpm: 5.5,
        cpm_range: (3.0, 10.0),
        source: "Lenostube: Educational premium",
    },
    CpmCategory {
        name: "career",
        keywords: &["career advice", "job interview", "resume", "linkedin"],
        avg_cpm: 7.5,
        cpm_range: (4.0, 13.0),
        source: "FirstGrowthAgency: Career content",
    },
    // ------------------------------------------------------------------
    // Health & fitness
    // ------------------------------------------------------------------
    CpmCategory {
        name: "fitness",
        keywords: &["fitness", "workout", "gym", "exercise", "calisthenics", "home workout"],
        avg_cpm: 3.5,
        cpm_range: (2.0, 6.5),
        source: "Lenostube: Health & Fitness",
    },
    CpmCategory {
        name: "weight_loss",
        keywords: &["weight loss", "fat loss", "diet", "intermittent fasting"],
        avg_cpm: 4.5,
        cpm_range: (2.5, 8.5),
        source: "OutlierKit: Weight loss",
    },
    CpmCategory {
        name: "yoga_meditation",
        keywords: &["yoga", "meditation", "mindfulness", "breathwork"],
        avg_cpm: 3.8,
        cpm_range: (2.0, 7.0),
        source: "SMBillion: Yoga/meditation",
    },
    CpmCategory {
        name: "nutrition",
        keywords: &["nutrition", "healthy eating", "meal prep", "healthy recipes"],
        avg_cpm: 4.2,
        cpm_range: (2.5, 7.5),
        source: "OutlierKit: Nutrition",
    },
    CpmCategory {
        name: "mental_health",
        keywords: &["mental health", "anxiety", "therapy", "wellness"],
        avg_cpm: 4.0,
        cpm_range: (2.5, 7.5),
        source: "r/PartneredYoutube: Mental health",
    },
    CpmCategory {
        name: "supplements",
        keywords: &["supplements", "protein", "vitamins"],
        avg_cpm: 5.5,
        cpm_range: (3.0, 10.0),
        source: "SMBillion: Supplement reviews",
    },
    // ------------------------------------------------------------------
    // Lifestyle
    // ------------------------------------------------------------------
    CpmCategory {
        name: "travel",
        keywords: &["travel", "budget travel", "van life", "backpacking", "digital nomad"],
        avg_cpm: 3.2,
        cpm_range: (1.8, 6.0),
        source: "Lenostube: Travel",
    },
    CpmCategory {
        name: "cooking",
        keywords: &["cooking", "recipe", "baking", "chef"],
        avg_cpm: 3.0,
        cpm_range: (1.8, 5.5),
        source: "Lenostube: Cooking",
    },
    CpmCategory {
        name: "beauty",
        keywords: &["beauty", "makeup", "skincare", "haircare"],
        avg_cpm: 4.0,
        cpm_range: (2.5, 7.5),
        source: "OutlierKit: Beauty",
    },
    CpmCategory {
        name: "fashion",
        keywords: &["fashion", "outfit", "style tips", "streetwear"],
        avg_cpm: 3.5,
        cpm_range: (2.0, 6.5),
        source: "OutlierKit: Fashion",
    },
    CpmCategory {
        name: "home_improvement",
        keywords: &["home improvement", "diy home", "renovation", "woodworking", "interior design"],
        avg_cpm: 5.5,
        cpm_range: (3.0, 10.0),
        source: "FirstGrowthAgency: Home improvement",
    },
    CpmCategory {
        name: "gardening",
        keywords: &["gardening", "plants", "plant care", "homesteading"],
        avg_cpm: 3.8,
        cpm_range: (2.0, 7.0),
        source: "r/PartneredYoutube: Gardening",
    },
    CpmCategory {
        name: "parenting",
        keywords: &["parenting", "pregnancy", "baby", "mom life"],
        avg_cpm: 3.5,
        cpm_range: (2.0, 6.5),
        source: "SMBillion: Parenting",
    },
    CpmCategory {
        name: "minimalism",
        keywords: &["minimalism", "minimalist living", "decluttering", "organization"],
        avg_cpm: 3.2,
        cpm_range: (2.0, 6.0),
        source: "r/PartneredYoutube: Minimalism",
    },
    CpmCategory {
        name: "productivity",
        keywords: &["productivity", "time management", "habits", "self improvement"],
        avg_cpm: 6.5,
        cpm_range: (4.0, 11.0),
        source: "OutlierKit: Productivity",
    },
    // ------------------------------------------------------------------
    // Entertainment
    // ------------------------------------------------------------------
    CpmCategory {
        name: "gaming",
        keywords: &["gaming", "gameplay", "minecraft", "roblox", "fortnite", "esports", "speedrun"],
        avg_cpm: 2.5,
        cpm_range: (1.5, 4.5),
        source: "Lenostube: Gaming content",
    },
    CpmCategory {
        name: "anime_manga",
        keywords: &["anime", "manga", "anime recap", "manga recap", "japanese animation"],
        avg_cpm: 2.8,
        cpm_range: (1.5, 5.0),
        source: "Lenostube: Entertainment/International",
    },
    CpmCategory {
        name: "movies_tv",
        keywords: &["movie review", "tv show", "film analysis", "series recap", "drama"],
        avg_cpm: 2.6,
        cpm_range: (1.5, 5.0),
        source: "OutlierKit: Movies/TV",
    },
    CpmCategory {
        name: "music",
        keywords: &["music", "song", "playlist", "lofi", "instrumental"],
        avg_cpm: 1.8,
        cpm_range: (1.0, 3.5),
        source: "Lenostube: Music",
    },
    CpmCategory {
        name: "comedy",
        keywords: &["comedy", "funny", "memes", "sketch"],
        avg_cpm: 2.2,
        cpm_range: (1.2, 4.0),
        source: "OutlierKit: Comedy",
    },
    CpmCategory {
        name: "reactions",
        keywords: &["reaction", "react", "first time watching"],
        avg_cpm: 2.0,
        cpm_range: (1.0, 3.8),
        source: "r/PartneredYoutube: Reaction channels",
    },
    CpmCategory {
        name: "celebrity",
        keywords: &["celebrity", "gossip", "pop culture"],
        avg_cpm: 2.4,
        cpm_range: (1.3, 4.5),
        source: "SMBillion: Celebrity news",
    },
    CpmCategory {
        name: "asmr_relaxing",
        keywords: &["asmr", "relaxing", "sleep music", "ambient", "white noise"],
        avg_cpm: 2.0,
        cpm_range: (1.0, 3.8),
        source: "r/PartneredYoutube: ASMR/ambient",
    },
    CpmCategory {
        name: "sports",
        keywords: &["sports", "football", "basketball", "soccer", "highlights"],
        avg_cpm: 2.8,
        cpm_range: (1.5, 5.0),
        source: "OutlierKit: Sports",
    },
    CpmCategory {
        name: "true_crime",
        keywords: &["true crime", "crime documentary", "mystery", "unsolved"],
        avg_cpm: 3.8,
        cpm_range: (2.0, 7.0),
        source: "OutlierKit: True crime",
    },
    // ------------------------------------------------------------------
    // Creative
    // ------------------------------------------------------------------
    CpmCategory {
        name: "photography",
        keywords: &["photography", "camera", "photo editing", "lightroom"],
        avg_cpm: 4.0,
        cpm_range: (2.5, 7.5),
        source: "OutlierKit: Photography",
    },
    CpmCategory {
        name: "video_editing",
        keywords: &["video editing", "premiere pro", "davinci resolve", "after effects"],
        avg_cpm: 5.0,
        cpm_range: (3.0, 9.0),
        source: "SMBillion: Video editing",
    },
    CpmCategory {
        name: "graphic_design",
        keywords: &["graphic design", "photoshop", "illustrator", "canva"],
        avg_cpm: 4.5,
        cpm_range: (2.5, 8.0),
        source: "OutlierKit: Graphic design",
    },
    CpmCategory {
        name: "music_production",
        keywords: &["music production", "beat making", "fl studio", "ableton", "podcast editing"],
        avg_cpm: 4.2,
        cpm_range: (2.5, 7.5),
        source: "r/PartneredYoutube: Music production",
    },
    CpmCategory {
        name: "drawing_art",
        keywords: &["drawing", "digital art", "painting", "procreate", "animation"],
        avg_cpm: 3.5,
        cpm_range: (2.0, 6.5),
        source: "OutlierKit: Art channels",
    },
    CpmCategory {
        name: "writing",
        keywords: &["writing", "copywriting", "blogging", "self publishing"],
        avg_cpm: 4.8,
        cpm_range: (3.0, 8.5),
        source: "SMBillion: Writing",
    },
    // ------------------------------------------------------------------
    // Other verticals
    // ------------------------------------------------------------------
    CpmCategory {
        name: "automotive",
        keywords: &["car review", "cars", "auto repair", "detailing"],
        avg_cpm: 4.5,
        cpm_range: (2.5, 8.0),
        source: "Lenostube: Automotive",
    },
    CpmCategory {
        name: "electric_vehicles",
        keywords: &["electric vehicle", "ev", "tesla"],
        avg_cpm: 6.0,
        cpm_range: (3.5, 11.0),
        source: "FirstGrowthAgency: EV content",
    },
    CpmCategory {
        name: "pets",
        keywords: &["pets", "dog training", "cat", "aquarium"],
        avg_cpm: 3.2,
        cpm_range: (1.8, 6.0),
        source: "OutlierKit: Pets",
    },
    CpmCategory {
        name: "kids",
        keywords: &["kids", "nursery rhymes", "children"],
        avg_cpm: 1.5,
        cpm_range: (0.8, 3.0),
        source: "Lenostube: Made-for-kids",
    },
    CpmCategory {
        name: "legal",
        keywords: &["legal advice", "lawyer", "law explained"],
        avg_cpm: 14.5,
        cpm_range: (9.0, 28.0),
        source: "FirstGrowthAgency: Legal",
    },
    CpmCategory {
        name: "medical",
        keywords: &["medical", "doctor explains", "health explained"],
        avg_cpm: 10.0,
        cpm_range: (6.0, 18.0),
        source: "FirstGrowthAgency: Medical",
    },
    CpmCategory {
        name: "luxury",
        keywords: &["luxury", "watches", "first class"],
        avg_cpm: 6.5,
        cpm_range: (4.0, 12.0),
        source: "SMBillion: Luxury lifestyle",
    },
];

/// Parent-category fallback CPMs, used for category hints and inference.
pub const CATEGORY_FALLBACKS: &[(&str, f64)] = &[
    ("finance", 10.0),
    ("business", 8.0),
    ("technology", 6.5),
    ("education", 4.9),
    ("health", 4.0),
    ("lifestyle", 3.2),
    ("creative", 4.0),
    ("gaming", 2.5),
    ("entertainment", 2.5),
    ("automotive", 4.5),
    ("kids", 1.5),
];

/// Common niche words mapped to parent categories; first hit wins.
pub const CATEGORY_HINTS: &[(&str, &str)] = &[
    ("money", "finance"),
    ("earn", "finance"),
    ("invest", "finance"),
    ("stock", "finance"),
    ("bank", "finance"),
    ("wealth", "finance"),
    ("game", "gaming"),
    ("play", "gaming"),
    ("stream", "gaming"),
    ("tech", "technology"),
    ("code", "technology"),
    ("program", "technology"),
    ("software", "technology"),
    ("app", "technology"),
    ("health", "health"),
    ("fit", "health"),
    ("diet", "health"),
    ("workout", "health"),
    ("learn", "education"),
    ("teach", "education"),
    ("course", "education"),
    ("school", "education"),
    ("vlog", "entertainment"),
    ("react", "entertainment"),
    ("funny", "entertainment"),
    ("comedy", "entertainment"),
    ("anime", "entertainment"),
    ("manga", "entertainment"),
    ("cook", "lifestyle"),
    ("recipe", "lifestyle"),
    ("travel", "lifestyle"),
    ("beauty", "lifestyle"),
    ("fashion", "lifestyle"),
    ("draw", "creative"),
    ("art", "creative"),
    ("music", "creative"),
    ("paint", "creative"),
    ("kid", "kids"),
    ("child", "kids"),
    ("nursery", "kids"),
    ("business", "business"),
    ("market", "business"),
    ("sell", "business"),
];

/// Per-country CPM multipliers. Unlisted countries default to 0.5.
pub const GEOGRAPHIC_MULTIPLIERS: &[(&str, f64)] = &[
    ("US", 1.0),
    ("CH", 0.98),
    ("AU", 0.95),
    ("NO", 0.95),
    ("CA", 0.90),
    ("DK", 0.90),
    ("GB", 0.88),
    ("NZ", 0.85),
    ("SE", 0.85),
    ("NL", 0.82),
    ("IE", 0.82),
    ("DE", 0.80),
    ("FI", 0.80),
    ("AT", 0.78),
    ("BE", 0.75),
    ("SG", 0.72),
    ("FR", 0.70),
    ("IL", 0.68),
    ("JP", 0.65),
    ("HK", 0.62),
    ("KR", 0.62),
    ("IT", 0.60),
    ("AE", 0.60),
    ("ES", 0.58),
    ("PT", 0.50),
    ("SA", 0.50),
    ("TW", 0.50),
    ("PL", 0.45),
    ("CZ", 0.45),
    ("GR", 0.42),
    ("MX", 0.35),
    ("CL", 0.35),
    ("ZA", 0.35),
    ("MY", 0.35),
    ("BR", 0.32),
    ("TH", 0.32),
    ("TR", 0.30),
    ("AR", 0.28),
    ("ID", 0.25),
    ("PH", 0.25),
    ("VN", 0.22),
    ("IN", 0.20),
    ("PK", 0.15),
    ("NG", 0.15),
    ("EG", 0.15),
    ("BD", 0.12),
];

/// Default multiplier for countries missing from the table.
pub const GEOGRAPHIC_DEFAULT: f64 = 0.5;

/// Per-month seasonal multipliers, indexed by month 1-12. Ad budgets peak
/// in Q4 and reset in January.
pub const SEASONAL_MULTIPLIERS: [f64; 12] = [
    0.80, // January
    0.85, // February
    0.95, // March
    0.95, // April
    1.00, // May
    0.95, // June
    0.90, // July
    0.95, // August
    1.00, // September
    1.05, // October
    1.15, // November
    1.25, // December
];

/// Seasonal multiplier for a 1-based month; identity for out-of-range input.
pub fn seasonal_multiplier(month: u32) -> f64 {
    if (1..=12).contains(&month) {
        SEASONAL_MULTIPLIERS[(month - 1) as usize]
    } else {
        1.0
    }
}

/// Geographic multiplier for an ISO country code (case-insensitive).
pub fn geographic_multiplier(country_code: &str) -> f64 {
    let code = country_code.to_uppercase();
    GEOGRAPHIC_MULTIPLIERS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, m)| *m)
        .unwrap_or(GEOGRAPHIC_DEFAULT)
}

/// Fallback CPM for a parent category (substring match either direction).
pub fn category_fallback(category: &str) -> Option<(&'static str, f64)> {
    let lower = category.to_lowercase();
    CATEGORY_FALLBACKS
        .iter()
        .find(|(name, _)| lower.contains(name) || name.contains(lower.as_str()))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_is_well_formed() {
        assert!(CPM_DATABASE.len() >= 60);
        for category in CPM_DATABASE {
            assert!(!category.keywords.is_empty(), "{} has no keywords", category.name);
            assert!(category.avg_cpm > 0.0);
            let (lo, hi) = category.cpm_range;
            assert!(lo <= category.avg_cpm && category.avg_cpm <= hi, "{} range broken", category.name);
            assert!(!category.source.is_empty());
        }
    }

    #[test]
    fn test_seasonal_q4_peak_january_trough() {
        assert_eq!(seasonal_multiplier(12), 1.25);
        assert_eq!(seasonal_multiplier(1), 0.80);
        let max = SEASONAL_MULTIPLIERS.iter().cloned().fold(f64::MIN, f64::max);
        let min = SEASONAL_MULTIPLIERS.iter().cloned().fold(f64::MAX, f64::min);
        assert_eq!(max, seasonal_multiplier(12));
        assert_eq!(min, seasonal_multiplier(1));
        assert_eq!(seasonal_multiplier(0), 1.0);
        assert_eq!(seasonal_multiplier(13), 1.0);
    }

    #[test]
    fn test_geographic_lookup_and_default() {
        assert_eq!(geographic_multiplier("US"), 1.0);
        assert_eq!(geographic_multiplier("us"), 1.0);
        assert_eq!(geographic_multiplier("XX"), GEOGRAPHIC_DEFAULT);
    }

    #[test]
    fn test_category_fallback_substring_both_directions() {
        assert_eq!(category_fallback("finance").unwrap().0, "finance");
        assert_eq!(category_fallback("personal finance niche").unwrap().0, "finance");
        assert_eq!(category_fallback("tech").unwrap().0, "technology");
        assert!(category_fallback("zzz").is_none());
    }
}
