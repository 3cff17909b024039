//! Metadata-only content-type classification.
//!
//! Detects faceless/voice-over/compilation channels from titles,
//! descriptions, upload cadence, and duration patterns. No network and no
//! vision models; the whole analysis is keyword and pattern matching.

use nscout_models::{ContentType, ContentTypeVerdict};

/// Keywords indicating faceless/voice-over content.
const FACELESS_KEYWORDS: &[&str] = &[
    "faceless",
    "no commentary",
    "voice over",
    "voiceover",
    "tts",
    "text to speech",
    "ai voice",
    "compilation",
    "top 10",
    "top 5",
    "screen recording",
    "tutorial",
    "gameplay",
    "asmr",
    "music mix",
    "relaxing",
    "meditation",
    "stock footage",
    "ambient",
    "background music",
    "study music",
    "sleep music",
    "beats",
    "instrumental",
    "countdown",
    "timer",
    "automation",
    "auto generated",
];

const COMPILATION_KEYWORDS: &[&str] = &["compilation", "top 10", "top 5", "best of", "countdown", "list"];
const SCREEN_RECORDING_KEYWORDS: &[&str] = &["screen recording", "walkthrough", "how to", "guide"];
const TUTORIAL_KEYWORDS: &[&str] = &["tutorial", "how to", "guide", "learn", "course", "lesson"];
const VOICEOVER_KEYWORDS: &[&str] = &["voice over", "voiceover", "narration", "tts", "text to speech", "ai voice"];

/// Videos considered per channel.
const SAMPLE_LIMIT: usize = 10;

/// One sample video's metadata.
#[derive(Debug, Clone, Default)]
pub struct VideoSample {
    pub title: String,
    pub description: String,
    /// Seconds; search listings usually lack this.
    pub duration_secs: Option<f64>,
}

impl VideoSample {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            duration_secs: None,
        }
    }

    pub fn with_duration(mut self, secs: f64) -> Self {
        self.duration_secs = Some(secs);
        self
    }
}

/// Classifies a channel's content style from metadata.
#[derive(Debug, Clone, Default)]
pub struct ContentTypeAnalyzer;

impl ContentTypeAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a channel. `videos` is the sample from a search; only the
    /// first ten are inspected.
    pub fn analyze(
        &self,
        channel_title: &str,
        channel_description: &str,
        videos: &[VideoSample],
    ) -> ContentTypeVerdict {
        let (title_score, title_indicators) = analyze_text(channel_title);
        let (desc_score, desc_indicators) = analyze_text(channel_description);
        let (video_score, video_indicators) = analyze_videos(videos);
        let upload_score = upload_frequency_score(videos.len());
        let (duration_score, avg_duration_minutes) = duration_pattern_score(videos);

        let total = title_score * 0.20
            + desc_score * 0.25
            + video_score * 0.35
            + upload_score * 0.10
            + duration_score * 0.10;
        let faceless_score = total.clamp(0.0, 100.0) as u32;

        let mut indicators: Vec<&'static str> = Vec::new();
        for indicator in title_indicators
            .into_iter()
            .chain(desc_indicators)
            .chain(video_indicators)
        {
            if !indicators.contains(&indicator) {
                indicators.push(indicator);
            }
        }

        let content_type = determine_content_type(&indicators, faceless_score);

        ContentTypeVerdict {
            faceless_score,
            content_type,
            copy_indicators: indicators.iter().map(|s| s.to_string()).collect(),
            avg_duration_minutes,
        }
    }
}

/// Keyword occurrences in a text, 15 points each, capped at 100.
fn analyze_text(text: &str) -> (f64, Vec<&'static str>) {
    if text.is_empty() {
        return (0.0, Vec::new());
    }

    let lower = text.to_lowercase();
    let indicators: Vec<&'static str> = FACELESS_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .copied()
        .collect();

    let score = (indicators.len() as f64 * 15.0).min(100.0);
    (score, indicators)
}

/// Fraction of the sample whose title or description carries a keyword.
fn analyze_videos(videos: &[VideoSample]) -> (f64, Vec<&'static str>) {
    if videos.is_empty() {
        return (0.0, Vec::new());
    }

    let sample = &videos[..videos.len().min(SAMPLE_LIMIT)];
    let mut faceless_count = 0usize;
    let mut indicators: Vec<&'static str> = Vec::new();

    for video in sample {
        let combined = format!("{} {}", video.title, video.description).to_lowercase();
        let matched: Vec<&'static str> = FACELESS_KEYWORDS
            .iter()
            .filter(|kw| combined.contains(*kw))
            .copied()
            .collect();

        if !matched.is_empty() {
            faceless_count += 1;
            for indicator in matched {
                if !indicators.contains(&indicator) {
                    indicators.push(indicator);
                }
            }
        }
    }

    let score = faceless_count as f64 / sample.len() as f64 * 100.0;
    (score, indicators)
}

/// Faceless channels upload aggressively; approximate weekly cadence as
/// sample-count / 4 (one month of results).
fn upload_frequency_score(video_count: usize) -> f64 {
    if video_count < 3 {
        return 0.0;
    }

    let uploads_per_week = video_count as f64 / 4.0;
    if uploads_per_week > 7.0 {
        80.0
    } else if uploads_per_week >= 3.0 {
        60.0
    } else if uploads_per_week >= 1.0 {
        30.0
    } else {
        10.0
    }
}

/// Duration sweet spots: compilations and screen recordings cluster in the
/// 5-20 minute band.
fn duration_pattern_score(videos: &[VideoSample]) -> (f64, f64) {
    let durations: Vec<f64> = videos
        .iter()
        .take(SAMPLE_LIMIT)
        .filter_map(|v| v.duration_secs)
        .filter(|d| *d > 0.0)
        .collect();

    if durations.is_empty() {
        return (0.0, 0.0);
    }

    let avg_secs = durations.iter().sum::<f64>() / durations.len() as f64;
    let avg_minutes = avg_secs / 60.0;

    let score = if (5.0..=20.0).contains(&avg_minutes) {
        70.0
    } else if (3.0..=25.0).contains(&avg_minutes) {
        50.0
    } else {
        20.0
    };

    (score, (avg_minutes * 10.0).round() / 10.0)
}

fn determine_content_type(indicators: &[&'static str], faceless_score: u32) -> ContentType {
    let indicator_text = indicators.join(" ");
    let count_matches =
        |vocab: &[&str]| vocab.iter().filter(|kw| indicator_text.contains(*kw)).count();

    let compilation = count_matches(COMPILATION_KEYWORDS);
    let screen_recording = count_matches(SCREEN_RECORDING_KEYWORDS);
    let tutorial = count_matches(TUTORIAL_KEYWORDS);
    let voiceover = count_matches(VOICEOVER_KEYWORDS);

    if compilation >= 2 {
        ContentType::Compilation
    } else if tutorial >= 1 {
        // A lone tutorial match is enough; tutorial plus screen recording
        // is still educational content.
        ContentType::Tutorial
    } else if screen_recording >= 1 {
        ContentType::ScreenRecording
    } else if voiceover >= 1 {
        ContentType::FacelessVoiceover
    } else if faceless_score >= 60 {
        ContentType::FacelessVoiceover
    } else if faceless_score >= 30 || !indicators.is_empty() {
        ContentType::PossiblyFaceless
    } else {
        ContentType::Unknown
    }
}

/// Parse a duration: ISO-8601 `PT#H#M#S` form or whole seconds.
pub fn parse_duration(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(rest) = raw.strip_prefix("PT") {
        let mut seconds = 0.0;
        let mut digits = String::new();
        for c in rest.chars() {
            match c {
                '0'..='9' => digits.push(c),
                'H' => {
                    seconds += digits.parse::<f64>().ok()? * 3600.0;
                    digits.clear();
                }
                'M' => {
                    seconds += digits.parse::<f64>().ok()? * 60.0;
                    digits.clear();
                }
                'S' => {
                    seconds += digits.parse::<f64>().ok()?;
                    digits.clear();
                }
                _ => return None,
            }
        }
        return Some(seconds);
    }

    raw.parse::<f64>().ok().filter(|s| *s >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compilation_videos(n: usize) -> Vec<VideoSample> {
        (0..n)
            .map(|i| {
                VideoSample::new(
                    format!("Top 10 Epic Fails Compilation #{}", i),
                    "The best moments of the week.",
                )
                .with_duration(480.0)
            })
            .collect()
    }

    #[test]
    fn test_compilation_channel_detected() {
        let analyzer = ContentTypeAnalyzer::new();
        let verdict = analyzer.analyze(
            "Faceless Top 10 Compilations",
            "Daily top 10 compilation countdowns with relaxing background music, no commentary",
            &compilation_videos(10),
        );

        assert_eq!(verdict.content_type, ContentType::Compilation);
        assert!(verdict.faceless_score >= 70, "score {}", verdict.faceless_score);
        assert!(verdict.copy_indicators.iter().any(|i| i == "compilation"));
        assert!(verdict.copy_indicators.iter().any(|i| i == "top 10"));
    }

    #[test]
    fn test_tutorial_wins_over_screen_recording() {
        let analyzer = ContentTypeAnalyzer::new();
        let videos = vec![
            VideoSample::new("Blender tutorial for beginners", "Full screen recording walkthrough"),
            VideoSample::new("How to model a chair", "Step by step guide"),
        ];
        let verdict = analyzer.analyze("3D Academy", "", &videos);
        assert_eq!(verdict.content_type, ContentType::Tutorial);
    }

    #[test]
    fn test_voiceover_detected() {
        let analyzer = ContentTypeAnalyzer::new();
        let videos = vec![VideoSample::new("The fall of Rome", "AI voice narration over stock footage")];
        let verdict = analyzer.analyze("History Narrated", "", &videos);
        assert_eq!(verdict.content_type, ContentType::FacelessVoiceover);
    }

    #[test]
    fn test_empty_channel_is_unknown() {
        let analyzer = ContentTypeAnalyzer::new();
        let verdict = analyzer.analyze("Some Channel", "", &[]);
        assert_eq!(verdict.content_type, ContentType::Unknown);
        assert_eq!(verdict.faceless_score, 0);
        assert!(verdict.copy_indicators.is_empty());
    }

    #[test]
    fn test_adding_non_faceless_video_cannot_increase_score() {
        // 8 -> 9 videos stays inside the same upload-frequency band, so the
        // only moving signal is the faceless fraction.
        let analyzer = ContentTypeAnalyzer::new();
        let mut videos = compilation_videos(4);
        videos.extend((0..4).map(|i| VideoSample::new(format!("My day {}", i), "vlog")));

        let before = analyzer.analyze("Channel", "", &videos).faceless_score;
        videos.push(VideoSample::new("Another plain video", "nothing special"));
        let after = analyzer.analyze("Channel", "", &videos).faceless_score;

        assert!(after <= before, "{} > {}", after, before);
    }

    #[test]
    fn test_adding_faceless_video_cannot_decrease_score() {
        let analyzer = ContentTypeAnalyzer::new();
        let mut videos = compilation_videos(4);
        videos.extend((0..4).map(|i| VideoSample::new(format!("My day {}", i), "vlog")));

        let before = analyzer.analyze("Channel", "", &videos).faceless_score;
        videos.push(VideoSample::new("Top 10 compilation of wins", ""));
        let after = analyzer.analyze("Channel", "", &videos).faceless_score;

        assert!(after >= before, "{} < {}", after, before);
    }

    #[test]
    fn test_duration_band_scoring() {
        let analyzer = ContentTypeAnalyzer::new();

        // 8-minute videos sit in the optimal faceless band.
        let optimal = analyzer.analyze("C", "", &compilation_videos(10));
        // 90-minute videos fall outside both bands.
        let long: Vec<VideoSample> = (0..10)
            .map(|i| {
                VideoSample::new(format!("Top 10 Epic Fails Compilation #{}", i), "")
                    .with_duration(5400.0)
            })
            .collect();
        let outside = analyzer.analyze("C", "", &long);

        assert!(optimal.faceless_score > outside.faceless_score);
        assert_eq!(outside.avg_duration_minutes, 90.0);
    }

    #[test]
    fn test_parse_duration_iso_and_seconds() {
        assert_eq!(parse_duration("PT1H2M3S"), Some(3723.0));
        assert_eq!(parse_duration("PT15M"), Some(900.0));
        assert_eq!(parse_duration("PT45S"), Some(45.0));
        assert_eq!(parse_duration("612"), Some(612.0));
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("PTXYZ"), None);
        assert_eq!(parse_duration("-5"), None);
    }
}
