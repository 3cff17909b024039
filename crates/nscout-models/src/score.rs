//! Niche scores, factor breakdowns, and letter grades.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade for a total niche score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
}

impl Grade {
    /// Grade a total score on the fixed band table.
    pub fn from_total(total: f64) -> Self {
        if total >= 90.0 {
            Grade::APlus
        } else if total >= 85.0 {
            Grade::A
        } else if total >= 80.0 {
            Grade::AMinus
        } else if total >= 75.0 {
            Grade::BPlus
        } else if total >= 70.0 {
            Grade::B
        } else if total >= 65.0 {
            Grade::BMinus
        } else if total >= 60.0 {
            Grade::CPlus
        } else if total >= 55.0 {
            Grade::C
        } else {
            Grade::D
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One factor of the five-factor breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FactorScore {
    pub score: f64,
    pub max_points: f64,
    /// Human-readable summary of the inputs behind the score.
    pub details: String,
    /// Where the inputs came from (live scrape, cache, static table, ...).
    pub data_source: String,
}

impl FactorScore {
    pub fn new(score: f64, max_points: f64, details: impl Into<String>, data_source: impl Into<String>) -> Self {
        Self {
            score,
            max_points,
            details: details.into(),
            data_source: data_source.into(),
        }
    }
}

/// The five-factor breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBreakdown {
    pub search_volume: FactorScore,
    pub competition: FactorScore,
    pub monetization: FactorScore,
    pub content_availability: FactorScore,
    pub trend_momentum: FactorScore,
}

/// Full score for a single niche.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NicheScore {
    pub niche_name: String,
    pub total_score: f64,
    pub grade: Grade,
    pub breakdown: ScoreBreakdown,
    /// RFC 3339 timestamp of when the analysis ran.
    pub analyzed_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_bands() {
        assert_eq!(Grade::from_total(95.0), Grade::APlus);
        assert_eq!(Grade::from_total(90.0), Grade::APlus);
        assert_eq!(Grade::from_total(89.9), Grade::A);
        assert_eq!(Grade::from_total(85.0), Grade::A);
        assert_eq!(Grade::from_total(80.83), Grade::AMinus);
        assert_eq!(Grade::from_total(80.0), Grade::AMinus);
        assert_eq!(Grade::from_total(75.0), Grade::BPlus);
        assert_eq!(Grade::from_total(70.0), Grade::B);
        assert_eq!(Grade::from_total(65.0), Grade::BMinus);
        assert_eq!(Grade::from_total(60.0), Grade::CPlus);
        assert_eq!(Grade::from_total(55.0), Grade::C);
        assert_eq!(Grade::from_total(54.9), Grade::D);
        assert_eq!(Grade::from_total(0.0), Grade::D);
    }

    #[test]
    fn test_grade_monotonic_within_bands() {
        // A finer grade never maps to a lower score band.
        let mut last = Grade::from_total(100.0);
        for step in (0..=1000).rev() {
            let grade = Grade::from_total(step as f64 / 10.0);
            // Walking down the scale, the grade index may only move toward D.
            assert!(grade_rank(grade) >= grade_rank(last) || grade == last);
            last = grade;
        }
    }

    fn grade_rank(grade: Grade) -> u8 {
        match grade {
            Grade::APlus => 0,
            Grade::A => 1,
            Grade::AMinus => 2,
            Grade::BPlus => 3,
            Grade::B => 4,
            Grade::BMinus => 5,
            Grade::CPlus => 6,
            Grade::C => 7,
            Grade::D => 8,
        }
    }

    #[test]
    fn test_grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::AMinus).unwrap(), "\"A-\"");
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
    }
}
