//! Provider wire types.

use serde::{Deserialize, Serialize};

/// One sampled interest value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestPoint {
    pub date: String,
    /// 0-100 relative popularity.
    pub value: u32,
}

/// Interest-over-time series for one keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestSeries {
    pub keyword: String,
    #[serde(default)]
    pub points: Vec<InterestPoint>,
}

impl InterestSeries {
    /// Mean interest over the series, as an integer score.
    pub fn mean(&self) -> Option<u32> {
        if self.points.is_empty() {
            return None;
        }
        let sum: u64 = self.points.iter().map(|p| p.value as u64).sum();
        Some((sum / self.points.len() as u64) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_series() {
        let series = InterestSeries {
            keyword: "ai".into(),
            points: vec![
                InterestPoint { date: "2024-01".into(), value: 60 },
                InterestPoint { date: "2024-02".into(), value: 80 },
                InterestPoint { date: "2024-03".into(), value: 70 },
            ],
        };
        assert_eq!(series.mean(), Some(70));
    }

    #[test]
    fn test_mean_empty_is_none() {
        let series = InterestSeries {
            keyword: "ai".into(),
            points: Vec::new(),
        };
        assert_eq!(series.mean(), None);
    }
}
