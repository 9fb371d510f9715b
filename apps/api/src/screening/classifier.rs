//! Hiring-probability classifier — maps a relevance score to a qualitative tier.

use serde::{Deserialize, Serialize};

/// Qualitative hiring assessment derived from the analyzer's numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HiringProbability {
    High,
    Medium,
    Low,
}

impl HiringProbability {
    /// Classifies a score into a tier. Total over the integer domain:
    /// out-of-range scores still classify rather than fail, since the
    /// analyzer's output is not independently range-validated here.
    ///
    /// score > 60 → High; 40 < score ≤ 60 → Medium; score ≤ 40 → Low.
    pub fn from_score(score: i64) -> Self {
        if score > 60 {
            HiringProbability::High
        } else if score > 40 {
            HiringProbability::Medium
        } else {
            HiringProbability::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_above_60_is_high() {
        assert_eq!(HiringProbability::from_score(61), HiringProbability::High);
        assert_eq!(HiringProbability::from_score(75), HiringProbability::High);
        assert_eq!(HiringProbability::from_score(100), HiringProbability::High);
    }

    #[test]
    fn test_boundary_60_is_medium_not_high() {
        assert_eq!(HiringProbability::from_score(60), HiringProbability::Medium);
    }

    #[test]
    fn test_midrange_is_medium() {
        assert_eq!(HiringProbability::from_score(41), HiringProbability::Medium);
        assert_eq!(HiringProbability::from_score(50), HiringProbability::Medium);
    }

    #[test]
    fn test_boundary_40_is_low_not_medium() {
        assert_eq!(HiringProbability::from_score(40), HiringProbability::Low);
    }

    #[test]
    fn test_zero_is_low() {
        assert_eq!(HiringProbability::from_score(0), HiringProbability::Low);
    }

    #[test]
    fn test_out_of_range_scores_still_classify() {
        assert_eq!(HiringProbability::from_score(-5), HiringProbability::Low);
        assert_eq!(HiringProbability::from_score(250), HiringProbability::High);
    }

    #[test]
    fn test_classification_is_deterministic() {
        for score in [0, 40, 41, 60, 61, 100] {
            assert_eq!(
                HiringProbability::from_score(score),
                HiringProbability::from_score(score)
            );
        }
    }

    #[test]
    fn test_serde_uses_capitalized_variants() {
        let json = serde_json::to_string(&HiringProbability::High).unwrap();
        assert_eq!(json, r#""High""#);
        let parsed: HiringProbability = serde_json::from_str(r#""Low""#).unwrap();
        assert_eq!(parsed, HiringProbability::Low);
    }
}
