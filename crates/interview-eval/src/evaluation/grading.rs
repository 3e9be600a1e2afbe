use serde::{Deserialize, Serialize};

/// Discrete grade bands over a 0-100 score. Band lower bounds are inclusive:
/// exactly 90 grades as `Excellent`, exactly 89 as `Good`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerGrade {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
    NeedsPractice,
}

impl AnswerGrade {
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            75..=89 => Self::Good,
            55..=74 => Self::Fair,
            35..=54 => Self::NeedsImprovement,
            _ => Self::NeedsPractice,
        }
    }

    /// Numeric level from 5 (best) down to 1.
    pub const fn level(self) -> u8 {
        match self {
            Self::Excellent => 5,
            Self::Good => 4,
            Self::Fair => 3,
            Self::NeedsImprovement => 2,
            Self::NeedsPractice => 1,
        }
    }

    /// Qualitative label shown to candidates.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "素晴らしい",
            Self::Good => "良い",
            Self::Fair => "まずまず",
            Self::NeedsImprovement => "改善の余地あり",
            Self::NeedsPractice => "要練習",
        }
    }
}

/// Maps a 0-100 score to a 1-5 level.
pub fn score_to_level(score: u8) -> u8 {
    AnswerGrade::from_score(score).level()
}

/// Maps a 0-100 score to its qualitative label.
pub fn score_to_label(score: u8) -> &'static str {
    AnswerGrade::from_score(score).label()
}
