use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interview category selecting the ideal answer length and score weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    General,
    Technical,
    Behavioral,
}

impl InterviewType {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Technical => "technical",
            Self::Behavioral => "behavioral",
        }
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Raised for tags outside `general`/`technical`/`behavioral`. Callers decide
/// the fallback policy; the evaluator itself never sees an invalid type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown interview type '{0}', expected general, technical, or behavioral")]
pub struct ParseInterviewTypeError(pub String);

impl FromStr for InterviewType {
    type Err = ParseInterviewTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Self::General),
            "technical" => Ok(Self::Technical),
            "behavioral" => Ok(Self::Behavioral),
            _ => Err(ParseInterviewTypeError(value.to_string())),
        }
    }
}

/// Per-criterion scores, each clamped to 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionScores {
    /// Appropriateness of the answer length.
    pub length: u8,
    /// Presence of concrete numbers, examples, and episodes.
    pub specificity: u8,
    /// Logical ordering of the exposition.
    pub structure: u8,
    /// Coverage of the STAR narrative elements.
    pub star_elements: u8,
}

/// Evaluation output with the composite score and the feedback trail.
///
/// Serialized field names match the wire shape the host application embeds
/// into its feedback prompts (`overallScore`, `starElements`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEvaluation {
    pub overall_score: u8,
    pub scores: CriterionScores,
    /// Strengths detected in the answer, in detection order.
    pub positives: Vec<String>,
    /// Weaknesses detected in the answer, in detection order.
    pub improvements: Vec<String>,
}

/// The four STAR narrative elements, detected independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarElement {
    Situation,
    Task,
    Action,
    Result,
}

impl StarElement {
    pub const ALL: [Self; 4] = [Self::Situation, Self::Task, Self::Action, Self::Result];

    /// Display label used in feedback messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Situation => "状況",
            Self::Task => "課題",
            Self::Action => "行動",
            Self::Result => "結果",
        }
    }
}
