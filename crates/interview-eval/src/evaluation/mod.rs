//! Deterministic, rule-based answer evaluation.
//!
//! The evaluator is a total function over `(answer, interview type)`: it
//! performs no I/O, holds no state between calls, and never fails. Feedback
//! entries accumulate across the four sub-scorers in a fixed order (length,
//! specificity, structure, STAR), so repeated calls with the same input
//! produce identical results.

mod domain;
mod grading;
mod patterns;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerEvaluation, CriterionScores, InterviewType, ParseInterviewTypeError, StarElement,
};
pub use grading::{score_to_label, score_to_level, AnswerGrade};
pub use patterns::{LengthBand, ScoreWeights};

/// Evaluate an interview answer.
///
/// Returns the per-criterion scores, the weighted overall score, and the
/// feedback lists. The answer may be any string, including empty; an empty
/// answer simply scores low on every criterion.
pub fn evaluate_answer(answer: &str, interview_type: InterviewType) -> AnswerEvaluation {
    let mut positives = Vec::new();
    let mut improvements = Vec::new();

    let length = rules::score_length(answer, interview_type, &mut positives, &mut improvements);
    let specificity = rules::score_specificity(answer, &mut positives, &mut improvements);
    let structure = rules::score_structure(answer, &mut positives, &mut improvements);
    let star_elements =
        rules::score_star_elements(answer, interview_type, &mut positives, &mut improvements);

    let weights = ScoreWeights::for_type(interview_type);
    let weighted = f64::from(length) * weights.length
        + f64::from(specificity) * weights.specificity
        + f64::from(structure) * weights.structure
        + f64::from(star_elements) * weights.star_elements;
    let overall_score = weighted.round().clamp(0.0, 100.0) as u8;

    tracing::debug!(
        interview_type = %interview_type,
        length,
        specificity,
        structure,
        star_elements,
        overall_score,
        "scored interview answer"
    );

    AnswerEvaluation {
        overall_score,
        scores: CriterionScores {
            length,
            specificity,
            structure,
            star_elements,
        },
        positives,
        improvements,
    }
}
