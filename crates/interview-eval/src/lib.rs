//! Rule-based evaluation of interview practice answers.
//!
//! Grades a written answer along four criteria (length, specificity,
//! structure, STAR-method elements), combines them with interview-type
//! specific weights, and returns the scores together with human-readable
//! feedback. The detection patterns and feedback strings target Japanese
//! answers.
//!
//! ```
//! use interview_eval::{evaluate_answer, score_to_label, InterviewType};
//!
//! let evaluation = evaluate_answer(
//!     "私は3年間のプロジェクトで、チームリーダーとして10名のメンバーを率い、売上を20%向上させました。",
//!     InterviewType::Behavioral,
//! );
//!
//! assert!(evaluation.overall_score <= 100);
//! println!("{}", score_to_label(evaluation.overall_score));
//! for note in &evaluation.positives {
//!     println!("+ {note}");
//! }
//! ```

pub mod evaluation;

pub use evaluation::{
    evaluate_answer, score_to_label, score_to_level, AnswerEvaluation, AnswerGrade,
    CriterionScores, InterviewType, LengthBand, ParseInterviewTypeError, ScoreWeights, StarElement,
};
