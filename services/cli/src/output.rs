use interview_eval::{score_to_label, AnswerEvaluation};

/// Renders the evaluation as the same context block the coaching app embeds
/// into its feedback prompts.
pub(crate) fn render_report(evaluation: &AnswerEvaluation) -> String {
    let mut lines = vec![
        "【事前分析結果（ルールベース）】".to_string(),
        format!(
            "- 総合スコア: {}/100 ({})",
            evaluation.overall_score,
            score_to_label(evaluation.overall_score)
        ),
        format!("- 文字数適切さ: {}/100", evaluation.scores.length),
        format!("- 具体性: {}/100", evaluation.scores.specificity),
        format!("- 構造: {}/100", evaluation.scores.structure),
        format!("- STAR要素: {}/100", evaluation.scores.star_elements),
    ];

    if !evaluation.positives.is_empty() {
        lines.push(format!("- 良い点: {}", evaluation.positives.join("、")));
    }
    if !evaluation.improvements.is_empty() {
        lines.push(format!("- 改善点: {}", evaluation.improvements.join("、")));
    }

    lines.join("\n")
}
