//! The four sub-scorers. Each one reads the raw answer text, returns its
//! 0-100 component score, and appends at most a few feedback strings to the
//! caller-owned `positives`/`improvements` lists.

use super::domain::{InterviewType, StarElement};
use super::patterns::{self, LengthBand};

/// Scores the answer length against the ideal band for the interview type.
/// Lengths are character counts, matching how candidates see the counter in
/// the answer form.
pub(crate) fn score_length(
    answer: &str,
    interview_type: InterviewType,
    positives: &mut Vec<String>,
    improvements: &mut Vec<String>,
) -> u8 {
    let length = answer.chars().count();
    let LengthBand { min, max } = LengthBand::for_type(interview_type);

    // The half-band thresholds are min * 0.5 and max * 1.5, kept in integer
    // arithmetic so the comparisons stay exact.
    if length >= min && length <= max {
        positives.push("回答の長さが適切です".to_string());
        100
    } else if length * 2 < min {
        improvements.push("回答が短すぎます。もう少し具体的に説明しましょう".to_string());
        30
    } else if length < min {
        improvements.push("もう少し詳しく説明すると良いでしょう".to_string());
        60
    } else if length * 2 > max * 3 {
        improvements.push("回答が長すぎます。要点を絞って簡潔にしましょう".to_string());
        50
    } else if length > max {
        improvements.push("少し長めです。要点を絞ると良いでしょう".to_string());
        75
    } else {
        // Unreachable given the band checks above.
        70
    }
}

/// Scores how concrete the answer is: numbers plus marker phrases.
pub(crate) fn score_specificity(
    answer: &str,
    positives: &mut Vec<String>,
    improvements: &mut Vec<String>,
) -> u8 {
    let mut score: u8 = 50;

    if patterns::HAS_NUMBER.is_match(answer) {
        score += 20;
        positives.push("具体的な数字を使っています".to_string());
    } else {
        improvements
            .push("具体的な数字（期間、人数、成果など）を入れると説得力が増します".to_string());
    }

    // One flag per distinct marker pattern, not total occurrences.
    let marker_hits = patterns::SPECIFICITY_MARKERS
        .iter()
        .filter(|pattern| pattern.is_match(answer))
        .count();

    match marker_hits {
        hits if hits >= 2 => {
            score += 30;
            positives.push("具体的なエピソードや例が含まれています".to_string());
        }
        1 => score += 15,
        _ => improvements.push("具体的なエピソードや例を加えると良いでしょう".to_string()),
    }

    score.min(100)
}

/// Scores the logical structure: connective markers plus a flat bonus for
/// visible paragraph or sentence breaks.
pub(crate) fn score_structure(
    answer: &str,
    positives: &mut Vec<String>,
    improvements: &mut Vec<String>,
) -> u8 {
    let mut score: u8 = 40;

    let marker_hits = patterns::STRUCTURE_MARKERS
        .iter()
        .filter(|pattern| pattern.is_match(answer))
        .count();

    match marker_hits {
        hits if hits >= 3 => {
            score += 60;
            positives.push("論理的な構造で説明できています".to_string());
        }
        2 => {
            score += 40;
            positives.push("回答に構造があります".to_string());
        }
        1 => score += 20,
        _ => improvements
            .push("「まず〜、次に〜、結果として〜」のような構造を意識すると良いでしょう".to_string()),
    }

    let has_breaks = answer.contains('\n') || answer.split('。').count() >= 3;
    if has_breaks {
        score += 10;
    }

    score.min(100)
}

/// Scores STAR narrative coverage. Each category counts as present when any
/// of its patterns match; 25 points per distinct category found.
pub(crate) fn score_star_elements(
    answer: &str,
    interview_type: InterviewType,
    positives: &mut Vec<String>,
    improvements: &mut Vec<String>,
) -> u8 {
    let found: Vec<StarElement> = StarElement::ALL
        .into_iter()
        .filter(|element| {
            patterns::star_patterns(*element)
                .iter()
                .any(|pattern| pattern.is_match(answer))
        })
        .collect();
    let element_count = found.len();

    let mut score = (element_count as u8 * 25).min(100);

    if interview_type == InterviewType::Behavioral {
        if element_count == 4 {
            positives
                .push("STAR法の4要素（状況・課題・行動・結果）がすべて含まれています".to_string());
            // Full coverage earns the maximum outright; three of four stays
            // at 75 so the missing element still costs points.
            score = 100;
        } else if element_count >= 3 {
            positives.push(format!("STAR法の{element_count}要素が含まれています"));
            let missing: Vec<&str> = StarElement::ALL
                .into_iter()
                .filter(|element| !found.contains(element))
                .map(|element| element.label())
                .collect();
            improvements.push(format!(
                "STAR法の「{}」を追加すると良いでしょう",
                missing.join("・")
            ));
        } else {
            improvements.push("STAR法（状況→課題→行動→結果）を意識して構成しましょう".to_string());
        }
    } else if element_count >= 3 {
        positives.push("エピソードが具体的に構成されています".to_string());
    } else if element_count <= 1 {
        improvements.push("具体的なエピソード（状況→行動→結果）を加えると良いでしょう".to_string());
    }

    score
}
