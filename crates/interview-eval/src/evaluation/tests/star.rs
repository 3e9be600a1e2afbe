use super::common::*;
use crate::evaluation::rules::score_star_elements;
use crate::evaluation::InterviewType;

#[test]
fn behavioral_full_coverage_overrides_to_one_hundred() {
    let mut positives = Vec::new();
    let mut improvements = Vec::new();

    let score = score_star_elements(
        &full_star_answer(),
        InterviewType::Behavioral,
        &mut positives,
        &mut improvements,
    );

    assert_eq!(score, 100);
    assert_eq!(
        positives,
        vec!["STAR法の4要素（状況・課題・行動・結果）がすべて含まれています".to_string()]
    );
    assert!(improvements.is_empty());
}

#[test]
fn behavioral_three_elements_stay_at_seventy_five() {
    let mut positives = Vec::new();
    let mut improvements = Vec::new();

    let score = score_star_elements(
        three_element_answer(),
        InterviewType::Behavioral,
        &mut positives,
        &mut improvements,
    );

    // Only full coverage earns the override; three of four keeps 3 * 25.
    assert_eq!(score, 75);
    assert_eq!(
        positives,
        vec!["STAR法の3要素が含まれています".to_string()]
    );
    assert_eq!(
        improvements,
        vec!["STAR法の「結果」を追加すると良いでしょう".to_string()]
    );
}

#[test]
fn behavioral_sparse_answer_gets_the_framework_reminder() {
    let mut positives = Vec::new();
    let mut improvements = Vec::new();

    let score = score_star_elements(
        vague_answer(),
        InterviewType::Behavioral,
        &mut positives,
        &mut improvements,
    );

    assert_eq!(score, 0);
    assert!(positives.is_empty());
    assert_eq!(
        improvements,
        vec!["STAR法（状況→課題→行動→結果）を意識して構成しましょう".to_string()]
    );
}

#[test]
fn general_full_coverage_notes_a_concrete_episode() {
    let mut positives = Vec::new();
    let mut improvements = Vec::new();

    let score = score_star_elements(
        &full_star_answer(),
        InterviewType::General,
        &mut positives,
        &mut improvements,
    );

    assert_eq!(score, 100);
    assert_eq!(
        positives,
        vec!["エピソードが具体的に構成されています".to_string()]
    );
    assert!(improvements.is_empty());
}

#[test]
fn general_two_elements_is_the_silent_band() {
    let mut positives = Vec::new();
    let mut improvements = Vec::new();

    let score = score_star_elements(
        two_element_answer(),
        InterviewType::General,
        &mut positives,
        &mut improvements,
    );

    assert_eq!(score, 50);
    assert!(positives.is_empty());
    assert!(improvements.is_empty());
}

#[test]
fn technical_sparse_answer_asks_for_an_episode() {
    let mut positives = Vec::new();
    let mut improvements = Vec::new();

    let score = score_star_elements(
        vague_answer(),
        InterviewType::Technical,
        &mut positives,
        &mut improvements,
    );

    assert_eq!(score, 0);
    assert_eq!(
        improvements,
        vec!["具体的なエピソード（状況→行動→結果）を加えると良いでしょう".to_string()]
    );
}
