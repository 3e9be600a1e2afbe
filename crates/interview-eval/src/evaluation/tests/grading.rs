use crate::evaluation::{score_to_label, score_to_level, AnswerGrade};

#[test]
fn level_band_lower_bounds_are_inclusive() {
    assert_eq!(score_to_level(100), 5);
    assert_eq!(score_to_level(90), 5);
    assert_eq!(score_to_level(89), 4);
    assert_eq!(score_to_level(75), 4);
    assert_eq!(score_to_level(74), 3);
    assert_eq!(score_to_level(55), 3);
    assert_eq!(score_to_level(54), 2);
    assert_eq!(score_to_level(35), 2);
    assert_eq!(score_to_level(34), 1);
    assert_eq!(score_to_level(0), 1);
}

#[test]
fn labels_follow_the_same_bands() {
    assert_eq!(score_to_label(95), "素晴らしい");
    assert_eq!(score_to_label(80), "良い");
    assert_eq!(score_to_label(60), "まずまず");
    assert_eq!(score_to_label(40), "改善の余地あり");
    assert_eq!(score_to_label(10), "要練習");
}

#[test]
fn grade_exposes_level_and_label_consistently() {
    for score in 0..=100u8 {
        let grade = AnswerGrade::from_score(score);
        assert_eq!(grade.level(), score_to_level(score));
        assert_eq!(grade.label(), score_to_label(score));
    }
}
