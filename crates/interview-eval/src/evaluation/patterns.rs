//! Rule tables shared by the sub-scorers: detection regexes, ideal length
//! bands, and the per-type weight rows. Patterns target Japanese answers.

use once_cell::sync::Lazy;
use regex::Regex;

use super::domain::{InterviewType, StarElement};

/// Ideal answer length in characters for an interview type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBand {
    pub min: usize,
    pub max: usize,
}

impl LengthBand {
    pub const fn for_type(interview_type: InterviewType) -> Self {
        match interview_type {
            InterviewType::General => Self { min: 150, max: 400 },
            InterviewType::Technical => Self { min: 200, max: 500 },
            InterviewType::Behavioral => Self { min: 250, max: 600 },
        }
    }
}

/// Criterion weights applied when combining sub-scores. Each row sums to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub length: f64,
    pub specificity: f64,
    pub structure: f64,
    pub star_elements: f64,
}

impl ScoreWeights {
    pub const fn for_type(interview_type: InterviewType) -> Self {
        match interview_type {
            // Behavioral interviews emphasize the STAR narrative.
            InterviewType::Behavioral => Self {
                length: 0.15,
                specificity: 0.25,
                structure: 0.20,
                star_elements: 0.40,
            },
            // Technical interviews emphasize specificity.
            InterviewType::Technical => Self {
                length: 0.20,
                specificity: 0.35,
                structure: 0.25,
                star_elements: 0.20,
            },
            InterviewType::General => Self {
                length: 0.25,
                specificity: 0.30,
                structure: 0.25,
                star_elements: 0.20,
            },
        }
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("rule table pattern compiles"))
        .collect()
}

static SITUATION: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        "当時|その頃|プロジェクト(?:で|の)|チーム(?:で|の)|環境|背景|状況",
        "年前|年目|入社",
        "規模|人数|メンバー",
    ])
});

static TASK: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        "課題|問題|目標|ゴール|目的|解決すべき|求められ",
        "必要(?:だった|でした|があ)",
        "〜する(?:必要|ため)",
    ])
});

static ACTION: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        "私(?:は|が)|自分(?:は|が)|私自身",
        "実施|実行|取り組|行い|行った|対応|提案|導入|設計|実装",
        "判断|決定|選択|検討",
    ])
});

static RESULT: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        "結果|成果|効果|改善|向上|削減|達成",
        r"\d+%|〇〇%|約\d+",
        "できた|できました|なりました|しました$",
    ])
});

/// Detection patterns for one STAR category; a category counts as present
/// when any of its patterns match.
pub(crate) fn star_patterns(element: StarElement) -> &'static [Regex] {
    match element {
        StarElement::Situation => &SITUATION,
        StarElement::Task => &TASK,
        StarElement::Action => &ACTION,
        StarElement::Result => &RESULT,
    }
}

pub(crate) static HAS_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d").expect("number pattern compiles"));

/// Markers signalling a concrete rather than abstract answer.
pub(crate) static SPECIFICITY_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\d+(?:人|名|件|個|回|時間|日|週|ヶ月|年|%|倍)",
        "具体的(?:に|には)",
        "例えば|たとえば",
        "実際(?:に|には)",
    ])
});

/// Sequence and causal connectives signalling ordered exposition.
pub(crate) static STRUCTURE_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        "まず|最初に|第一に",
        "次に|その後|続いて|第二に",
        "最終的に|結果として|結論として",
        "理由(?:は|として)",
        "なぜなら|というのも",
    ])
});
