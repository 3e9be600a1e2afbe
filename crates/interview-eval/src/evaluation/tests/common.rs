//! Shared answer fixtures. Character counts matter for the length scorer:
//! the behavioral band is 250-600, so the full STAR answer is kept at roughly
//! 265 characters.

/// Behavioral-grade answer covering all four STAR categories, with numbers,
/// two specificity markers, and three structure marker groups.
pub(super) fn full_star_answer() -> String {
    concat!(
        "当時、私は10名のメンバーからなる開発チームのリーダーを務めており、",
        "顧客からの問い合わせ対応に時間がかかりすぎるという課題を抱えていました。",
        "まず、対応フローを可視化し、遅延の原因がどこにあるのかを特定する必要があると判断しました。",
        "次に、例えばテンプレートの整備やFAQの拡充など、具体的な改善策を3件実施しました。",
        "あわせて、週に1回の振り返り会を設け、メンバー全員で改善のアイデアを出し合う場を作りました。",
        "結果として、平均対応時間を40%削減することができ、顧客からの評価も大きく向上しました。",
        "この取り組みは現在も継続しています。",
    )
    .to_string()
}

/// Matches situation, task, and action but none of the result patterns.
pub(super) fn three_element_answer() -> &'static str {
    "当時、私はチームでの作業分担に関する課題を認識していました。私は新しい分担表を作成する対応を行いました。"
}

/// Matches only the situation and action categories.
pub(super) fn two_element_answer() -> &'static str {
    "当時、私は新しい仕組みを提案しました。"
}

/// Matches no detection pattern at all.
pub(super) fn vague_answer() -> &'static str {
    "よろしくお願いします。"
}

/// Long filler with no digits, markers, or sentence breaks.
pub(super) fn rambling_answer() -> String {
    "あ".repeat(1000)
}
