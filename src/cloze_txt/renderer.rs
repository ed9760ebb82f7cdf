use crate::cloze_txt::segment::{Segment, Sentence};

// 解答をすべて埋めた完成形の文を組み立てる（読み上げ用）
// 各 Segment の表示テキストを半角スペースで連結する
pub fn render_spoken_text(sentence: &Sentence) -> String {
    sentence
        .segments
        .iter()
        .map(|segment| segment.display_text())
        .collect::<Vec<_>>()
        .join(" ")
}

// 学習者に最初に提示する形の文を組み立てる
// ブランクは "(ヒント)" に置き換える
pub fn render_masked_text(sentence: &Sentence) -> String {
    sentence
        .segments
        .iter()
        .map(|segment| match segment {
            Segment::Word { text, .. } => text.clone(),
            Segment::Blank { hint, .. } => format!("({})", hint),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
