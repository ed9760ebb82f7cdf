use once_cell::sync::Lazy;
use regex::Regex;

use crate::cloze_txt::{
    marker_parser::parse_marker,
    segment::{GapPosition, SegmentList, Sentence},
};

// 原文が空だったときに raw へ入れる診断用テキスト
pub const MISSING_CONTENT_TEXT: &str = "Error: No content";

// マーカーは "(" から次の ")" までの最短の範囲（中身は空でもよい）
static REGEX_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());

// 例文の原文を Segment の列に解析する
// 解析は失敗しない：マーカーとして成立しない部分はすべて平文として扱う
pub fn parse_cloze_txt(sentence_id: &str, raw: &str) -> Sentence {
    if raw.is_empty() {
        return Sentence {
            id: sentence_id.to_owned(),
            raw: MISSING_CONTENT_TEXT.to_owned(),
            segments: Vec::new(),
        };
    }

    let mut segments = SegmentList::new(sentence_id);

    // gap_start は現在の平文の開始位置（バイト数），gap_start_chars は同じ位置の文字数
    // id に埋め込むのは文字数のほう
    let mut gap_start = 0;
    let mut gap_start_chars = 0;

    for marker in REGEX_MARKER.find_iter(raw) {
        let gap = &raw[gap_start..marker.start()];
        let marker_start_chars = gap_start_chars + gap.chars().count();

        segments.push_gap(GapPosition::Pre, gap_start_chars, gap);

        // 前後の "(" ")" を除いた中身
        let content = &raw[(marker.start() + 1)..(marker.end() - 1)];
        let (answer, hint) = parse_marker(content);
        segments.push_blank(marker_start_chars, answer, hint);

        gap_start = marker.end();
        gap_start_chars = marker_start_chars + marker.as_str().chars().count();
    }

    segments.push_gap(GapPosition::Post, gap_start_chars, &raw[gap_start..]);

    Sentence {
        id: sentence_id.to_owned(),
        raw: raw.to_owned(),
        segments: segments.collect_to_vec(),
    }
}
