//! 生成した例文に対する性質のテスト
//!
//! - 解析は決定的で，同じ原文からは同じ id を含む同じ結果が得られる
//! - Segment の列は原文の語とマーカーの並びをそのまま反映する
//! - 読み上げテキストは原文のマーカーを解答で置き換えて空白を正規化したもの
//! - 任意の入力（マーカーとして壊れたものを含む）で panic しない

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use cloze_json::cloze_txt::{
    parser::parse_cloze_txt,
    renderer::{render_masked_text, render_spoken_text},
    segment::{Segment, Sentence},
};

#[derive(Debug, Clone)]
enum RawPiece {
    Word(String),
    Marker { answer: String, hint: Option<String> },
}

fn arb_word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9'!?.,;:我有笔苹果啊-]{1,8}").unwrap()
}

fn arb_plain_answer() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{1,10}").unwrap()
}

fn arb_hyphenated_answer() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{1,6}(-[a-z0-9]{1,6}){0,2}").unwrap()
}

fn arb_hint() -> impl Strategy<Value = String> {
    proptest::sample::select(vec!["笔", "苹果", "车站", "玩", "自尊", "gloss", "x"])
        .prop_map(|hint| hint.to_owned())
}

fn arb_piece() -> impl Strategy<Value = RawPiece> {
    prop_oneof![
        3 => arb_word().prop_map(RawPiece::Word),
        1 => arb_plain_answer().prop_map(|answer| RawPiece::Marker { answer, hint: None }),
        2 => (arb_hyphenated_answer(), arb_hint()).prop_map(|(answer, hint)| RawPiece::Marker {
            answer,
            hint: Some(hint),
        }),
    ]
}

fn arb_separator() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ \\t]{1,3}").unwrap()
}

// 語とマーカーを空白で区切って並べた原文と，その並びの期待値を作る
fn arb_authored_sentence() -> impl Strategy<Value = (String, Vec<RawPiece>)> {
    (
        proptest::collection::vec((arb_separator(), arb_piece()), 0..8),
        arb_separator(),
    )
        .prop_map(|(pairs, trailing)| {
            let mut raw = String::new();
            let mut pieces = Vec::new();

            for (separator, piece) in pairs {
                raw.push_str(&separator);
                match &piece {
                    RawPiece::Word(word) => raw.push_str(word),
                    RawPiece::Marker { answer, hint } => {
                        raw.push('(');
                        raw.push_str(answer);
                        if let Some(hint) = hint {
                            raw.push('-');
                            raw.push_str(hint);
                        }
                        raw.push(')');
                    }
                }
                pieces.push(piece);
            }
            raw.push_str(&trailing);

            (raw, pieces)
        })
}

proptest! {
    #[test]
    fn segments_mirror_the_authored_pieces((raw, pieces) in arb_authored_sentence()) {
        let sentence = parse_cloze_txt("s1", &raw);

        let expected: Vec<(bool, String, Option<String>)> = pieces
            .iter()
            .map(|piece| match piece {
                RawPiece::Word(word) => (false, word.clone(), None),
                RawPiece::Marker { answer, hint } => (
                    true,
                    answer.clone(),
                    Some(hint.clone().unwrap_or_else(|| "?".to_owned())),
                ),
            })
            .collect();

        let actual: Vec<(bool, String, Option<String>)> = sentence
            .segments
            .iter()
            .map(|segment| {
                (
                    segment.is_blank(),
                    segment.display_text().to_owned(),
                    segment.hint().map(|hint| hint.to_owned()),
                )
            })
            .collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn raw_is_preserved_for_non_empty_input((raw, _pieces) in arb_authored_sentence()) {
        let sentence = parse_cloze_txt("s1", &raw);
        prop_assert_eq!(sentence.raw, raw);
    }

    #[test]
    fn spoken_text_is_the_completed_sentence((raw, pieces) in arb_authored_sentence()) {
        let sentence = parse_cloze_txt("s1", &raw);

        let expected = pieces
            .iter()
            .map(|piece| match piece {
                RawPiece::Word(word) => word.clone(),
                RawPiece::Marker { answer, .. } => answer.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ");

        prop_assert_eq!(render_spoken_text(&sentence), expected);
    }

    #[test]
    fn masked_text_replaces_blanks_with_hints((raw, pieces) in arb_authored_sentence()) {
        let sentence = parse_cloze_txt("s1", &raw);

        let expected = pieces
            .iter()
            .map(|piece| match piece {
                RawPiece::Word(word) => word.clone(),
                RawPiece::Marker { hint, .. } => {
                    format!("({})", hint.clone().unwrap_or_else(|| "?".to_owned()))
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        prop_assert_eq!(render_masked_text(&sentence), expected);
    }

    #[test]
    fn blanks_accept_their_own_answer((raw, _pieces) in arb_authored_sentence()) {
        let sentence = parse_cloze_txt("s1", &raw);

        for segment in sentence.blanks() {
            let answer = segment.answer().unwrap();
            let padded = format!("  {}  ", answer);
            let extended = format!("{}x", answer);
            prop_assert!(segment.accepts(answer));
            prop_assert!(segment.accepts(&answer.to_uppercase()));
            prop_assert!(segment.accepts(&padded));
            prop_assert!(!segment.accepts(&extended));
        }
    }

    #[test]
    fn sentences_solve_with_their_own_answers((raw, _pieces) in arb_authored_sentence()) {
        let sentence = parse_cloze_txt("s1", &raw);

        let answers: HashMap<String, String> = sentence
            .blanks()
            .map(|segment| (segment.id().to_owned(), segment.answer().unwrap().to_owned()))
            .collect();

        prop_assert!(sentence.is_solved(&answers));
    }

    #[test]
    fn sentence_json_roundtrip((raw, _pieces) in arb_authored_sentence()) {
        let sentence = parse_cloze_txt("s1", &raw);

        let json = serde_json::to_value(&sentence).unwrap();
        let restored: Sentence = serde_json::from_value(json).unwrap();

        prop_assert_eq!(sentence, restored);
    }

    #[test]
    fn arbitrary_input_parses_deterministically_with_unique_ids(
        raw in ".*",
        sentence_id in "[a-z0-9]{1,8}",
    ) {
        let first = parse_cloze_txt(&sentence_id, &raw);
        let second = parse_cloze_txt(&sentence_id, &raw);
        prop_assert_eq!(&first, &second);

        let id_prefix = format!("{}-", sentence_id);
        let mut ids = HashSet::new();
        for segment in &first.segments {
            prop_assert!(segment.id().starts_with(&id_prefix));
            prop_assert!(ids.insert(segment.id().to_owned()));

            if let Segment::Word { text, .. } = segment {
                prop_assert!(!text.is_empty());
                prop_assert!(!text.contains(char::is_whitespace));
            }
        }
    }
}
