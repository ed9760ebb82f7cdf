use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ヒントが与えられなかったときに表示する代替ヒント
pub const DEFAULT_HINT: &str = "?";

// 解析された例文を構成する要素
// id は例文内で一意であり，同じ原文からは常に同じ id が導出される
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum Segment {
    Word { id: String, text: String },
    Blank { id: String, answer: String, hint: String },
}

impl Segment {
    pub fn id(&self) -> &str {
        match self {
            Segment::Word { id, .. } | Segment::Blank { id, .. } => id,
        }
    }

    // 解答済みの文として表示・読み上げするときのテキスト
    pub fn display_text(&self) -> &str {
        match self {
            Segment::Word { text, .. } => text,
            Segment::Blank { answer, .. } => answer,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Segment::Blank { .. })
    }

    pub fn answer(&self) -> Option<&str> {
        match self {
            Segment::Word { .. } => None,
            Segment::Blank { answer, .. } => Some(answer),
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            Segment::Word { .. } => None,
            Segment::Blank { hint, .. } => Some(hint),
        }
    }

    // 学習者の入力が解答として正しいか
    // 前後の空白と大文字・小文字の違いは無視する
    // 解答が空のブランク（マーカーから解答を導出できなかったもの）は何を入力しても正解にならない
    pub fn accepts(&self, input: &str) -> bool {
        match self {
            Segment::Word { .. } => false,
            Segment::Blank { answer, .. } => {
                !answer.is_empty() && input.trim().to_lowercase() == answer.to_lowercase()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub id: String,
    pub raw: String,
    pub segments: Vec<Segment>,
}

impl Sentence {
    pub fn blanks(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|segment| segment.is_blank())
    }

    // segment id をキーとする入力の表ですべてのブランクが正解になっているか
    // ブランクのない例文は常に true
    pub fn is_solved(&self, answers: &HashMap<String, String>) -> bool {
        self.blanks().all(|segment| {
            answers
                .get(segment.id())
                .map(|input| segment.accepts(input))
                .unwrap_or(false)
        })
    }
}

// マーカーの間の平文がマーカーに対して前にあるか後ろにあるか
// 最後のマーカーより後ろの平文だけが Post となる
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GapPosition {
    Pre,
    Post,
}

impl GapPosition {
    fn tag(&self) -> &'static str {
        match self {
            GapPosition::Pre => "pre",
            GapPosition::Post => "post",
        }
    }
}

// Segment の列を id を導出しながら構築する
pub struct SegmentList {
    sentence_id: String,
    items: Vec<Segment>,
}

impl SegmentList {
    pub fn new(sentence_id: &str) -> SegmentList {
        SegmentList {
            sentence_id: sentence_id.to_owned(),
            items: Vec::new(),
        }
    }

    // 平文を空白で区切って Word として追加する
    // gap_start は原文における平文の開始位置（文字数），id はその位置と語順から導出される
    pub fn push_gap(&mut self, position: GapPosition, gap_start: usize, gap: &str) {
        for (index, word) in gap.split_whitespace().enumerate() {
            self.items.push(Segment::Word {
                id: format!(
                    "{}-{}-{}-{}",
                    self.sentence_id,
                    position.tag(),
                    gap_start,
                    index
                ),
                text: word.to_owned(),
            });
        }
    }

    // marker_start は原文におけるマーカーの "(" の位置（文字数）
    pub fn push_blank(&mut self, marker_start: usize, answer: String, hint: String) {
        self.items.push(Segment::Blank {
            id: format!("{}-blank-{}", self.sentence_id, marker_start),
            answer,
            hint,
        });
    }

    pub fn collect_to_vec(self) -> Vec<Segment> {
        self.items
    }
}
