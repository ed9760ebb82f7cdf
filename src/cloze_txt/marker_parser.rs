use crate::cloze_txt::segment::DEFAULT_HINT;

// マーカーの中身 "answer" または "answer-hint" を（解答，ヒント）に分解する
//
// 区切りは最後のハイフン："self-esteem-自尊" は ("self-esteem", "自尊") となる
// ハイフンがないときは中身全体が解答となり，ヒントは DEFAULT_HINT に落ちる
// ハイフンの後ろが空白だけのとき（"pen-" など）も同様
pub(super) fn parse_marker(content: &str) -> (String, String) {
    match content.rfind('-') {
        Some(separator) => {
            let answer = content[..separator].trim().to_owned();
            let hint = content[(separator + 1)..].trim();
            let hint = if hint.is_empty() { DEFAULT_HINT } else { hint };
            (answer, hint.to_owned())
        }
        None => (content.to_owned(), DEFAULT_HINT.to_owned()),
    }
}
