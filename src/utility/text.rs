use encoding_rs::{GB18030, UTF_8};

// コンテンツのエクスポートは UTF-8 とされているが，
// 表計算ソフトで編集されたものは GB 18030 で保存されていることがある
// UTF-8 として解釈できなければ GB 18030 として読む（BOM があれば除く）
pub fn decode_text(bytes: &[u8]) -> String {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return text.into_owned();
    }

    GB18030.decode(bytes).0.into_owned()
}
