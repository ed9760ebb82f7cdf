// 練習用例文のテキストフォーマット（cloze txt）の解析
//
// 例文は平文にブランクのマーカーを埋め込んだもの：
// - "(answer)"       期待される解答が answer のブランク
// - "(answer-hint)"  解答の前に表示されるヒント付きのブランク
//   区切りは最後のハイフンとする（解答自体がハイフンを含んでもよい）
//
// フォーマットから外れたものはエラーとせず平文として扱う：
// - 閉じられていない "(" は入力されたままの平文となる
// - 対応する "(" のない ")" も同様

mod marker_parser;
pub mod parser;
pub mod renderer;
pub mod segment;
