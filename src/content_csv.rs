// コンテンツストアからエクスポートされた Article / Sentence テーブル（CSV）の解析
//
// 列はヘッダ行の名前で対応付ける：
// - Article.csv  : id, title, description?, createdAt?
// - Sentence.csv : id, articleId, content
// 省略可能な列はファイルごと欠けていてもよい

pub mod parser;
