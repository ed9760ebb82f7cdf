use std::collections::HashSet;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>, // 無いときは title で代用する
    pub created_at: Option<String>,  // ISO 8601 のままで解釈しない
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceRow {
    pub id: String,
    pub article_id: String,
    pub content: String, // 空でもよい（解析時に診断用テキストへ置き換わる）
}

#[derive(Debug)]
pub struct ContentIndex {
    pub articles: Vec<ArticleRow>,
    pub sentences: Vec<SentenceRow>,
}

// 行の順序はテーブルの順序をそのまま保つ（並べ替えはしない）
pub fn parse_content_csv(article_csv: &str, sentence_csv: &str) -> Result<ContentIndex> {
    let articles = parse_article_table(article_csv).context("Failed to parse Article table")?;
    let sentences = parse_sentence_table(sentence_csv).context("Failed to parse Sentence table")?;

    Ok(ContentIndex {
        articles,
        sentences,
    })
}

fn parse_article_table(article_csv: &str) -> Result<Vec<ArticleRow>> {
    let mut reader = csv::Reader::from_reader(article_csv.as_bytes());

    let mut ids = HashSet::<String>::new();
    let mut articles = Vec::new();

    for (i, record) in reader.deserialize().enumerate() {
        let article: ArticleRow =
            record.with_context(|| format!("Failed to parse record at {}", i))?;

        ensure!(!article.id.is_empty(), "Article at {} has empty id", i);
        ensure!(
            ids.insert(article.id.clone()),
            "Different articles has same id: {}",
            &article.id
        );

        articles.push(article);
    }

    Ok(articles)
}

fn parse_sentence_table(sentence_csv: &str) -> Result<Vec<SentenceRow>> {
    let mut reader = csv::Reader::from_reader(sentence_csv.as_bytes());

    let mut ids = HashSet::<String>::new();
    let mut sentences = Vec::new();

    for (i, record) in reader.deserialize().enumerate() {
        let sentence: SentenceRow =
            record.with_context(|| format!("Failed to parse record at {}", i))?;

        ensure!(!sentence.id.is_empty(), "Sentence at {} has empty id", i);
        ensure!(
            !sentence.article_id.is_empty(),
            "Sentence {} has empty articleId",
            &sentence.id
        );
        ensure!(
            ids.insert(sentence.id.clone()),
            "Different sentences has same id: {}",
            &sentence.id
        );

        sentences.push(sentence);
    }

    Ok(sentences)
}
