use std::collections::{HashMap, HashSet};

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::{
    cloze_txt::{parser::parse_cloze_txt, segment::Sentence},
    content_csv::parser::ContentIndex,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: Option<String>,
    pub sentences: Vec<Sentence>,
}

// Sentence テーブルの各行を Article に対応付け，原文を解析して Article を組み立てる
// 記事の順序・記事内の例文の順序はどちらもテーブルの行順のまま
pub fn assemble_articles(index: &ContentIndex) -> Result<Vec<Article>> {
    let article_ids: HashSet<&str> = index
        .articles
        .iter()
        .map(|article| article.id.as_str())
        .collect();

    for sentence in &index.sentences {
        ensure!(
            article_ids.contains(sentence.article_id.as_str()),
            "Sentence {} refers unknown article: {}",
            &sentence.id,
            &sentence.article_id
        );
    }

    let mut sentences_by_article = HashMap::<&str, Vec<Sentence>>::new();
    for row in &index.sentences {
        let sentence = parse_cloze_txt(&row.id, &row.content);
        sentences_by_article
            .entry(row.article_id.as_str())
            .or_default()
            .push(sentence);
    }

    let articles = index
        .articles
        .iter()
        .map(|row| Article {
            id: row.id.clone(),
            title: row.title.clone(),
            description: row
                .description
                .clone()
                .unwrap_or_else(|| row.title.clone()),
            created_at: row.created_at.clone(),
            sentences: sentences_by_article
                .remove(row.id.as_str())
                .unwrap_or_default(),
        })
        .collect();

    Ok(articles)
}
