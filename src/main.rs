use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use serde::Serialize;
use std::{
    env,
    fs::{self, File},
    path::{Path, PathBuf},
};

use cloze_json::{
    article::{assemble_articles, Article},
    cloze_txt::renderer::{render_masked_text, render_spoken_text},
    content_csv::parser::{parse_content_csv, ContentIndex},
    utility::{text::decode_text, zip::ZipReader},
};

struct Args {
    content_path: String,
    output_path: Option<String>,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();

    let opts = getopts::Options::new();

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    let content_path = matches
        .free
        .get(0)
        .context("path to content tables (directory or zip file) is required")?
        .clone();
    let output_path = matches.free.get(1).map(|s| s.clone());

    Ok(Args {
        content_path,
        output_path,
    })
}

// 記事一覧に入れる要約（例文は数だけ）
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArticleMeta<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    created_at: &'a Option<String>,
    sentence_count: usize,
}

// bad practice?
enum BuildOut {
    Null,
    File { root: PathBuf },
}

impl BuildOut {
    fn init_file(root: &str) -> Result<Self> {
        let root = PathBuf::from(&root);
        fs::create_dir(&root).context("Failed to create output directory")?;

        Ok(Self::File { root })
    }

    fn save_article_list(&self, articles: &[Article]) -> Result<()> {
        if let BuildOut::File { root } = &self {
            let article_list = articles
                .iter()
                .map(|article| ArticleMeta {
                    id: &article.id,
                    title: &article.title,
                    description: &article.description,
                    created_at: &article.created_at,
                    sentence_count: article.sentences.len(),
                })
                .collect::<Vec<_>>();

            fs::write(
                &root.join("articles.json"),
                serde_json::to_string(&article_list)?,
            )?;
        }

        Ok(())
    }

    fn save_article(&self, article: &Article) -> Result<()> {
        if let BuildOut::File { root } = &self {
            let article_directory_path = &root.join(format!("article/{}", article.id));
            fs::create_dir_all(article_directory_path)?;

            fs::write(
                article_directory_path.join("parsed.json"),
                serde_json::to_string(article)?,
            )?;

            let spoken_texts = article
                .sentences
                .iter()
                .map(render_spoken_text)
                .collect::<Vec<_>>();
            fs::write(
                article_directory_path.join("spoken.json"),
                serde_json::to_string(&spoken_texts)?,
            )?;

            let masked_texts = article
                .sentences
                .iter()
                .map(render_masked_text)
                .collect::<Vec<_>>();
            fs::write(
                article_directory_path.join("masked.json"),
                serde_json::to_string(&masked_texts)?,
            )?;
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    let args = get_args()?;

    let content_path = PathBuf::from(&args.content_path);
    ensure!(
        content_path.exists(),
        "File not found: {}",
        content_path.display()
    );

    let out = if let Some(output_path) = &args.output_path {
        BuildOut::init_file(output_path)
            .with_context(|| format!("Failed to output directory: {}", &output_path))?
    } else {
        BuildOut::Null
    };

    println!("Processing content tables...");

    let content_index = if content_path.is_dir() {
        load_content_dir(&content_path)?
    } else {
        load_content_pack(&content_path)?
    };

    println!("Finished.");

    println!("Processing articles...");

    let articles = assemble_articles(&content_index)?;

    out.save_article_list(&articles)?;

    let pb = create_progress_bar(articles.len() as u64);
    for article in articles.iter().progress_with(pb) {
        out.save_article(article)
            .with_context(|| format!("Failed to save article: {}", &article.id))?;
    }

    println!("Finished.");

    Ok(())
}

// ストアの名前のまま Article.csv / Sentence.csv を探す
fn load_content_dir(content_path: &Path) -> Result<ContentIndex> {
    let article_bytes =
        fs::read(content_path.join("Article.csv")).context("Failed to read Article.csv")?;
    let sentence_bytes =
        fs::read(content_path.join("Sentence.csv")).context("Failed to read Sentence.csv")?;

    parse_content_csv(&decode_text(&article_bytes), &decode_text(&sentence_bytes))
}

fn load_content_pack(content_path: &Path) -> Result<ContentIndex> {
    ensure!(
        content_path
            .extension()
            .map(|extension| extension.eq_ignore_ascii_case("zip"))
            .unwrap_or(false),
        "Not zip file"
    );

    let pack_file = File::open(content_path)
        .with_context(|| format!("Failed to open {}", content_path.display()))?;
    let mut pack_reader = ZipReader::new(pack_file)?;

    // zip を作るツールによってパスの形が揺れるので，
    // ディレクトリ部分を除いた名前を大文字・小文字を無視して一致させる
    let mut article_bytes = None;
    let mut sentence_bytes = None;
    for i in 0..pack_reader.len() {
        let mut entry = pack_reader.get_by_index(i)?;
        let name = entry.name().to_lowercase();
        let base_name = name.rsplit('/').next().unwrap_or(&name);

        match base_name {
            "article.csv" => {
                ensure!(article_bytes.is_none(), "Article.csv exists more than 1");
                article_bytes = Some(entry.as_bytes()?);
            }
            "sentence.csv" => {
                ensure!(sentence_bytes.is_none(), "Sentence.csv exists more than 1");
                sentence_bytes = Some(entry.as_bytes()?);
            }
            _ => {}
        }
    }

    let article_bytes = article_bytes.context("Article.csv is not found")?;
    let sentence_bytes = sentence_bytes.context("Sentence.csv is not found")?;

    parse_content_csv(&decode_text(&article_bytes), &decode_text(&sentence_bytes))
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
