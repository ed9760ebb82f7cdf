pub mod article;
pub mod cloze_txt;
pub mod content_csv;
pub mod utility;
