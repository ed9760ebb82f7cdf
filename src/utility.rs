pub mod text;
pub mod zip;
