use std::io::{self, Read};

use anyhow::{Context, Result};
use zip::{read::ZipFile, ZipArchive};

pub struct ZipReader<R> {
    archive: ZipArchive<R>,
}

impl<R: Read + io::Seek> ZipReader<R> {
    pub fn new(reader: R) -> Result<ZipReader<R>> {
        let archive = ZipArchive::new(reader).context("Failed to open")?;
        Ok(ZipReader { archive })
    }

    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn get_by_index(&mut self, index: usize) -> Result<ZipEntry> {
        self.archive
            .by_index(index)
            .with_context(|| format!("Failed to open at {}", index))
            .map(|file| ZipEntry { file })
    }
}

pub struct ZipEntry<'a> {
    file: ZipFile<'a>,
}

impl ZipEntry<'_> {
    pub fn name(&self) -> &str {
        self.file.name()
    }

    pub fn as_bytes(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::<u8>::new();
        self.file
            .read_to_end(&mut data)
            .with_context(|| format!("Failed to read {}", self.name()))?;

        Ok(data)
    }
}
