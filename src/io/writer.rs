//! Corpus writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::corpus::Review;
use crate::error::Error;

pub struct CorpusWriter {
    handle: BufWriter<File>,
}

impl CorpusWriter {
    /// Create a writer at `dst`, creating parent directories as needed.
    pub fn new(dst: &Path) -> Result<Self, Error> {
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let handle = BufWriter::new(File::create(dst)?);
        Ok(Self { handle })
    }

    pub fn write(&mut self, reviews: &[Review]) -> Result<(), Error> {
        for review in reviews {
            self.write_single(review)?;
        }
        Ok(())
    }

    pub fn write_single(&mut self, review: &Review) -> Result<(), Error> {
        let line = serde_json::to_string(review)?;
        self.handle.write_all(line.as_bytes())?;
        self.handle.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.handle.flush()?;
        Ok(())
    }
}

/// Write a whole corpus to `dst`.
pub fn write_corpus(dst: &Path, reviews: &[Review]) -> Result<(), Error> {
    let mut writer = CorpusWriter::new(dst)?;
    writer.write(reviews)?;
    writer.flush()
}
