//! Corpus reader.
//!
//! A corpus file is newline-delimited JSON, one [Review] per line.
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use crate::corpus::Review;
use crate::error::Error;

#[derive(Debug)]
pub struct CorpusReader<T>
where
    T: Read,
{
    lines: Lines<BufReader<T>>,
}

impl CorpusReader<File> {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        let br = BufReader::new(handle);
        Ok(Self { lines: br.lines() })
    }
}

impl<T> CorpusReader<T>
where
    T: Read,
{
    pub fn new(source: T) -> Self {
        Self {
            lines: BufReader::new(source).lines(),
        }
    }
}

impl<T> Iterator for CorpusReader<T>
where
    T: Read,
{
    type Item = Result<Review, Error>;

    /// iterates over review entries, skipping blank lines
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => return Some(Err(Error::Io(e))),
                None => return None,
            };
            if line.trim().is_empty() {
                continue;
            }

            return Some(serde_json::from_str::<Review>(&line).map_err(Error::Serde));
        }
    }
}

/// Read a whole corpus into memory.
pub fn read_corpus(src: &Path) -> Result<Vec<Review>, Error> {
    CorpusReader::from_path(src)?.collect()
}
