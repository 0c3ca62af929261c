//! Bounded scratch storage for per-attribute feature chunks.
//!
//! The engine writes each attribute's columns to disk as soon as they are
//! computed, so only one chunk is held in memory at a time. Chunks are read
//! back in write order once every attribute has been processed. The backing
//! directory is removed when the store is finished or dropped.

use crate::error::Error;
use crate::model::feature::FeatureColumn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// Feature columns derived from one attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureChunk {
    pub attribute: String,
    pub columns: Vec<FeatureColumn>,
}

/// Directory of serialized chunks owned by one engine invocation.
#[derive(Debug)]
pub struct ScratchStore {
    dir: TempDir,
    chunks: Vec<(String, PathBuf)>,
}

impl ScratchStore {
    /// Creates an empty store under `parent`, or the system temp directory.
    pub fn create(parent: Option<&Path>) -> Result<Self, Error> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("feature-scratch-");
        let dir = match parent {
            Some(parent) => builder.tempdir_in(parent)?,
            None => builder.tempdir()?,
        };
        debug!(path = %dir.path().display(), "created feature scratch store");
        Ok(Self {
            dir,
            chunks: Vec::new(),
        })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Serializes `chunk` to its own file.
    pub fn write(&mut self, chunk: &FeatureChunk) -> Result<(), Error> {
        let path = self
            .dir
            .path()
            .join(format!("chunk-{:05}.json", self.chunks.len()));

        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, chunk)?;
        writer.flush()?;

        debug!(
            attribute = %chunk.attribute,
            columns = chunk.columns.len(),
            "staged feature chunk"
        );
        self.chunks.push((chunk.attribute.clone(), path));
        Ok(())
    }

    /// Reloads every chunk in write order and removes the directory.
    ///
    /// On error the directory is still removed when `self` is dropped.
    pub fn finish(self) -> Result<Vec<FeatureColumn>, Error> {
        let mut columns = Vec::new();

        for (attribute, path) in &self.chunks {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Err(Error::ScratchMissing(attribute.clone()));
                }
                Err(e) => return Err(e.into()),
            };
            let chunk: FeatureChunk = serde_json::from_reader(BufReader::new(file))?;
            columns.extend(chunk.columns);
        }

        debug!(
            chunks = self.chunks.len(),
            columns = columns.len(),
            "reloaded feature chunks"
        );
        self.dir.close()?;
        Ok(columns)
    }
}
