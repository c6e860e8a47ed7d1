//! Corpus sources: where note bytes come from.
//!
//! The parser never touches the filesystem directly. It asks a
//! [`CorpusSource`] for the list of note files and for each file's bytes,
//! so tests can hand it an in-memory corpus.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Capability to enumerate and read raw note files.
pub trait CorpusSource {
    /// List note files as paths relative to the corpus root.
    ///
    /// A missing root yields an empty list, not an error.
    fn list_notes(&self) -> Result<Vec<PathBuf>>;

    /// Read the raw bytes of one note, by the relative path returned from
    /// [`CorpusSource::list_notes`].
    fn read_note(&self, path: &Path) -> Result<Vec<u8>>;
}

/// In-memory corpus, listed in path order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryCorpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a note
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> &mut Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Builder-style variant of [`MemoryCorpus::insert`]
    pub fn with(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    /// Number of files held
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the corpus holds no files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl CorpusSource for MemoryCorpus {
    fn list_notes(&self) -> Result<Vec<PathBuf>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn read_note(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::file_not_found(path))
    }
}

impl<T: CorpusSource + ?Sized> CorpusSource for &T {
    fn list_notes(&self) -> Result<Vec<PathBuf>> {
        (**self).list_notes()
    }

    fn read_note(&self, path: &Path) -> Result<Vec<u8>> {
        (**self).read_note(path)
    }
}
