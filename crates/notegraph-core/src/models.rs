//! Core data models for parsed notes.
//!
//! Notes are rebuilt from storage on every parse; nothing here is cached
//! or mutated after construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A single parsed note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Identity key (file name, or relative path depending on [`crate::NoteKey`])
    pub name: String,
    /// Path relative to the storage root
    pub path: PathBuf,
    /// Raw text content, lossily decoded if necessary
    pub content: String,
    /// Outbound reference targets in order of appearance (unresolved)
    pub links: Vec<String>,
    /// Heading lines including their leading hashes, in document order
    pub headings: Vec<String>,
}

impl Note {
    /// Create a note with no links or headings
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            content: content.into(),
            links: Vec::new(),
            headings: Vec::new(),
        }
    }

    /// Number of outbound references, resolved or not
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

/// Parsed notes keyed by identity.
///
/// Ordered by key so that graph node order, orphan order and hub
/// tie-breaks are deterministic for a given corpus.
pub type NoteMap = BTreeMap<String, Note>;
