//! Note parsers and the corpus-level [`Parser`].

pub mod headings;
pub mod references;

use notegraph_core::prelude::*;
use std::path::{Component, Path};

pub use headings::parse_headings;
pub use references::{normalize_target, parse_references};

/// Parses raw note bytes into [`Note`] records keyed by identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    key: NoteKey,
}

impl Parser {
    /// Create a parser with the given key mode
    pub fn new(key: NoteKey) -> Self {
        Self { key }
    }

    /// Key mode in use
    pub fn key_mode(&self) -> NoteKey {
        self.key
    }

    /// Derive a note's identity from its relative path.
    ///
    /// Returns `None` for paths without a usable file name.
    pub fn note_key(&self, path: &Path) -> Option<String> {
        match self.key {
            NoteKey::FileName => path.file_name().map(|n| n.to_string_lossy().into_owned()),
            NoteKey::RelativePath => {
                let parts: Vec<_> = path
                    .components()
                    .filter_map(|c| match c {
                        Component::Normal(part) => Some(part.to_string_lossy()),
                        _ => None,
                    })
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join("/"))
                }
            }
        }
    }

    /// Parse a single note from its relative path and raw bytes.
    pub fn parse_note(&self, path: &Path, bytes: &[u8]) -> Option<Note> {
        let name = self.note_key(path)?;
        let content = decode(path, bytes);
        Some(Note {
            links: parse_references(&content),
            headings: parse_headings(&content),
            name,
            path: path.to_path_buf(),
            content,
        })
    }

    /// Parse every note a corpus lists.
    ///
    /// Never fails: an unlistable corpus yields an empty map and an
    /// unreadable file is skipped, both with a warning.
    pub fn parse_corpus<S: CorpusSource + ?Sized>(&self, source: &S) -> NoteMap {
        let mut notes = NoteMap::new();

        let files = match source.list_notes() {
            Ok(files) => files,
            Err(e) => {
                log::warn!("Failed to list notes: {}", e);
                return notes;
            }
        };
        log::debug!("Parsing {} note files", files.len());

        for path in files {
            let bytes = match source.read_note(&path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::warn!("Skipping unreadable note {}: {}", path.display(), e);
                    continue;
                }
            };

            let Some(note) = self.parse_note(&path, &bytes) else {
                log::warn!("Skipping note without a file name: {}", path.display());
                continue;
            };

            if let Some(previous) = notes.get(&note.name) {
                log::warn!(
                    "Note key collision on '{}': {} replaces {}",
                    note.name,
                    note.path.display(),
                    previous.path.display()
                );
            }
            notes.insert(note.name.clone(), note);
        }

        log::debug!("Parsed {} notes", notes.len());
        notes
    }
}

/// Decode note bytes as UTF-8, falling back to lossy replacement.
fn decode(path: &Path, bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            log::warn!(
                "Note {} is not valid UTF-8 ({}), decoding lossily",
                path.display(),
                e
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}
