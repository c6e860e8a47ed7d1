//! Storage root manager: the single entry point the outer shell talks to.
//!
//! Every analytics call re-reads the corpus from disk; nothing is cached.
//! A read/write lock keeps imports and resets from interleaving with
//! reads, so a reader never sees a half-written note.

use crate::corpus::FsCorpus;
use crate::snapshot::{SnapshotListing, SnapshotStore};
use notegraph_core::prelude::*;
use notegraph_graph::{AnalysisReport, NoteGraph};
use notegraph_parser::Parser;
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::instrument;
use unicode_normalization::UnicodeNormalization;
use walkdir::WalkDir;

/// Notes and snapshots under one storage root
pub struct NoteVault {
    config: VaultConfig,
    parser: Parser,
    lock: RwLock<()>,
}

impl NoteVault {
    /// Create a vault manager. The root does not need to exist yet.
    pub fn new(config: VaultConfig) -> Self {
        let parser = Parser::new(config.key);
        Self {
            config,
            parser,
            lock: RwLock::new(()),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Storage root
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Snapshot store for this root
    pub fn snapshot_store(&self) -> SnapshotStore {
        SnapshotStore::new(self.config.snapshot_path())
    }

    /// Parse every note under the root
    #[instrument(skip(self), fields(root = %self.config.root.display()), name = "vault_load_notes")]
    pub fn load_notes(&self) -> NoteMap {
        let _guard = self.lock.read();
        self.load_notes_unlocked()
    }

    fn load_notes_unlocked(&self) -> NoteMap {
        self.parser
            .parse_corpus(&FsCorpus::from_config(&self.config))
    }

    /// Parse the corpus and build its graph
    pub fn load_graph(&self) -> (NoteMap, NoteGraph) {
        let notes = self.load_notes();
        let graph = NoteGraph::build(&notes);
        (notes, graph)
    }

    /// Full analysis report using the configured hub limit
    pub fn analyze(&self) -> AnalysisReport {
        let (notes, graph) = self.load_graph();
        AnalysisReport::analyze(&notes, &graph, self.config.hub_limit)
    }

    /// Snapshot the current graph statistics, returning the file name
    #[instrument(skip(self), name = "vault_save_snapshot")]
    pub fn save_snapshot(&self) -> Result<String> {
        let _guard = self.lock.write();
        let graph = NoteGraph::build(&self.load_notes_unlocked());
        self.snapshot_store().save(&graph)
    }

    /// Snapshot history, newest first, with the count of skipped files
    pub fn snapshots(&self) -> Result<SnapshotListing> {
        let _guard = self.lock.read();
        self.snapshot_store().scan()
    }

    /// Store a note under the root.
    ///
    /// `name` may contain `/` or `\` separated folders; each component is
    /// sanitized. Non-note extensions, absolute paths and `..` components
    /// are rejected. Returns the stored path relative to the root.
    #[instrument(skip(self, bytes), name = "vault_import_note")]
    pub fn import_note(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let relative = sanitize_relative_path(name)?;
        if !self.config.is_note(&relative) {
            return Err(Error::invalid_path(format!("not a note file: {}", name)));
        }

        let _guard = self.lock.write();
        let target = self.config.root.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(Error::io)?;
        }
        fs::write(&target, bytes).map_err(Error::io)?;

        log::debug!("Imported {} as {}", name, relative.display());
        Ok(relative)
    }

    /// Delete everything under the root, snapshots included.
    ///
    /// Returns the number of files removed. A missing root removes nothing.
    #[instrument(skip(self), name = "vault_reset")]
    pub fn reset(&self) -> Result<usize> {
        let _guard = self.lock.write();
        if !self.config.root.is_dir() {
            return Ok(0);
        }

        let mut removed = 0;
        for entry in WalkDir::new(&self.config.root).min_depth(1).contents_first(true) {
            let entry = entry.map_err(|e| Error::other(e.to_string()))?;
            if entry.file_type().is_dir() {
                fs::remove_dir(entry.path()).map_err(Error::io)?;
            } else {
                fs::remove_file(entry.path()).map_err(Error::io)?;
                removed += 1;
            }
        }

        log::info!(
            "Reset {}: removed {} files",
            self.config.root.display(),
            removed
        );
        Ok(removed)
    }
}

/// Turn an uploaded name into a safe relative path.
pub fn sanitize_relative_path(name: &str) -> Result<PathBuf> {
    let normalized = name.replace('\\', "/");
    if normalized.starts_with('/') {
        return Err(Error::path_traversal(name));
    }

    let mut path = PathBuf::new();
    for part in normalized.split('/') {
        match part {
            "" | "." => continue,
            ".." => return Err(Error::path_traversal(name)),
            _ => {
                let clean = secure_component(part);
                if clean.is_empty() {
                    return Err(Error::invalid_path(format!(
                        "path component has no usable characters: {:?}",
                        part
                    )));
                }
                path.push(clean);
            }
        }
    }

    if path.as_os_str().is_empty() {
        return Err(Error::invalid_path("empty file name"));
    }
    Ok(path)
}

/// Reduce one path component to a portable file name.
///
/// Compatibility-decomposes to ASCII (`é` becomes `e`), joins whitespace
/// runs with a single `_`, then keeps ASCII alphanumerics, `.`, `-` and `_`.
fn secure_component(part: &str) -> String {
    let ascii: String = part.nfkd().filter(char::is_ascii).collect();
    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    kept.trim_matches(['.', '_']).to_string()
}
