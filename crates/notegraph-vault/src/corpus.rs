//! Filesystem-backed corpus source

use notegraph_core::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Reads notes from a directory tree.
///
/// Walks the root recursively in file-name order, skipping excluded
/// directory names and keeping only files with a note extension. Symbolic
/// links are followed; a link loop is reported and skipped.
#[derive(Debug, Clone)]
pub struct FsCorpus {
    config: VaultConfig,
}

impl FsCorpus {
    /// Corpus over `root` with default extensions and exclusions
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            config: VaultConfig {
                root: root.into(),
                ..VaultConfig::default()
            },
        }
    }

    /// Corpus using a full configuration
    pub fn from_config(config: &VaultConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Corpus root
    pub fn root(&self) -> &Path {
        &self.config.root
    }
}

impl CorpusSource for FsCorpus {
    fn list_notes(&self) -> Result<Vec<PathBuf>> {
        let root = &self.config.root;
        if !root.is_dir() {
            log::debug!("Corpus root {} is not a directory", root.display());
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || entry
                        .file_name()
                        .to_str()
                        .is_none_or(|name| !self.config.is_excluded(name))
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };

            if entry.file_type().is_file()
                && self.config.is_note(entry.path())
                && let Ok(relative) = entry.path().strip_prefix(root)
            {
                files.push(relative.to_path_buf());
            }
        }

        Ok(files)
    }

    fn read_note(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(self.config.root.join(path)).map_err(Error::io)
    }
}
