//! Configuration for a note storage root.
//!
//! Follows a builder pattern with validation. Configuration can also be
//! loaded from a YAML file; missing fields take their defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Default number of hubs reported
pub const DEFAULT_HUB_LIMIT: usize = 5;

/// Default snapshot sub-directory name
pub const DEFAULT_SNAPSHOT_DIR: &str = "snapshots";

/// How a note's identity key is derived from its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKey {
    /// Bare file name. Same-named notes in different folders collide and
    /// the last one parsed wins.
    #[default]
    FileName,
    /// `/`-separated path relative to the storage root
    RelativePath,
}

impl std::str::FromStr for NoteKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "name" | "file_name" | "filename" => Ok(Self::FileName),
            "path" | "relative_path" => Ok(Self::RelativePath),
            other => Err(Error::config_error(format!(
                "Unknown note key mode '{}'. Valid options: name, path",
                other
            ))),
        }
    }
}

/// Configuration for a single storage root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Directory holding the notes (and the snapshot sub-directory)
    pub root: PathBuf,
    /// File extensions treated as notes, with leading dot
    pub note_extensions: BTreeSet<String>,
    /// Directory names skipped while walking the root
    pub excluded_paths: BTreeSet<String>,
    /// Snapshot sub-directory name under the root
    pub snapshot_dir: String,
    /// Number of hubs reported by analysis
    pub hub_limit: usize,
    /// Identity key mode
    pub key: NoteKey,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("uploads"),
            note_extensions: [".md"].iter().map(|s| s.to_string()).collect(),
            excluded_paths: [".git", ".obsidian", ".DS_Store"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            snapshot_dir: DEFAULT_SNAPSHOT_DIR.to_string(),
            hub_limit: DEFAULT_HUB_LIMIT,
            key: NoteKey::default(),
        }
    }
}

impl VaultConfig {
    /// Create a new config with builder
    pub fn builder(root: impl Into<PathBuf>) -> VaultConfigBuilder {
        VaultConfigBuilder::new(root)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.note_extensions.is_empty() {
            return Err(Error::config_error("At least one note extension is required"));
        }

        if let Some(ext) = self.note_extensions.iter().find(|e| !e.starts_with('.')) {
            return Err(Error::config_error(format!(
                "Note extension must start with a dot: {}",
                ext
            )));
        }

        if self.hub_limit == 0 {
            return Err(Error::config_error("Hub limit must be at least 1"));
        }

        if self.snapshot_dir.is_empty()
            || self.snapshot_dir.contains(['/', '\\'])
            || self.snapshot_dir == ".."
        {
            return Err(Error::config_error(format!(
                "Snapshot directory must be a single path component: {:?}",
                self.snapshot_dir
            )));
        }

        Ok(())
    }

    /// Whether a path has one of the configured note extensions
    pub fn is_note(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.note_extensions.contains(&format!(".{}", ext)))
    }

    /// Whether a directory or file name is excluded from the walk
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_paths.contains(name)
    }

    /// Replace the storage root, expanding `~` and environment variables
    pub fn set_root(&mut self, root: impl AsRef<Path>) {
        self.root = expand_root(root.as_ref());
    }

    /// Full path of the snapshot sub-directory
    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(&self.snapshot_dir)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config_error(format!(
                "Failed to load config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config: VaultConfig = serde_yaml::from_str(&content)
            .map_err(|e| Error::config_error(format!("Invalid configuration: {}", e)))?;
        config.root = expand_root(&config.root);
        config.validate()?;
        Ok(config)
    }
}

/// Expand `~` and environment variables in a root path
fn expand_root(root: &Path) -> PathBuf {
    let raw = root.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(e) => {
            log::warn!("Could not expand root path {}: {}", raw, e);
            root.to_path_buf()
        }
    }
}

/// Builder for VaultConfig
pub struct VaultConfigBuilder {
    config: VaultConfig,
}

impl VaultConfigBuilder {
    /// Create a new builder
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            config: VaultConfig {
                root: root.into(),
                ..VaultConfig::default()
            },
        }
    }

    /// Replace the note extensions (leading dot optional)
    pub fn note_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.note_extensions = extensions
            .into_iter()
            .map(|e| {
                let e = e.as_ref();
                if e.starts_with('.') {
                    e.to_string()
                } else {
                    format!(".{}", e)
                }
            })
            .collect();
        self
    }

    /// Add an excluded directory name
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.config.excluded_paths.insert(name.into());
        self
    }

    /// Set the snapshot sub-directory name
    pub fn snapshot_dir(mut self, name: impl Into<String>) -> Self {
        self.config.snapshot_dir = name.into();
        self
    }

    /// Set the hub limit
    pub fn hub_limit(mut self, limit: usize) -> Self {
        self.config.hub_limit = limit;
        self
    }

    /// Set the key mode
    pub fn key(mut self, key: NoteKey) -> Self {
        self.config.key = key;
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<VaultConfig> {
        let mut config = self.config;
        config.root = expand_root(&config.root);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builder_defaults() {
        let config = VaultConfig::builder("/notes").build().unwrap();
        assert_eq!(config.root, PathBuf::from("/notes"));
        assert_eq!(config.hub_limit, DEFAULT_HUB_LIMIT);
        assert_eq!(config.key, NoteKey::FileName);
        assert_eq!(config.snapshot_path(), PathBuf::from("/notes/snapshots"));
    }

    #[test]
    fn test_builder_normalizes_extensions() {
        let config = VaultConfig::builder("/notes")
            .note_extensions(["md", ".markdown"])
            .build()
            .unwrap();
        assert!(config.is_note(Path::new("a.md")));
        assert!(config.is_note(Path::new("dir/b.markdown")));
        assert!(!config.is_note(Path::new("c.txt")));
        assert!(!config.is_note(Path::new("README")));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(VaultConfig::builder("/notes").hub_limit(0).build().is_err());
        assert!(
            VaultConfig::builder("/notes")
                .snapshot_dir("a/b")
                .build()
                .is_err()
        );
        assert!(
            VaultConfig::builder("/notes")
                .note_extensions(Vec::<String>::new())
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_tilde_expansion() {
        if std::env::var_os("HOME").is_none() {
            return;
        }
        let config = VaultConfig::builder("~/notes").build().unwrap();
        assert!(!config.root.to_string_lossy().starts_with('~'));
        assert!(config.root.ends_with("notes"));
    }

    #[test]
    fn test_set_root_expands_like_load() {
        if std::env::var_os("HOME").is_none() {
            return;
        }
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notegraph.yaml");
        std::fs::write(&path, "root: ~/notes\n").unwrap();
        let loaded = VaultConfig::load(&path).unwrap();

        let mut overridden = VaultConfig::default();
        overridden.set_root("~/notes");
        assert_eq!(overridden.root, loaded.root);
        assert!(!overridden.root.to_string_lossy().starts_with('~'));

        overridden.set_root("/plain/root");
        assert_eq!(overridden.root, PathBuf::from("/plain/root"));
    }

    #[test]
    fn test_note_key_from_str() {
        assert_eq!("name".parse::<NoteKey>().unwrap(), NoteKey::FileName);
        assert_eq!("path".parse::<NoteKey>().unwrap(), NoteKey::RelativePath);
        assert!("inode".parse::<NoteKey>().is_err());
    }

    #[test]
    fn test_load_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notegraph.yaml");
        std::fs::write(&path, "root: /data/notes\nhub_limit: 3\nkey: relative_path\n").unwrap();

        let config = VaultConfig::load(&path).unwrap();
        assert_eq!(config.root, PathBuf::from("/data/notes"));
        assert_eq!(config.hub_limit, 3);
        assert_eq!(config.key, NoteKey::RelativePath);
        assert_eq!(config.snapshot_dir, DEFAULT_SNAPSHOT_DIR);
    }

    #[test]
    fn test_load_missing_file() {
        let result = VaultConfig::load(Path::new("/nonexistent/notegraph.yaml"));
        assert!(matches!(result, Err(Error::ConfigError { .. })));
    }
}
