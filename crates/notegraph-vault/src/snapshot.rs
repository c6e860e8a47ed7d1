//! Append-only history of graph statistics.
//!
//! Each snapshot is one pretty-printed JSON file named
//! `snapshot_<unix seconds>.json`:
//!
//! ```json
//! {
//!   "total_pages": 3,
//!   "total_links": 2,
//!   "connected_components": 1,
//!   "timestamp": 1700000000.25,
//!   "date": "2023-11-14 22:13:20"
//! }
//! ```
//!
//! Two saves within the same second share a file name; the later one wins.

use chrono::{DateTime, Local};
use notegraph_core::{Error, Result};
use notegraph_graph::{GraphStats, NoteGraph, graph_stats};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Format of the human-readable `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One persisted snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub total_pages: usize,
    pub total_links: usize,
    pub connected_components: usize,
    /// Unix time in fractional seconds
    pub timestamp: f64,
    /// Local time formatted as `YYYY-MM-DD HH:MM:SS`
    pub date: String,
}

impl SnapshotRecord {
    /// Stamp graph statistics with an instant
    pub fn new(stats: GraphStats, at: DateTime<Local>) -> Self {
        Self {
            total_pages: stats.total_pages,
            total_links: stats.total_links,
            connected_components: stats.connected_components,
            timestamp: at.timestamp() as f64 + f64::from(at.timestamp_subsec_micros()) / 1e6,
            date: at.format(DATE_FORMAT).to_string(),
        }
    }

    /// Statistics part of the record
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_pages: self.total_pages,
            total_links: self.total_links,
            connected_components: self.connected_components,
        }
    }

    /// File name derived from the integer timestamp
    pub fn file_name(&self) -> String {
        format!("snapshot_{}.json", self.timestamp.floor() as i64)
    }
}

/// Result of reading the snapshot directory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotListing {
    /// Valid records, newest first
    pub snapshots: Vec<SnapshotRecord>,
    /// Files that could not be read or parsed
    pub skipped: usize,
}

/// Snapshot files under one directory
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Store writing directly into `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the snapshot files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save the graph's current statistics, stamped now
    pub fn save(&self, graph: &NoteGraph) -> Result<String> {
        self.save_at(graph, Local::now())
    }

    /// Save the graph's statistics stamped with `at`, returning the file name.
    ///
    /// The record is written to a temporary file and renamed into place, so
    /// a failed save never leaves a partial snapshot behind.
    #[instrument(skip(self, graph), fields(dir = %self.dir.display()), name = "snapshot_save")]
    pub fn save_at(&self, graph: &NoteGraph, at: DateTime<Local>) -> Result<String> {
        let record = SnapshotRecord::new(graph_stats(graph), at);
        let file_name = record.file_name();

        fs::create_dir_all(&self.dir).map_err(Error::io)?;

        let json = serde_json::to_string_pretty(&record)?;
        let temp_path = self.dir.join(format!(".{}.tmp", file_name));
        write_then_rename(&temp_path, &self.dir.join(&file_name), json.as_bytes())?;

        log::info!(
            "Saved snapshot {} ({} pages, {} links, {} components)",
            file_name,
            record.total_pages,
            record.total_links,
            record.connected_components
        );
        Ok(file_name)
    }

    /// All valid snapshots, newest first.
    ///
    /// Malformed files are skipped with a warning; see [`SnapshotStore::scan`]
    /// for the skipped count.
    pub fn list(&self) -> Result<Vec<SnapshotRecord>> {
        Ok(self.scan()?.snapshots)
    }

    /// Read every `*.json` record in the directory.
    ///
    /// A missing directory gives an empty listing. Failing to read the
    /// directory itself is an error.
    #[instrument(skip(self), fields(dir = %self.dir.display()), name = "snapshot_scan")]
    pub fn scan(&self) -> Result<SnapshotListing> {
        let mut listing = SnapshotListing::default();
        if !self.dir.is_dir() {
            return Ok(listing);
        }

        for entry in fs::read_dir(&self.dir).map_err(Error::io)? {
            let path = entry.map_err(Error::io)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            match read_record(&path) {
                Ok(record) => listing.snapshots.push(record),
                Err(e) => {
                    log::warn!("Skipping malformed snapshot {}: {}", path.display(), e);
                    listing.skipped += 1;
                }
            }
        }

        listing
            .snapshots
            .sort_by(|a, b| b.timestamp.total_cmp(&a.timestamp));
        Ok(listing)
    }
}

/// Write `contents` to `temp` and move it onto `dest`.
///
/// The temp file is removed if either step fails.
fn write_then_rename(temp: &Path, dest: &Path, contents: &[u8]) -> Result<()> {
    let outcome = fs::write(temp, contents).and_then(|()| fs::rename(temp, dest));
    if let Err(e) = outcome {
        if temp.exists()
            && let Err(cleanup) = fs::remove_file(temp)
        {
            log::warn!("Could not remove {}: {}", temp.display(), cleanup);
        }
        return Err(Error::io(e));
    }
    Ok(())
}

fn read_record(path: &Path) -> Result<SnapshotRecord> {
    let content = fs::read_to_string(path).map_err(Error::io)?;
    Ok(serde_json::from_str(&content)?)
}
