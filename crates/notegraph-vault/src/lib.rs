//! # Note Vault
//!
//! Filesystem side of the note graph: reading notes from a storage root,
//! persisting snapshot history, and managing the root's contents.
//!
//! - [`corpus::FsCorpus`] - recursive, extension-filtered note listing
//! - [`snapshot::SnapshotStore`] - timestamped graph statistics on disk
//! - [`manager::NoteVault`] - locked import, reset, analysis and snapshots
//!
//! ## Quick Start
//!
//! ```no_run
//! use notegraph_vault::prelude::*;
//!
//! let config = VaultConfig::builder("~/notes").build()?;
//! let vault = NoteVault::new(config);
//!
//! let report = vault.analyze();
//! println!("{} notes, {} broken links", report.total_notes, report.broken_links.len());
//!
//! let file = vault.save_snapshot()?;
//! println!("saved {}", file);
//! # Ok::<(), notegraph_core::Error>(())
//! ```

pub mod corpus;
pub mod manager;
pub mod snapshot;

use notegraph_core::NoteMap;
use notegraph_parser::Parser;
use std::path::Path;

pub use corpus::FsCorpus;
pub use manager::{NoteVault, sanitize_relative_path};
pub use snapshot::{DATE_FORMAT, SnapshotListing, SnapshotRecord, SnapshotStore};

/// Parse every `.md` note under `root`, keyed by file name.
///
/// A missing root, or one that is not a directory, yields an empty map.
pub fn parse(root: impl AsRef<Path>) -> NoteMap {
    Parser::default().parse_corpus(&FsCorpus::new(root.as_ref()))
}

pub mod prelude {
    pub use crate::corpus::FsCorpus;
    pub use crate::manager::NoteVault;
    pub use crate::parse;
    pub use crate::snapshot::{SnapshotListing, SnapshotRecord, SnapshotStore};
    pub use notegraph_core::prelude::*;
}
