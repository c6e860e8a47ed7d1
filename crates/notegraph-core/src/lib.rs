//! # NoteGraph Core
//!
//! Core data models, error types, and configuration for the note graph
//! pipeline. This crate defines the canonical types that all other crates
//! depend on.
//!
//! ## Core Modules
//!
//! - [`models`] - Parsed notes and the ordered note map
//! - [`error`] - Error type and Result alias
//! - [`config`] - Storage root configuration with a builder
//! - [`corpus`] - The `CorpusSource` capability and an in-memory fake
//!
//! ## Usage Examples
//!
//! ```
//! use notegraph_core::prelude::*;
//!
//! let mut corpus = MemoryCorpus::new();
//! corpus.insert("a.md", "# A\n\n[b](b.md)");
//!
//! let files = corpus.list_notes().unwrap();
//! assert_eq!(files.len(), 1);
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod models;

pub use config::{NoteKey, VaultConfig, VaultConfigBuilder};
pub use corpus::{CorpusSource, MemoryCorpus};
pub use error::{Error, Result};
pub use models::{Note, NoteMap};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{NoteKey, VaultConfig};
    pub use crate::corpus::{CorpusSource, MemoryCorpus};
    pub use crate::error::{Error, Result};
    pub use crate::models::{Note, NoteMap};
}
