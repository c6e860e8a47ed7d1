//! # NoteGraph Parser
//!
//! Extracts outbound references and heading lines from markdown notes.
//!
//! - References: every `target` in `[display text](target)`, in order of
//!   appearance, with a single leading `./` removed
//! - Headings: every line whose trimmed content starts with `#`, verbatim
//! - Decoding: UTF-8, falling back to lossy replacement for bad bytes
//!
//! ## Quick Start
//!
//! ```
//! use notegraph_core::MemoryCorpus;
//! use notegraph_parser::Parser;
//!
//! let corpus = MemoryCorpus::new()
//!     .with("a.md", "# A\n[to b](./b.md)")
//!     .with("b.md", "# B");
//!
//! let notes = Parser::default().parse_corpus(&corpus);
//! assert_eq!(notes["a.md"].links, vec!["b.md"]);
//! assert_eq!(notes["b.md"].headings, vec!["# B"]);
//! ```
//!
//! ### Individual Parsers
//!
//! ```
//! use notegraph_parser::{parse_headings, parse_references};
//!
//! assert_eq!(parse_references("[x](one.md) [y](two.md)"), vec!["one.md", "two.md"]);
//! assert_eq!(parse_headings("# Title\nbody"), vec!["# Title"]);
//! ```

pub mod parsers;

pub use parsers::{Parser, normalize_target, parse_headings, parse_references};

/// Convenient prelude for common imports.
pub mod prelude {
    pub use crate::{Parser, parse_headings, parse_references};
    pub use notegraph_core::{CorpusSource, MemoryCorpus, Note, NoteKey, NoteMap};
}
