//! # Note Link Graph
//!
//! Directed graph over parsed notes plus the structural analytics run on
//! it.
//!
//! Provides:
//! - Graph construction from a [`NoteMap`](notegraph_core::NoteMap)
//! - Orphan and broken-link detection
//! - Hub ranking by in-degree
//! - Node, edge and weak component counts
//! - Adjacency matrix materialization
//! - Directed shortest paths (breadth-first)
//! - A combined [`AnalysisReport`] and a JSON-ready [`GraphData`] export
//!
//! ## Quick Start
//!
//! ```
//! use notegraph_core::MemoryCorpus;
//! use notegraph_graph::prelude::*;
//! use notegraph_parser::Parser;
//!
//! let corpus = MemoryCorpus::new()
//!     .with("a.md", "[x](b.md)")
//!     .with("b.md", "[y](c.md) [z](missing.md)")
//!     .with("c.md", "");
//! let notes = Parser::default().parse_corpus(&corpus);
//! let graph = NoteGraph::build(&notes);
//!
//! assert_eq!(graph_stats(&graph).connected_components, 1);
//! assert_eq!(find_broken_links(&notes)[0].target, "missing.md");
//! assert_eq!(
//!     shortest_path(&graph, "a.md", "c.md"),
//!     Some(vec!["a.md".to_string(), "b.md".to_string(), "c.md".to_string()])
//! );
//! ```
//!
//! ## Determinism
//!
//! Nodes take the key order of the note map, neighbor sets are ordered, and
//! hub ties keep node order. Repeated runs over the same corpus give the
//! same results.
//!
//! ## Performance Characteristics
//!
//! - Graph construction: O(n + m log m)
//! - Orphans, hubs: O(n) and O(n log n)
//! - Weak components: O(m α(n)) via union-find
//! - Shortest path: O(n + m)
//! - Adjacency matrix: O(n²) memory

pub mod analytics;
pub mod export;
pub mod graph;
pub mod report;

pub use analytics::{
    AdjacencyMatrix, BrokenLink, DEFAULT_TOP_HUBS, GraphStats, Hub, PathResult,
    adjacency_matrix, average_outgoing_links, find_broken_links, find_hubs, find_orphans,
    graph_stats, shortest_path, weak_component_count,
};
pub use export::{GraphData, GraphEdge, GraphNode};
pub use graph::NoteGraph;
pub use report::AnalysisReport;

pub mod prelude {
    pub use crate::analytics::*;
    pub use crate::export::GraphData;
    pub use crate::graph::NoteGraph;
    pub use crate::report::AnalysisReport;
}
