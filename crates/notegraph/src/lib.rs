//! # NoteGraph
//!
//! Parse a folder of interlinked markdown notes, build the directed link
//! graph, and answer structural questions about it.
//!
//! The pipeline is Parser → Builder → Analytics / Snapshot Store, re-run
//! from disk on every request:
//!
//! ```no_run
//! use notegraph::prelude::*;
//!
//! let notes = parse("uploads");
//! let graph = NoteGraph::build(&notes);
//!
//! println!("orphans: {:?}", find_orphans(&graph));
//! println!("broken: {:?}", find_broken_links(&notes));
//! println!("hubs: {:?}", find_hubs(&graph, DEFAULT_TOP_HUBS));
//! println!("stats: {:?}", graph_stats(&graph));
//!
//! let store = SnapshotStore::new("uploads/snapshots");
//! store.save(&graph)?;
//! for snapshot in store.list()? {
//!     println!("{} {} pages", snapshot.date, snapshot.total_pages);
//! }
//! # Ok::<(), notegraph::Error>(())
//! ```

pub use notegraph_core::{
    CorpusSource, Error, MemoryCorpus, Note, NoteKey, NoteMap, Result, VaultConfig,
};
pub use notegraph_graph::{
    AdjacencyMatrix, AnalysisReport, BrokenLink, DEFAULT_TOP_HUBS, GraphData, GraphStats, Hub,
    NoteGraph, PathResult, adjacency_matrix, average_outgoing_links, find_broken_links,
    find_hubs, find_orphans, graph_stats, shortest_path,
};
pub use notegraph_parser::Parser;
pub use notegraph_vault::{
    FsCorpus, NoteVault, SnapshotListing, SnapshotRecord, SnapshotStore, parse,
};

pub mod prelude {
    pub use crate::*;
}
