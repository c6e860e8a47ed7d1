//! Combined analysis report for a parsed corpus.

use crate::analytics::{
    BrokenLink, GraphStats, Hub, average_outgoing_links, find_broken_links, find_hubs,
    find_orphans, graph_stats,
};
use crate::graph::NoteGraph;
use notegraph_core::NoteMap;
use serde::{Deserialize, Serialize};

/// Every dashboard figure for one corpus, computed in a single pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of parsed notes
    pub total_notes: usize,
    /// Notes with no links in or out
    pub orphans: Vec<String>,
    /// References to unknown notes
    pub broken_links: Vec<BrokenLink>,
    /// Most referenced notes
    pub hubs: Vec<Hub>,
    /// Mean references per note
    pub average_outgoing_links: f64,
    /// Node, edge and weak component counts
    pub stats: GraphStats,
}

impl AnalysisReport {
    /// Run every analysis over `notes` and the graph built from them
    pub fn analyze(notes: &NoteMap, graph: &NoteGraph, hub_limit: usize) -> Self {
        Self {
            total_notes: notes.len(),
            orphans: find_orphans(graph),
            broken_links: find_broken_links(notes),
            hubs: find_hubs(graph, hub_limit),
            average_outgoing_links: average_outgoing_links(notes),
            stats: graph_stats(graph),
        }
    }

    /// Whether the corpus had no notes at all
    pub fn is_empty(&self) -> bool {
        self.total_notes == 0
    }
}
