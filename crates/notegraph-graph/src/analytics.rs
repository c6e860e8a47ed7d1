//! Read-only structural queries over a note graph.
//!
//! Broken-link detection and average outgoing links work on the parsed
//! notes rather than the graph, since unresolved references never become
//! edges.

use crate::graph::NoteGraph;
use notegraph_core::NoteMap;
use petgraph::unionfind::UnionFind;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Default number of hubs returned by [`find_hubs`]
pub const DEFAULT_TOP_HUBS: usize = 5;

/// A reference whose target is not a known note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokenLink {
    /// Note containing the reference
    pub source: String,
    /// Target as written
    pub target: String,
}

/// A note ranked by incoming links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hub {
    pub note: String,
    pub in_degree: usize,
}

/// Aggregate graph statistics.
///
/// Field names match the persisted snapshot format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_pages: usize,
    pub total_links: usize,
    pub connected_components: usize,
}

/// Dense 0/1 adjacency matrix with the node order used for rows and columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    pub nodes: Vec<String>,
    pub matrix: Vec<Vec<u8>>,
}

impl AdjacencyMatrix {
    /// Matrix cell by identities, `None` if either is absent
    pub fn get(&self, source: &str, target: &str) -> Option<u8> {
        let row = self.nodes.iter().position(|n| n == source)?;
        let col = self.nodes.iter().position(|n| n == target)?;
        Some(self.matrix[row][col])
    }
}

/// A found shortest path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Vec<String>,
    pub length: usize,
}

impl PathResult {
    /// Wrap a node sequence; length is the number of edges
    pub fn new(path: Vec<String>) -> Self {
        let length = path.len().saturating_sub(1);
        Self { path, length }
    }
}

/// Nodes with neither incoming nor outgoing edges, in node order
pub fn find_orphans(graph: &NoteGraph) -> Vec<String> {
    (0..graph.node_count())
        .filter(|&idx| graph.in_degree_of(idx) == 0 && graph.out_degree_of(idx) == 0)
        .filter_map(|idx| graph.name(idx).map(str::to_string))
        .collect()
}

/// Every reference whose target is not a note identity.
///
/// Duplicates are kept: the same missing target referenced twice from one
/// note is reported twice.
pub fn find_broken_links(notes: &NoteMap) -> Vec<BrokenLink> {
    notes
        .iter()
        .flat_map(|(source, note)| {
            note.links
                .iter()
                .filter(|target| !notes.contains_key(target.as_str()))
                .map(move |target| BrokenLink {
                    source: source.clone(),
                    target: target.clone(),
                })
        })
        .collect()
}

/// Top `top_k` nodes by in-degree, descending.
///
/// Ties keep node order (the sort is stable), so results are repeatable
/// for a given graph.
pub fn find_hubs(graph: &NoteGraph, top_k: usize) -> Vec<Hub> {
    let mut hubs: Vec<Hub> = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(idx, name)| Hub {
            note: name.clone(),
            in_degree: graph.in_degree_of(idx),
        })
        .collect();

    hubs.sort_by(|a, b| b.in_degree.cmp(&a.in_degree));
    hubs.truncate(top_k);
    hubs
}

/// Mean number of references per note; 0.0 with no notes
pub fn average_outgoing_links(notes: &NoteMap) -> f64 {
    if notes.is_empty() {
        return 0.0;
    }
    let total: usize = notes.values().map(|n| n.links.len()).sum();
    total as f64 / notes.len() as f64
}

/// Number of weakly connected components (edge direction ignored)
pub fn weak_component_count(graph: &NoteGraph) -> usize {
    let n = graph.node_count();
    if n == 0 {
        return 0;
    }

    let mut components = UnionFind::<usize>::new(n);
    for idx in 0..n {
        for target in graph.successors_of(idx) {
            components.union(idx, target);
        }
    }

    components.into_labeling().into_iter().collect::<HashSet<_>>().len()
}

/// Node count, edge count and weak component count
pub fn graph_stats(graph: &NoteGraph) -> GraphStats {
    GraphStats {
        total_pages: graph.node_count(),
        total_links: graph.edge_count(),
        connected_components: weak_component_count(graph),
    }
}

/// Materialize the full adjacency matrix (row = source, column = target)
pub fn adjacency_matrix(graph: &NoteGraph) -> AdjacencyMatrix {
    let n = graph.node_count();
    let mut matrix = vec![vec![0u8; n]; n];
    for (row, cells) in matrix.iter_mut().enumerate() {
        for col in graph.successors_of(row) {
            cells[col] = 1;
        }
    }

    AdjacencyMatrix {
        nodes: graph.nodes().to_vec(),
        matrix,
    }
}

/// Minimum-edge directed path from `source` to `target`, inclusive.
///
/// Returns `None` when either endpoint is not in the graph or no directed
/// route exists. A node reaches itself with the single-element path.
pub fn shortest_path(graph: &NoteGraph, source: &str, target: &str) -> Option<Vec<String>> {
    let start = graph.index_of(source)?;
    let goal = graph.index_of(target)?;

    let mut parent: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::from([start]);
    visited[start] = true;

    while let Some(idx) = queue.pop_front() {
        if idx == goal {
            let mut path = vec![goal];
            let mut cursor = goal;
            while let Some(prev) = parent[cursor] {
                path.push(prev);
                cursor = prev;
            }
            path.reverse();
            return Some(
                path.into_iter()
                    .filter_map(|i| graph.name(i).map(str::to_string))
                    .collect(),
            );
        }

        for next in graph.successors_of(idx) {
            if !visited[next] {
                visited[next] = true;
                parent[next] = Some(idx);
                queue.push_back(next);
            }
        }
    }

    None
}
