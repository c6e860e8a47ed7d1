//! Directed note graph as an explicit adjacency list

use notegraph_core::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// Directed, unweighted, simple graph over note identities.
///
/// Nodes keep the order of the [`NoteMap`] they were built from. Each node
/// holds an ordered set of outgoing and incoming neighbor indices, so
/// repeated links collapse to one edge and iteration is deterministic.
#[derive(Debug, Clone, Default)]
pub struct NoteGraph {
    /// Node identities in build order
    nodes: Vec<String>,

    /// Map from identity to node index
    index: HashMap<String, usize>,

    /// Outgoing neighbor indices per node
    outgoing: Vec<BTreeSet<usize>>,

    /// Incoming neighbor indices per node
    incoming: Vec<BTreeSet<usize>>,

    edge_count: usize,
}

impl NoteGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from parsed notes.
    ///
    /// Every note becomes a node. A reference becomes an edge only when its
    /// target is itself a note identity; everything else is left for
    /// broken-link detection.
    pub fn build(notes: &NoteMap) -> Self {
        let mut graph = Self::new();

        for name in notes.keys() {
            graph.add_node(name);
        }

        for (source, note) in notes {
            for target in &note.links {
                graph.add_edge(source, target);
            }
        }

        log::debug!(
            "Built note graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    /// Add a node if absent, returning its index
    pub fn add_node(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(name.to_string());
        self.index.insert(name.to_string(), idx);
        self.outgoing.push(BTreeSet::new());
        self.incoming.push(BTreeSet::new());
        idx
    }

    /// Add an edge between two existing nodes.
    ///
    /// Returns `false` when either endpoint is unknown or the edge already
    /// exists.
    pub fn add_edge(&mut self, source: &str, target: &str) -> bool {
        let (Some(&from), Some(&to)) = (self.index.get(source), self.index.get(target)) else {
            return false;
        };
        if !self.outgoing[from].insert(to) {
            return false;
        }
        self.incoming[to].insert(from);
        self.edge_count += 1;
        true
    }

    /// Node identities in node order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Node count
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Edge count
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has a node with this identity
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Index of a node
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Identity of the node at an index
    pub fn name(&self, idx: usize) -> Option<&str> {
        self.nodes.get(idx).map(String::as_str)
    }

    /// Whether a directed edge exists
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        match (self.index.get(source), self.index.get(target)) {
            (Some(&from), Some(&to)) => self.outgoing[from].contains(&to),
            _ => false,
        }
    }

    /// In-degree of a node, `None` if absent
    pub fn in_degree(&self, name: &str) -> Option<usize> {
        self.index_of(name).map(|idx| self.incoming[idx].len())
    }

    /// Out-degree of a node, `None` if absent
    pub fn out_degree(&self, name: &str) -> Option<usize> {
        self.index_of(name).map(|idx| self.outgoing[idx].len())
    }

    /// Outgoing neighbor indices of a node index
    pub(crate) fn successors_of(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.outgoing[idx].iter().copied()
    }

    /// In-degree by node index
    pub(crate) fn in_degree_of(&self, idx: usize) -> usize {
        self.incoming[idx].len()
    }

    /// Out-degree by node index
    pub(crate) fn out_degree_of(&self, idx: usize) -> usize {
        self.outgoing[idx].len()
    }

    /// Identities a note links to
    pub fn successors(&self, name: &str) -> Vec<&str> {
        self.index_of(name)
            .map(|idx| self.outgoing[idx].iter().map(|&t| self.nodes[t].as_str()).collect())
            .unwrap_or_default()
    }

    /// Identities linking to a note
    pub fn predecessors(&self, name: &str) -> Vec<&str> {
        self.index_of(name)
            .map(|idx| self.incoming[idx].iter().map(|&s| self.nodes[s].as_str()).collect())
            .unwrap_or_default()
    }

    /// All edges as (source, target), ordered by source then target index
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.outgoing.iter().enumerate().flat_map(move |(from, targets)| {
            targets
                .iter()
                .map(move |&to| (self.nodes[from].as_str(), self.nodes[to].as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(name: &str, links: &[&str]) -> Note {
        let mut note = Note::new(name, name, "");
        note.links = links.iter().map(|l| l.to_string()).collect();
        note
    }

    fn notes(entries: &[(&str, &[&str])]) -> NoteMap {
        entries.iter()
            .map(|(name, links)| (name.to_string(), note(name, links)))
            .collect()
    }

    #[test]
    fn test_every_note_is_a_node() {
        let graph = NoteGraph::build(&notes(&[("a.md", &[]), ("b.md", &[])]));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_unresolved_targets_skipped() {
        let graph = NoteGraph::build(&notes(&[
            ("a.md", &["b.md", "missing.md"]),
            ("b.md", &[]),
        ]));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge("a.md", "b.md"));
        assert!(!graph.contains("missing.md"));
    }

    #[test]
    fn test_repeated_links_collapse() {
        let graph = NoteGraph::build(&notes(&[("a.md", &["b.md", "b.md"]), ("b.md", &[])]));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.in_degree("b.md"), Some(1));
    }

    #[test]
    fn test_self_reference_is_an_edge() {
        let graph = NoteGraph::build(&notes(&[("a.md", &["a.md"])]));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.in_degree("a.md"), Some(1));
        assert_eq!(graph.out_degree("a.md"), Some(1));
    }

    #[test]
    fn test_edges_have_known_endpoints() {
        let graph = NoteGraph::build(&notes(&[
            ("a.md", &["b.md", "c.md", "x.md"]),
            ("b.md", &["c.md", "../a.md"]),
            ("c.md", &["a.md"]),
        ]));
        for (source, target) in graph.edges() {
            assert!(graph.contains(source));
            assert!(graph.contains(target));
        }
        assert_eq!(graph.edges().count(), graph.edge_count());
    }

    #[test]
    fn test_build_ignores_insertion_and_link_order() {
        let forward = notes(&[
            ("a.md", &["b.md", "c.md"]),
            ("b.md", &["a.md", "c.md"]),
            ("c.md", &[]),
        ]);
        let shuffled = notes(&[
            ("c.md", &[]),
            ("a.md", &["c.md", "b.md"]),
            ("b.md", &["c.md", "a.md"]),
        ]);
        let in_forward: Vec<_> = forward.values().map(|n| n.links.clone()).collect();
        let in_shuffled: Vec<_> = shuffled.values().map(|n| n.links.clone()).collect();
        assert_ne!(in_forward, in_shuffled);

        let g1 = NoteGraph::build(&forward);
        let g2 = NoteGraph::build(&shuffled);
        assert_eq!(g1.nodes(), ["a.md", "b.md", "c.md"]);
        assert_eq!(g1.nodes(), g2.nodes());
        assert_eq!(g1.edges().collect::<Vec<_>>(), g2.edges().collect::<Vec<_>>());
        assert_eq!(
            g1.edges().collect::<Vec<_>>(),
            vec![
                ("a.md", "b.md"),
                ("a.md", "c.md"),
                ("b.md", "a.md"),
                ("b.md", "c.md"),
            ]
        );
    }

    #[test]
    fn test_neighbors() {
        let graph = NoteGraph::build(&notes(&[
            ("a.md", &["b.md", "c.md"]),
            ("b.md", &["c.md"]),
            ("c.md", &[]),
        ]));
        assert_eq!(graph.successors("a.md"), vec!["b.md", "c.md"]);
        assert_eq!(graph.predecessors("c.md"), vec!["a.md", "b.md"]);
        assert!(graph.successors("missing.md").is_empty());
        assert_eq!(graph.in_degree("missing.md"), None);
    }

    #[test]
    fn test_add_edge_rejects_unknown_nodes() {
        let mut graph = NoteGraph::new();
        graph.add_node("a.md");
        assert!(!graph.add_edge("a.md", "b.md"));
        assert_eq!(graph.edge_count(), 0);
    }
}
