//! Node/edge export for graph visualisation front-ends

use crate::graph::NoteGraph;
use notegraph_core::{NoteMap, Result};
use serde::{Deserialize, Serialize};

/// A node with the metadata a viewer shows on hover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub headings: Vec<String>,
    pub links: Vec<String>,
}

/// A directed edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

/// Full graph payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphData {
    /// Export a graph, pulling headings and raw links from the notes
    pub fn from_graph(notes: &NoteMap, graph: &NoteGraph) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .map(|id| {
                let note = notes.get(id);
                GraphNode {
                    id: id.clone(),
                    label: id.clone(),
                    headings: note.map(|n| n.headings.clone()).unwrap_or_default(),
                    links: note.map(|n| n.links.clone()).unwrap_or_default(),
                }
            })
            .collect();

        let edges = graph
            .edges()
            .map(|(from, to)| GraphEdge {
                from: from.to_string(),
                to: to.to_string(),
            })
            .collect();

        Self { nodes, edges }
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notegraph_core::MemoryCorpus;
    use notegraph_parser::Parser;

    #[test]
    fn test_export_nodes_and_edges() {
        let corpus = MemoryCorpus::new()
            .with("a.md", "# A\n[b](b.md) [nowhere](nowhere.md)")
            .with("b.md", "## B");
        let notes = Parser::default().parse_corpus(&corpus);
        let graph = NoteGraph::build(&notes);

        let data = GraphData::from_graph(&notes, &graph);
        assert_eq!(data.nodes.len(), 2);
        assert_eq!(data.nodes[0].id, "a.md");
        assert_eq!(data.nodes[0].headings, vec!["# A"]);
        assert_eq!(data.nodes[0].links, vec!["b.md", "nowhere.md"]);
        assert_eq!(
            data.edges,
            vec![GraphEdge {
                from: "a.md".into(),
                to: "b.md".into()
            }]
        );
    }

    #[test]
    fn test_json_shape() {
        let corpus = MemoryCorpus::new().with("a.md", "[a](a.md)");
        let notes = Parser::default().parse_corpus(&corpus);
        let data = GraphData::from_graph(&notes, &NoteGraph::build(&notes));

        let value: serde_json::Value = serde_json::from_str(&data.to_json().unwrap()).unwrap();
        assert_eq!(value["nodes"][0]["label"], "a.md");
        assert_eq!(value["edges"][0]["from"], "a.md");
        assert_eq!(value["edges"][0]["to"], "a.md");
    }
}
