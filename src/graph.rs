#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub to: usize,
    pub weight: f64,
}

/// Undirected weighted graph over vertices `0..vertices`.
///
/// Every edge is stored twice, once in each endpoint's adjacency list, in
/// the order edges were added. Self-loops and parallel edges are kept as-is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Graph {
    pub vertices: usize,
    pub edges: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn new(vertices: usize) -> Self {
        Graph {
            vertices,
            edges: vec![Vec::new(); vertices],
        }
    }

    /// Builds a graph from an edge list of `(from, to, weight)` triples.
    ///
    /// Fails on the first edge whose endpoint falls outside `0..vertices`
    /// or whose weight is negative or not finite; no partial graph is
    /// returned in that case.
    pub fn from_edges(vertices: usize, edges: &[(usize, usize, f64)]) -> Result<Graph> {
        let mut graph = Graph::new(vertices);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Adds an undirected edge, appending `(to, weight)` to `from`'s list
    /// and `(from, weight)` to `to`'s list. A self-loop lands in its
    /// vertex's list twice.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<()> {
        if from >= self.vertices {
            return Err(Error::VertexOutOfRange {
                vertex: from,
                vertices: self.vertices,
            });
        }
        if to >= self.vertices {
            return Err(Error::VertexOutOfRange {
                vertex: to,
                vertices: self.vertices,
            });
        }
        if !(weight >= 0.0 && weight.is_finite()) {
            return Err(Error::NegativeWeight(weight));
        }

        self.edges[from].push(Edge { to, weight });
        self.edges[to].push(Edge { to: from, weight });
        Ok(())
    }

    pub fn neighbors(&self, vertex: usize) -> &[Edge] {
        &self.edges[vertex]
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|adj| adj.len()).sum()
    }

    #[cfg(feature = "petgraph")]
    pub fn to_petgraph(&self) -> petgraph::graph::UnGraph<usize, f64> {
        let mut pg_graph = petgraph::graph::UnGraph::new_undirected();
        let nodes: Vec<_> = (0..self.vertices).map(|i| pg_graph.add_node(i)).collect();

        // Each undirected edge is stored twice; only emit the copy where
        // `from <= to` so petgraph sees it once.
        for (from_idx, adj) in self.edges.iter().enumerate() {
            for edge in adj {
                if from_idx <= edge.to {
                    pg_graph.add_edge(nodes[from_idx], nodes[edge.to], edge.weight);
                }
            }
        }
        pg_graph
    }
}
