use log::debug;

use crate::graph::Graph;
use crate::{Error, Result};

/// Sentinel distance for vertices with no known path from the source.
pub const INFINITY: f64 = f64::INFINITY;

/// Shortest distances and predecessor links from a single source vertex.
///
/// Both vectors are indexed by vertex id. An unreachable vertex keeps
/// [`INFINITY`] and no predecessor; the source itself sits at `0.0` with no
/// predecessor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceTable {
    pub distances: Vec<f64>,
    pub predecessors: Vec<Option<usize>>,
}

impl DistanceTable {
    pub fn distance(&self, vertex: usize) -> f64 {
        self.distances[vertex]
    }

    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors[vertex]
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distances[vertex] != INFINITY
    }

    /// Reconstructs the shortest path to `vertex` by following predecessor
    /// links back to the source. Returns `None` when the vertex is
    /// unreachable.
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(vertex) {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(pred) = self.predecessors[current] {
            path.push(pred);
            current = pred;
        }
        path.reverse();
        Some(path)
    }
}

/// Array-scan Dijkstra over an undirected graph with non-negative weights.
///
/// Selection scans all unsettled vertices for the minimum tentative
/// distance instead of keeping a heap, which costs O(V²) overall and suits
/// small or dense graphs. Ties are broken towards the lowest vertex index,
/// so identical inputs always produce identical tables.
pub struct ScanSolver {
    graph: Graph,
}

impl ScanSolver {
    pub fn new(graph: Graph) -> Self {
        ScanSolver { graph }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Computes shortest distances and predecessors from `source` to every
    /// vertex.
    ///
    /// Fails up front if `source` is out of range or any stored edge
    /// carries a negative or non-finite weight; the non-negativity
    /// precondition is what makes settling a vertex final, so it is checked
    /// rather than assumed.
    pub fn solve_all(&self, source: usize) -> Result<DistanceTable> {
        let n = self.graph.vertices;
        if source >= n {
            return Err(Error::SourceOutOfRange {
                src: source,
                vertices: n,
            });
        }
        self.check_weights()?;

        let mut visited = vec![false; n];
        let mut distances = vec![INFINITY; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = 0.0;

        for _ in 0..n.saturating_sub(1) {
            // Lowest-index vertex among the unsettled minima; strict `<`
            // keeps the first one found in ascending order.
            let mut selected = None;
            for v in 0..n {
                if visited[v] || distances[v] == INFINITY {
                    continue;
                }
                match selected {
                    Some(m) if distances[v] >= distances[m] => {}
                    _ => selected = Some(v),
                }
            }

            // Only unreachable vertices remain.
            let Some(u) = selected else { break };

            visited[u] = true;

            for edge in &self.graph.edges[u] {
                let v = edge.to;
                let new_dist = distances[u] + edge.weight;
                if !visited[v] && new_dist < distances[v] {
                    distances[v] = new_dist;
                    predecessors[v] = Some(u);
                }
            }
        }

        let reachable = distances.iter().filter(|d| **d != INFINITY).count();
        debug!(
            "source {}: {} of {} vertices reachable",
            source, reachable, n
        );

        Ok(DistanceTable {
            distances,
            predecessors,
        })
    }

    /// Shortest distance and path from `source` to `goal`, or `Ok(None)`
    /// when no path exists.
    pub fn solve_path(&self, source: usize, goal: usize) -> Result<Option<(f64, Vec<usize>)>> {
        if goal >= self.graph.vertices {
            return Err(Error::VertexOutOfRange {
                vertex: goal,
                vertices: self.graph.vertices,
            });
        }

        let table = self.solve_all(source)?;
        Ok(table
            .path_to(goal)
            .map(|path| (table.distance(goal), path)))
    }

    fn check_weights(&self) -> Result<()> {
        for adj in &self.graph.edges {
            for edge in adj {
                if !(edge.weight >= 0.0 && edge.weight.is_finite()) {
                    return Err(Error::NegativeWeight(edge.weight));
                }
            }
        }
        Ok(())
    }
}

/// Convenience wrapper around [`ScanSolver::solve_all`] for one-shot
/// queries that do not need to keep the solver around.
pub fn shortest_paths(graph: &Graph, source: usize) -> Result<DistanceTable> {
    ScanSolver::new(graph.clone()).solve_all(source)
}
