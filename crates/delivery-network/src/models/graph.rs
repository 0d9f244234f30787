//! Adjacency-list graph store.
//!
//! The store is an undirected multigraph. Each node is interned to a dense
//! index on first sight, and every undirected edge contributes one [`Edge`]
//! record to each endpoint's list:
//! - `nodes[i]` = identifier of node i, in insertion order
//! - `adjacency[i]` = incident edges of node i, in insertion order
//! - `num_edges` = number of undirected edges added (half the entries)
//!
//! The graph is built once and then only read by the algorithms.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::node::{Distance, NodeId, Power};
use crate::{GraphError, Result};

/// One adjacency entry: the far endpoint plus the edge's attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Dense index of the neighbor.
    pub target: usize,
    /// Minimum power required to traverse the edge.
    pub min_power: Power,
    /// Edge distance.
    pub distance: Distance,
}

/// Undirected multigraph with per-edge power and distance.
///
/// Generic over the node identifier; anything `Clone + Eq + Hash` works.
/// Parallel edges and self-loops are stored as given.
#[derive(Debug, Clone)]
pub struct Graph<N = NodeId> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<Vec<Edge>>,
    num_edges: usize,
}

impl<N: Clone + Eq + Hash> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash> Graph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            num_edges: 0,
        }
    }

    /// Create a graph with the given nodes and no edges.
    ///
    /// Duplicates are registered once, at their first position.
    pub fn with_nodes(nodes: impl IntoIterator<Item = N>) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        graph
    }

    /// Register a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.index.contains_key(&node) {
            return false;
        }
        self.intern(node);
        true
    }

    fn intern(&mut self, node: N) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(node.clone());
        self.index.insert(node, idx);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Add an undirected edge with unit distance.
    pub fn add_edge(&mut self, node1: N, node2: N, min_power: Power) {
        self.add_edge_with_distance(node1, node2, min_power, Distance::UNIT);
    }

    /// Add an undirected edge.
    ///
    /// Missing endpoints are registered first. The edge counter grows by one
    /// even though two adjacency entries are written.
    pub fn add_edge_with_distance(
        &mut self,
        node1: N,
        node2: N,
        min_power: Power,
        distance: Distance,
    ) {
        let a = self.intern(node1);
        let b = self.intern(node2);
        self.adjacency[a].push(Edge {
            target: b,
            min_power,
            distance,
        });
        self.adjacency[b].push(Edge {
            target: a,
            min_power,
            distance,
        });
        self.num_edges += 1;
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Check if a node is registered.
    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Dense index of a node.
    pub fn node_index(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// Number of adjacency entries of a node (a self-loop counts twice).
    pub fn degree(&self, node: &N) -> usize {
        self.node_index(node)
            .map(|i| self.adjacency[i].len())
            .unwrap_or(0)
    }

    /// Incident `(neighbor, min_power, distance)` triples in insertion order.
    ///
    /// Empty for unknown nodes.
    pub fn neighbors<'a>(
        &'a self,
        node: &N,
    ) -> impl Iterator<Item = (&'a N, Power, Distance)> + 'a {
        let edges: &'a [Edge] = match self.node_index(node) {
            Some(i) => &self.adjacency[i],
            None => &[],
        };
        edges
            .iter()
            .map(move |e| (&self.nodes[e.target], e.min_power, e.distance))
    }

    /// Check if any edge joins `a` and `b`.
    pub fn has_edge(&self, a: &N, b: &N) -> bool {
        self.neighbors(a).any(|(n, _, _)| n == b)
    }

    /// Check if some edge joining `a` and `b` is traversable with `budget`.
    pub fn has_edge_within(&self, a: &N, b: &N, budget: Power) -> bool {
        self.neighbors(a).any(|(n, p, _)| n == b && p <= budget)
    }

    /// Largest power among the edges incident to `node`.
    pub fn max_incident_power(&self, node: &N) -> Option<Power> {
        self.neighbors(node).map(|(_, p, _)| p).max()
    }

    /// Smallest and largest edge power in the whole graph.
    pub fn power_range(&self) -> Option<(Power, Power)> {
        let mut powers = self.adjacency.iter().flatten().map(|e| e.min_power);
        let first = powers.next()?;
        Some(powers.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Validate the adjacency structure.
    pub fn validate(&self) -> Result<()> {
        if self.nodes.len() != self.adjacency.len() || self.nodes.len() != self.index.len() {
            return Err(GraphError::InvalidGraph(format!(
                "{} nodes, {} index entries, {} adjacency lists",
                self.nodes.len(),
                self.index.len(),
                self.adjacency.len()
            )));
        }

        let entries: usize = self.adjacency.iter().map(Vec::len).sum();
        if entries != 2 * self.num_edges {
            return Err(GraphError::InvalidGraph(format!(
                "{} adjacency entries for {} edges",
                entries, self.num_edges
            )));
        }

        // Every a -> b entry needs a matching b -> a entry
        let mut counts: HashMap<(usize, usize, Power, Distance), usize> = HashMap::new();
        for (a, edges) in self.adjacency.iter().enumerate() {
            for e in edges {
                if e.target >= self.nodes.len() {
                    return Err(GraphError::InvalidGraph(format!(
                        "edge target {} out of bounds",
                        e.target
                    )));
                }
                *counts
                    .entry((a, e.target, e.min_power, e.distance))
                    .or_default() += 1;
            }
        }
        for (&(a, b, p, d), &count) in &counts {
            let mirrored = counts.get(&(b, a, p, d)).copied().unwrap_or(0);
            if mirrored != count {
                return Err(GraphError::InvalidGraph(format!(
                    "asymmetric edge between indices {} and {} (power {})",
                    a, b, p
                )));
            }
        }

        Ok(())
    }

    pub(crate) fn node_at(&self, idx: usize) -> &N {
        &self.nodes[idx]
    }

    pub(crate) fn edges_at(&self, idx: usize) -> &[Edge] {
        &self.adjacency[idx]
    }

    pub(crate) fn require_index(&self, node: &N) -> Result<usize>
    where
        N: fmt::Debug,
    {
        self.node_index(node)
            .ok_or_else(|| GraphError::unknown_node(node))
    }
}

impl<N: Clone + Eq + Hash + fmt::Display> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "The graph is empty");
        }
        writeln!(
            f,
            "The graph has {} nodes and {} edges.",
            self.num_nodes(),
            self.num_edges()
        )?;
        for (node, edges) in self.nodes.iter().zip(&self.adjacency) {
            write!(f, "{}-->[", node)?;
            for (i, e) in edges.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "({}, {}, {})", self.nodes[e.target], e.min_power, e.distance)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// Builder for graphs.
#[derive(Debug)]
pub struct GraphBuilder<N = NodeId> {
    nodes: Vec<N>,
    edges: Vec<(N, N, Power, Distance)>,
}

impl<N: Clone + Eq + Hash> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash> GraphBuilder<N> {
    /// Create new empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Register nodes up front, including ones without edges.
    pub fn with_nodes(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Add unit-distance edges.
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = (N, N, Power)>) -> Self {
        for (a, b, p) in edges {
            self.edges.push((a, b, p, Distance::UNIT));
        }
        self
    }

    /// Add edges with explicit distances.
    pub fn with_weighted_edges(
        mut self,
        edges: impl IntoIterator<Item = (N, N, Power, Distance)>,
    ) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Add a single edge.
    pub fn add_edge(&mut self, a: N, b: N, min_power: Power, distance: Distance) {
        self.edges.push((a, b, min_power, distance));
    }

    /// Build the graph: nodes first, then edges in the order given.
    pub fn build(self) -> Graph<N> {
        let mut graph = Graph::with_nodes(self.nodes);
        for (a, b, p, d) in self.edges {
            graph.add_edge_with_distance(a, b, p, d);
        }
        graph
    }
}
