//! Connected components.
//!
//! A connected component is a maximal set of nodes joined by paths of
//! edges, whatever their power. Components partition the node set.
//!
//! Traversal is an iterative DFS with an explicit stack, so deep or skewed
//! networks cannot exhaust the call stack. Every traversal root is marked
//! visited before its neighbors are explored, so it lands in its own
//! component exactly once.

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::models::{ComponentId, Graph};
use crate::Result;

/// Collect the dense indices reachable from `start`, marking them visited.
pub(crate) fn explore<N: Clone + Eq + Hash>(
    graph: &Graph<N>,
    start: usize,
    visited: &mut [bool],
) -> Vec<usize> {
    let mut component = Vec::new();
    let mut stack = vec![start];
    visited[start] = true;

    while let Some(node) = stack.pop() {
        component.push(node);
        for edge in graph.edges_at(node) {
            if !visited[edge.target] {
                visited[edge.target] = true;
                stack.push(edge.target);
            }
        }
    }

    component
}

/// Membership mask of the component containing `start`.
pub(crate) fn reachable_mask<N: Clone + Eq + Hash>(graph: &Graph<N>, start: usize) -> Vec<bool> {
    let mut visited = vec![false; graph.num_nodes()];
    explore(graph, start, &mut visited);
    visited
}

/// Partition the graph into connected components.
///
/// Components are listed in the order their first node was inserted into
/// the graph. Isolated nodes form singleton components.
pub fn connected_components<N: Clone + Eq + Hash>(graph: &Graph<N>) -> Vec<Vec<N>> {
    let mut visited = vec![false; graph.num_nodes()];
    let mut components = Vec::new();

    for start in 0..graph.num_nodes() {
        if visited[start] {
            continue;
        }
        let members = explore(graph, start, &mut visited);
        components.push(
            members
                .into_iter()
                .map(|i| graph.node_at(i).clone())
                .collect(),
        );
    }

    debug!(
        "Found {} connected components over {} nodes",
        components.len(),
        graph.num_nodes()
    );
    components
}

/// Connected components as a set of node sets.
///
/// Suitable for order-independent comparison.
pub fn connected_components_set<N: Clone + Eq + Hash + Ord>(
    graph: &Graph<N>,
) -> BTreeSet<BTreeSet<N>> {
    connected_components(graph)
        .into_iter()
        .map(|c| c.into_iter().collect())
        .collect()
}

/// Get component ID for each node.
///
/// Returns a vector where `result[i]` is the component of `graph.nodes()[i]`.
/// IDs are assigned 0, 1, 2, ... in discovery order.
pub fn component_ids<N: Clone + Eq + Hash>(graph: &Graph<N>) -> Vec<ComponentId> {
    let n = graph.num_nodes();
    let mut visited = vec![false; n];
    let mut ids = vec![ComponentId::UNASSIGNED; n];
    let mut next_id = 0u32;

    for start in 0..n {
        if visited[start] {
            continue;
        }
        for member in explore(graph, start, &mut visited) {
            ids[member] = ComponentId::new(next_id);
        }
        next_id += 1;
    }

    ids
}

/// Nodes of the component containing `node`.
pub fn component_of<N: Clone + Eq + Hash + Debug>(graph: &Graph<N>, node: &N) -> Result<Vec<N>> {
    let start = graph.require_index(node)?;
    let mut visited = vec![false; graph.num_nodes()];
    Ok(explore(graph, start, &mut visited)
        .into_iter()
        .map(|i| graph.node_at(i).clone())
        .collect())
}

/// Check if two nodes lie in the same component.
pub fn same_component<N: Clone + Eq + Hash + Debug>(
    graph: &Graph<N>,
    a: &N,
    b: &N,
) -> Result<bool> {
    let a = graph.require_index(a)?;
    let b = graph.require_index(b)?;
    Ok(reachable_mask(graph, a)[b])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NodeId, Power};
    use crate::GraphError;

    fn n(id: u32) -> NodeId {
        NodeId(id)
    }

    fn set(ids: &[u32]) -> BTreeSet<NodeId> {
        ids.iter().copied().map(NodeId).collect()
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph = Graph::new();
        assert!(connected_components(&graph).is_empty());
        assert!(component_ids(&graph).is_empty());
    }

    #[test]
    fn test_single_node() {
        let graph = Graph::with_nodes([n(1)]);
        assert_eq!(connected_components(&graph), vec![vec![n(1)]]);
    }

    #[test]
    fn test_root_counted_once() {
        // Star around 1: a traversal rooted at 1 rediscovers it from every leaf
        let mut graph = Graph::new();
        for leaf in 2..6 {
            graph.add_edge(n(1), n(leaf), Power(1));
        }

        let components = connected_components(&graph);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 5);
        assert_eq!(components[0].iter().filter(|&&v| v == n(1)).count(), 1);
    }

    #[test]
    fn test_self_loop_root_counted_once() {
        let mut graph = Graph::new();
        graph.add_edge(n(1), n(1), Power(1));
        assert_eq!(connected_components(&graph), vec![vec![n(1)]]);
    }

    #[test]
    fn test_two_components_and_isolated() {
        let mut graph = Graph::with_nodes((1..=7).map(NodeId));
        graph.add_edge(n(1), n(2), Power(1));
        graph.add_edge(n(2), n(3), Power(1));
        graph.add_edge(n(4), n(5), Power(1));
        graph.add_edge(n(5), n(6), Power(1));
        graph.add_edge(n(6), n(4), Power(1));

        let expected: BTreeSet<_> = [set(&[1, 2, 3]), set(&[4, 5, 6]), set(&[7])]
            .into_iter()
            .collect();
        assert_eq!(connected_components_set(&graph), expected);
    }

    #[test]
    fn test_components_follow_node_order() {
        let mut graph = Graph::with_nodes([n(9), n(1), n(5)]);
        graph.add_edge(n(1), n(5), Power(1));

        let components = connected_components(&graph);
        assert_eq!(components[0], vec![n(9)]);
        assert_eq!(components[1][0], n(1));
    }

    #[test]
    fn test_component_ids() {
        let mut graph = Graph::with_nodes((1..=5).map(NodeId));
        graph.add_edge(n(1), n(2), Power(3));
        graph.add_edge(n(3), n(4), Power(3));

        let ids = component_ids(&graph);
        assert_eq!(ids[0], ids[1]);
        assert_eq!(ids[2], ids[3]);
        assert_ne!(ids[0], ids[2]);
        assert_ne!(ids[4], ids[0]);
        assert!(ids.iter().all(|c| c.is_assigned()));
        assert_eq!(ids[4], ComponentId::new(2));
    }

    #[test]
    fn test_component_of_and_same_component() {
        let mut graph = Graph::with_nodes((1..=4).map(NodeId));
        graph.add_edge(n(1), n(2), Power(7));

        let members: BTreeSet<_> = component_of(&graph, &n(2)).unwrap().into_iter().collect();
        assert_eq!(members, set(&[1, 2]));
        assert!(same_component(&graph, &n(1), &n(2)).unwrap());
        assert!(!same_component(&graph, &n(1), &n(3)).unwrap());
        assert!(matches!(
            same_component(&graph, &n(1), &n(42)),
            Err(GraphError::UnknownNode(_))
        ));
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let mut graph = Graph::new();
        for i in 0..200_000u32 {
            graph.add_edge(n(i), n(i + 1), Power(1));
        }
        let components = connected_components(&graph);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 200_001);
    }
}
