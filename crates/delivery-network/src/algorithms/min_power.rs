//! Minimum power between two nodes.
//!
//! Path existence is monotone in the budget, so the smallest feasible power
//! is found by binary search with the constrained DFS as the oracle. Each
//! probe is a fresh search; nothing is cached between probes.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::components::explore;
use super::path::{constrained_dfs, SearchConfig};
use crate::models::{Graph, Power};
use crate::Result;

/// How the binary search range is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerBound {
    /// Range over every edge power in the source's component (floored at
    /// zero). Always contains the answer.
    #[default]
    Component,
    /// Range `[0, max power incident to src]`.
    ///
    /// Cheaper to compute, but misses routes that need an edge stronger
    /// than any edge leaving the source; those queries report no path.
    IncidentToSource,
}

/// Minimum power search configuration.
#[derive(Debug, Clone, Default)]
pub struct MinPowerConfig {
    /// Binary search range policy.
    pub bound: PowerBound,
    /// Configuration of every path search probe.
    pub search: SearchConfig,
}

impl MinPowerConfig {
    /// Create new configuration with the component bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the range policy.
    pub fn with_bound(mut self, bound: PowerBound) -> Self {
        self.bound = bound;
        self
    }

    /// Set a deadline for each probe.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.search = self.search.with_timeout(timeout);
        self
    }
}

/// Minimal power and a path that achieves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerRoute<N> {
    /// Witness path `[src, ..., dest]`.
    pub path: Vec<N>,
    /// Smallest budget for which a path exists.
    pub power: Power,
}

impl<N> PowerRoute<N> {
    /// Split into `(path, power)`.
    pub fn into_parts(self) -> (Vec<N>, Power) {
        (self.path, self.power)
    }
}

/// Smallest power connecting `src` and `dest`, with a witness path.
///
/// Returns `None` when the nodes are in different components.
pub fn min_power<N: Clone + Eq + Hash + Debug>(
    graph: &Graph<N>,
    src: &N,
    dest: &N,
) -> Result<Option<PowerRoute<N>>> {
    min_power_with_config(graph, src, dest, &MinPowerConfig::default())
}

/// Minimum power search with configuration.
pub fn min_power_with_config<N: Clone + Eq + Hash + Debug>(
    graph: &Graph<N>,
    src: &N,
    dest: &N,
    config: &MinPowerConfig,
) -> Result<Option<PowerRoute<N>>> {
    let s = graph.require_index(src)?;
    let d = graph.require_index(dest)?;

    if s == d {
        return Ok(Some(PowerRoute {
            path: vec![src.clone()],
            power: Power::ZERO,
        }));
    }

    let mut visited = vec![false; graph.num_nodes()];
    let component = explore(graph, s, &mut visited);
    if !visited[d] {
        debug!("No power connects {:?} and {:?}: different components", src, dest);
        return Ok(None);
    }

    let (mut lo, mut hi) = match config.bound {
        PowerBound::Component => component
            .iter()
            .flat_map(|&v| graph.edges_at(v))
            .fold((Power::ZERO, Power::ZERO), |(lo, hi), e| {
                (lo.min(e.min_power), hi.max(e.min_power))
            }),
        PowerBound::IncidentToSource => (
            Power::ZERO,
            graph
                .max_incident_power(src)
                .unwrap_or(Power::ZERO)
                .max(Power::ZERO),
        ),
    };
    debug!(
        "Minimum power {:?} -> {:?}: searching [{}, {}] ({:?} bound)",
        src, dest, lo, hi, config.bound
    );

    while lo < hi {
        let mid = lo.midpoint(hi);
        if constrained_dfs(graph, s, d, mid, &config.search)?.is_some() {
            hi = mid;
        } else {
            lo = mid.succ();
        }
        debug!("  probe {} -> range [{}, {}]", mid, lo, hi);
    }

    match constrained_dfs(graph, s, d, lo, &config.search)? {
        Some(indices) => Ok(Some(PowerRoute {
            path: indices
                .into_iter()
                .map(|i| graph.node_at(i).clone())
                .collect(),
            power: lo,
        })),
        None => {
            warn!(
                "No path {:?} -> {:?} within power {} although both are connected; \
                 the {:?} bound is too small",
                src, dest, lo, config.bound
            );
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::path::find_path;
    use crate::models::NodeId;
    use crate::GraphError;

    fn n(id: u32) -> NodeId {
        NodeId(id)
    }

    fn diamond() -> Graph {
        let mut graph = Graph::with_nodes((1..=4).map(NodeId));
        graph.add_edge(n(1), n(2), Power(2));
        graph.add_edge(n(2), n(3), Power(3));
        graph.add_edge(n(3), n(4), Power(1));
        graph.add_edge(n(1), n(4), Power(5));
        graph
    }

    #[test]
    fn test_avoids_expensive_direct_edge() {
        let graph = diamond();
        let route = min_power(&graph, &n(1), &n(4)).unwrap().unwrap();
        assert_eq!(route.power, Power(3));
        assert_eq!(route.path, vec![n(1), n(2), n(3), n(4)]);
    }

    #[test]
    fn test_minimality() {
        let graph = diamond();
        for src in 1..=4 {
            for dest in 1..=4 {
                let route = min_power(&graph, &n(src), &n(dest)).unwrap().unwrap();
                assert!(find_path(&graph, &n(src), &n(dest), route.power)
                    .unwrap()
                    .is_some());
                if route.power > Power::ZERO {
                    assert!(find_path(&graph, &n(src), &n(dest), route.power.pred())
                        .unwrap()
                        .is_none());
                }
            }
        }
    }

    #[test]
    fn test_disconnected() {
        let mut graph = Graph::with_nodes((1..=4).map(NodeId));
        graph.add_edge(n(1), n(2), Power(1));
        graph.add_edge(n(3), n(4), Power(1_000_000));

        assert_eq!(min_power(&graph, &n(1), &n(3)).unwrap(), None);
    }

    #[test]
    fn test_same_node() {
        let graph = Graph::with_nodes([n(7)]);
        let (path, power) = min_power(&graph, &n(7), &n(7)).unwrap().unwrap().into_parts();
        assert_eq!(path, vec![n(7)]);
        assert_eq!(power, Power::ZERO);
    }

    #[test]
    fn test_incident_bound_misses_strong_edge() {
        // Leaving 1 needs only power 1, but 2 -> 3 needs 10
        let mut graph = Graph::new();
        graph.add_edge(n(1), n(2), Power(1));
        graph.add_edge(n(2), n(3), Power(10));

        let incident = MinPowerConfig::new().with_bound(PowerBound::IncidentToSource);
        assert_eq!(
            min_power_with_config(&graph, &n(1), &n(3), &incident).unwrap(),
            None
        );

        let route = min_power(&graph, &n(1), &n(3)).unwrap().unwrap();
        assert_eq!(route.power, Power(10));
    }

    #[test]
    fn test_incident_bound_agrees_when_sufficient() {
        let graph = diamond();
        let incident = MinPowerConfig::new().with_bound(PowerBound::IncidentToSource);
        let route = min_power_with_config(&graph, &n(1), &n(4), &incident)
            .unwrap()
            .unwrap();
        assert_eq!(route.power, Power(3));
    }

    #[test]
    fn test_zero_power_edges() {
        let mut graph = Graph::new();
        graph.add_edge(n(1), n(2), Power(0));
        graph.add_edge(n(2), n(3), Power(0));

        let route = min_power(&graph, &n(1), &n(3)).unwrap().unwrap();
        assert_eq!(route.power, Power::ZERO);
        assert_eq!(route.path, vec![n(1), n(2), n(3)]);
    }

    #[test]
    fn test_negative_powers() {
        let mut graph = Graph::new();
        graph.add_edge(n(1), n(2), Power(-3));
        graph.add_edge(n(2), n(3), Power(-7));

        let route = min_power(&graph, &n(1), &n(3)).unwrap().unwrap();
        assert_eq!(route.power, Power(-3));
    }

    #[test]
    fn test_large_powers() {
        let mut graph = Graph::new();
        graph.add_edge(n(1), n(2), Power(i64::MAX - 1));
        graph.add_edge(n(2), n(3), Power(i64::MAX));
        graph.add_edge(n(1), n(3), Power::MAX);

        let route = min_power(&graph, &n(1), &n(3)).unwrap().unwrap();
        assert_eq!(route.power, Power::MAX);
    }

    #[test]
    fn test_unknown_node() {
        let graph = diamond();
        assert!(matches!(
            min_power(&graph, &n(1), &n(50)),
            Err(GraphError::UnknownNode(_))
        ));
    }

    #[test]
    fn test_timeout_propagates() {
        let mut graph = Graph::new();
        for i in 0..10 {
            graph.add_edge(n(i), n(i + 1), Power(i as i64));
        }
        let config = MinPowerConfig::new().with_timeout(Duration::ZERO);
        assert!(matches!(
            min_power_with_config(&graph, &n(0), &n(10), &config),
            Err(GraphError::Timeout(_))
        ));
    }
}
