//! Path search within a power budget.
//!
//! Only edges whose minimum power is at most the budget may be used. The
//! search first checks, ignoring power, that the destination lies in the
//! source's component; if it does not, no budget can help. Otherwise an
//! iterative depth-first search walks from the source and returns the first
//! path it completes. That path is simple but not necessarily the shortest
//! by hops, distance or power.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::components::reachable_mask;
use crate::models::{Graph, Power};
use crate::{GraphError, Result};

/// Expansions between two deadline checks.
const DEADLINE_CHECK_INTERVAL: u64 = 1024;

/// Path search configuration.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Abort the search with [`GraphError::Timeout`] after this long.
    pub timeout: Option<Duration>,
}

impl SearchConfig {
    /// Create new search configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a search deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Why no path was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoPathReason {
    /// Source and destination lie in different components.
    Disconnected,
    /// Connected, but every connecting path needs more power.
    InsufficientPower,
}

/// Result of a constrained path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome<N> {
    /// A witness path `[src, ..., dest]`.
    Found(Vec<N>),
    /// No path within the budget.
    NotFound(NoPathReason),
}

impl<N> PathOutcome<N> {
    /// Check if a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    /// The witness path, if any.
    pub fn path(&self) -> Option<&[N]> {
        match self {
            PathOutcome::Found(path) => Some(path.as_slice()),
            PathOutcome::NotFound(_) => None,
        }
    }

    /// Drop the failure reason.
    pub fn into_path(self) -> Option<Vec<N>> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::NotFound(_) => None,
        }
    }

    /// The failure reason, if no path was found.
    pub fn reason(&self) -> Option<NoPathReason> {
        match self {
            PathOutcome::Found(_) => None,
            PathOutcome::NotFound(reason) => Some(*reason),
        }
    }
}

/// Find a path from `src` to `dest` using only edges with power <= `budget`.
///
/// Returns `None` when no such path exists, whether because the nodes are
/// disconnected or because the budget is too small. Use [`search_path`] to
/// tell the two apart.
///
/// # Example
///
/// ```
/// use delivery_network::{find_path, Graph, NodeId, Power};
///
/// let mut graph = Graph::new();
/// graph.add_edge(NodeId(1), NodeId(2), Power(4));
///
/// assert!(find_path(&graph, &NodeId(1), &NodeId(2), Power(4)).unwrap().is_some());
/// assert!(find_path(&graph, &NodeId(1), &NodeId(2), Power(3)).unwrap().is_none());
/// ```
pub fn find_path<N: Clone + Eq + Hash + Debug>(
    graph: &Graph<N>,
    src: &N,
    dest: &N,
    budget: Power,
) -> Result<Option<Vec<N>>> {
    search_path(graph, src, dest, budget, &SearchConfig::default()).map(PathOutcome::into_path)
}

/// Constrained path search with configuration and failure reason.
pub fn search_path<N: Clone + Eq + Hash + Debug>(
    graph: &Graph<N>,
    src: &N,
    dest: &N,
    budget: Power,
    config: &SearchConfig,
) -> Result<PathOutcome<N>> {
    let s = graph.require_index(src)?;
    let d = graph.require_index(dest)?;

    if !reachable_mask(graph, s)[d] {
        debug!("No path {:?} -> {:?}: different components", src, dest);
        return Ok(PathOutcome::NotFound(NoPathReason::Disconnected));
    }

    let outcome = match constrained_dfs(graph, s, d, budget, config)? {
        Some(indices) => PathOutcome::Found(
            indices
                .into_iter()
                .map(|i| graph.node_at(i).clone())
                .collect(),
        ),
        None => PathOutcome::NotFound(NoPathReason::InsufficientPower),
    };

    debug!(
        "Path search {:?} -> {:?} with power {}: {}",
        src,
        dest,
        budget,
        if outcome.is_found() { "found" } else { "insufficient power" }
    );
    Ok(outcome)
}

/// Depth-first search over dense indices, skipping edges above `budget`.
///
/// Each stack frame holds a node and the position of the next adjacency
/// entry to try, so the stack doubles as the current path. Nodes stay
/// visited after backtracking: a node that could not reach `dest` once
/// cannot reach it later either.
pub(crate) fn constrained_dfs<N: Clone + Eq + Hash>(
    graph: &Graph<N>,
    src: usize,
    dest: usize,
    budget: Power,
    config: &SearchConfig,
) -> Result<Option<Vec<usize>>> {
    let deadline = config
        .timeout
        .and_then(|timeout| Instant::now().checked_add(timeout).map(|at| (at, timeout)));

    let mut visited = vec![false; graph.num_nodes()];
    visited[src] = true;
    let mut stack: Vec<(usize, usize)> = vec![(src, 0)];
    let mut steps = 0u64;

    while let Some(&(node, pos)) = stack.last() {
        if node == dest {
            return Ok(Some(stack.iter().map(|&(v, _)| v).collect()));
        }

        if let Some((at, timeout)) = deadline {
            if steps % DEADLINE_CHECK_INTERVAL == 0 && Instant::now() >= at {
                return Err(GraphError::Timeout(timeout));
            }
        }
        steps += 1;

        let edges = graph.edges_at(node);
        let next = edges[pos..]
            .iter()
            .position(|e| !visited[e.target] && e.min_power <= budget);

        match next {
            Some(offset) => {
                let target = edges[pos + offset].target;
                let top = stack.len() - 1;
                stack[top].1 = pos + offset + 1;
                visited[target] = true;
                trace!("Advance {} -> {} (depth {})", node, target, stack.len());
                stack.push((target, 0));
            }
            None => {
                trace!("Backtrack from {}", node);
                stack.pop();
            }
        }
    }

    Ok(None)
}
