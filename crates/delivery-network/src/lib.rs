//! Power-constrained routing over undirected delivery networks.
//!
//! A delivery network is an undirected multigraph where every edge carries
//! the minimum vehicle power needed to traverse it, plus a distance. This
//! crate provides:
//!
//! - **Graph**: adjacency-list store generic over the node identifier
//! - **Components**: connected-component discovery by iterative DFS
//! - **Constrained path**: DFS restricted to edges within a power budget
//! - **Minimum power**: binary search for the smallest feasible budget
//! - **Loader**: the `n m` / `a b power [distance]` text format
//!
//! # Example
//!
//! ```
//! use delivery_network::{find_path, min_power, Graph, NodeId, Power};
//!
//! let mut graph = Graph::with_nodes((1..=4).map(NodeId));
//! graph.add_edge(NodeId(1), NodeId(2), Power(2));
//! graph.add_edge(NodeId(2), NodeId(3), Power(3));
//! graph.add_edge(NodeId(3), NodeId(4), Power(1));
//! graph.add_edge(NodeId(1), NodeId(4), Power(5));
//!
//! let path = find_path(&graph, &NodeId(1), &NodeId(3), Power(3)).unwrap();
//! assert_eq!(path, Some(vec![NodeId(1), NodeId(2), NodeId(3)]));
//!
//! let route = min_power(&graph, &NodeId(1), &NodeId(4)).unwrap().unwrap();
//! assert_eq!(route.power, Power(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod io;
pub mod models;

// Re-export main types
pub use algorithms::components::{
    component_ids, component_of, connected_components, connected_components_set,
    same_component,
};
pub use algorithms::min_power::{
    min_power, min_power_with_config, MinPowerConfig, PowerBound, PowerRoute,
};
pub use algorithms::path::{find_path, search_path, NoPathReason, PathOutcome, SearchConfig};
pub use io::loader::{graph_from_file, parse_graph, read_graph};
pub use models::graph::{Edge, Graph, GraphBuilder};
pub use models::node::{ComponentId, Distance, NodeId, Power};

/// Delivery network error types.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Node is not part of the graph.
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// Graph structure violates an invariant.
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// Malformed network description.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// I/O failure while reading a network description.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Search exceeded its deadline.
    #[error("Search timed out after {0:?}")]
    Timeout(std::time::Duration),
}

impl GraphError {
    pub(crate) fn unknown_node<N: std::fmt::Debug>(node: &N) -> Self {
        GraphError::UnknownNode(format!("{:?}", node))
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        GraphError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type for delivery network operations.
pub type Result<T> = std::result::Result<T, GraphError>;
