//! Reading delivery networks from text.

pub mod loader;

pub use loader::{graph_from_file, parse_graph, read_graph};
