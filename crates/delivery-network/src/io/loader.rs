//! Network file loader.
//!
//! Format (all values are integers, tokens separated by whitespace):
//!
//! ```text
//! n m
//! node1 node2 power [distance]     <- m lines
//! ```
//!
//! Nodes `1..=n` always exist, even when no edge mentions them. A missing
//! distance defaults to 1. Blank lines are ignored. Any malformed line
//! fails the whole load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use crate::models::{Distance, Graph, NodeId, Power};
use crate::{GraphError, Result};

/// Parse a network from a string.
///
/// # Example
///
/// ```
/// use delivery_network::{parse_graph, NodeId};
///
/// let graph = parse_graph("3 1\n1 2 10 4\n").unwrap();
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.num_edges(), 1);
/// assert!(graph.contains_node(&NodeId(3)));
/// ```
pub fn parse_graph(input: &str) -> Result<Graph<NodeId>> {
    read_graph(input.as_bytes())
}

/// Read a network from a file.
pub fn graph_from_file(path: impl AsRef<Path>) -> Result<Graph<NodeId>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let graph = read_graph(BufReader::new(file))?;
    info!(
        "Loaded {} ({} nodes, {} edges)",
        path.display(),
        graph.num_nodes(),
        graph.num_edges()
    );
    Ok(graph)
}

/// Read a network from any buffered reader.
pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph<NodeId>> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|l| (i + 1, l)));
    let mut next_record = || -> Result<Option<(usize, String)>> {
        for line in lines.by_ref() {
            let (line_no, text) = line?;
            if !text.trim().is_empty() {
                return Ok(Some((line_no, text)));
            }
        }
        Ok(None)
    };

    let (header_line, header) =
        next_record()?.ok_or_else(|| GraphError::parse(1, "missing 'nodes edges' header"))?;
    let tokens: Vec<&str> = header.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(GraphError::parse(
            header_line,
            format!("expected 'nodes edges', found {} tokens", tokens.len()),
        ));
    }
    let num_nodes: u32 = parse_token(header_line, tokens[0], "node count")?;
    let num_edges: usize = parse_token(header_line, tokens[1], "edge count")?;

    let mut graph = Graph::with_nodes((1..=num_nodes).map(NodeId));
    let mut last_line = header_line;

    for read in 0..num_edges {
        let (line_no, text) = next_record()?.ok_or_else(|| {
            GraphError::parse(
                last_line + 1,
                format!("expected {} edges, found {}", num_edges, read),
            )
        })?;
        let (a, b, power, distance) = parse_edge(line_no, &text)?;
        if !graph.contains_node(&a) || !graph.contains_node(&b) {
            debug!("Line {}: edge {}-{} extends the node range", line_no, a, b);
        }
        graph.add_edge_with_distance(a, b, power, distance);
        last_line = line_no;
    }

    if let Some((line_no, _)) = next_record()? {
        return Err(GraphError::parse(
            line_no,
            format!("unexpected data after {} edges", num_edges),
        ));
    }

    Ok(graph)
}

fn parse_edge(line_no: usize, text: &str) -> Result<(NodeId, NodeId, Power, Distance)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [a, b, power] | [a, b, power, _] => {
            let distance = match tokens.get(3) {
                Some(d) => Distance(parse_token(line_no, d, "distance")?),
                None => Distance::UNIT,
            };
            Ok((
                NodeId(parse_token(line_no, a, "node")?),
                NodeId(parse_token(line_no, b, "node")?),
                Power(parse_token(line_no, power, "power")?),
                distance,
            ))
        }
        _ => Err(GraphError::parse(
            line_no,
            format!(
                "expected 'node1 node2 power [distance]', found {} tokens",
                tokens.len()
            ),
        )),
    }
}

fn parse_token<T>(line_no: usize, token: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    token
        .parse()
        .map_err(|e| GraphError::parse(line_no, format!("invalid {} '{}': {}", what, token, e)))
}
