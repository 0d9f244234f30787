//! `delivery-network info` command - Summarize a network file.

use std::path::Path;

use colored::Colorize;
use delivery_network::{connected_components, graph_from_file, Graph, Power};
use serde::Serialize;

use super::{print_json, OrDash, OutputFormat};
use crate::error::CliResult;

/// Network summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoReport {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of undirected edges.
    pub edges: usize,
    /// Number of connected components.
    pub components: usize,
    /// Number of nodes without edges.
    pub isolated: usize,
    /// Smallest edge power.
    pub min_power: Option<Power>,
    /// Largest edge power.
    pub max_power: Option<Power>,
}

/// Summarize a loaded network.
pub fn report(graph: &Graph) -> InfoReport {
    let range = graph.power_range();
    InfoReport {
        nodes: graph.num_nodes(),
        edges: graph.num_edges(),
        components: connected_components(graph).len(),
        isolated: graph
            .nodes()
            .iter()
            .filter(|&n| graph.degree(n) == 0)
            .count(),
        min_power: range.map(|r| r.0),
        max_power: range.map(|r| r.1),
    }
}

/// Execute the `info` command.
pub fn execute(file: &Path, format: OutputFormat) -> CliResult<()> {
    let graph = graph_from_file(file)?;
    let report = report(&graph);

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            println!(
                "{} {}",
                "→".bright_cyan(),
                file.display().to_string().bright_white()
            );
            println!("  {} Nodes: {}", "•".dimmed(), report.nodes.to_string().bright_yellow());
            println!("  {} Edges: {}", "•".dimmed(), report.edges.to_string().bright_yellow());
            println!(
                "  {} Components: {} ({} isolated nodes)",
                "•".dimmed(),
                report.components.to_string().bright_yellow(),
                report.isolated
            );
            println!(
                "  {} Power range: {} .. {}",
                "•".dimmed(),
                OrDash(report.min_power),
                OrDash(report.max_power)
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delivery_network::parse_graph;

    #[test]
    fn test_report() {
        let graph = parse_graph("6 3\n1 2 4\n2 3 9\n4 5 1\n").unwrap();
        let report = report(&graph);

        assert_eq!(
            report,
            InfoReport {
                nodes: 6,
                edges: 3,
                components: 3,
                isolated: 1,
                min_power: Some(Power(1)),
                max_power: Some(Power(9)),
            }
        );
    }

    #[test]
    fn test_report_without_edges() {
        let graph = parse_graph("2 0\n").unwrap();
        let report = report(&graph);
        assert_eq!(report.components, 2);
        assert_eq!(report.min_power, None);
    }

    #[test]
    fn test_json_shape() {
        let graph = parse_graph("2 1\n1 2 3\n").unwrap();
        let json = serde_json::to_value(report(&graph)).unwrap();
        assert_eq!(json["nodes"], 2);
        assert_eq!(json["max_power"], 3);
    }
}
