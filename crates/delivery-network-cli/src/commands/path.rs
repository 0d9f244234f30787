//! `delivery-network path` command - Find a path within a power budget.

use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use delivery_network::{
    graph_from_file, search_path, Graph, NoPathReason, NodeId, PathOutcome, Power, SearchConfig,
};
use serde::Serialize;
use tracing::debug;

use super::{format_path, print_json, OutputFormat};
use crate::error::CliResult;

/// Outcome of a budgeted path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// Start node.
    pub src: NodeId,
    /// End node.
    pub dest: NodeId,
    /// Power budget of the vehicle.
    pub power: Power,
    /// Witness path, if one exists.
    pub path: Option<Vec<NodeId>>,
    /// Why no path exists.
    pub reason: Option<NoPathReason>,
}

/// Run the query against a loaded network.
pub fn report(
    graph: &Graph,
    src: NodeId,
    dest: NodeId,
    power: Power,
    timeout: Option<Duration>,
) -> CliResult<PathReport> {
    let mut config = SearchConfig::new();
    if let Some(timeout) = timeout {
        config = config.with_timeout(timeout);
    }

    let (path, reason) = match search_path(graph, &src, &dest, power, &config)? {
        PathOutcome::Found(path) => (Some(path), None),
        PathOutcome::NotFound(reason) => (None, Some(reason)),
    };

    Ok(PathReport {
        src,
        dest,
        power,
        path,
        reason,
    })
}

/// Execute the `path` command.
pub fn execute(
    file: &Path,
    src: NodeId,
    dest: NodeId,
    power: Power,
    timeout: Option<Duration>,
    format: OutputFormat,
) -> CliResult<()> {
    let graph = graph_from_file(file)?;
    debug!("Searching {} -> {} with power {}", src, dest, power);
    let report = report(&graph, src, dest, power, timeout)?;

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            print_text(&report);
            Ok(())
        }
    }
}

fn print_text(report: &PathReport) {
    println!(
        "{} Route {} -> {} with power {}",
        "→".bright_cyan(),
        report.src.to_string().bright_white(),
        report.dest.to_string().bright_white(),
        report.power.to_string().bright_white()
    );
    match (&report.path, report.reason) {
        (Some(path), _) => println!(
            "  {} {} ({} hops)",
            "✓".green(),
            format_path(path).bright_yellow(),
            path.len() - 1
        ),
        (None, Some(NoPathReason::Disconnected)) => println!(
            "  {} No path: nodes are in different components",
            "✗".red()
        ),
        (None, _) => println!(
            "  {} No path: a vehicle needs more power than {}",
            "✗".red(),
            report.power
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delivery_network::parse_graph;

    fn network() -> Graph {
        parse_graph("5 4\n1 2 2\n2 3 3\n3 4 1\n1 4 5\n").unwrap()
    }

    #[test]
    fn test_found() {
        let report = report(&network(), NodeId(1), NodeId(3), Power(3), None).unwrap();
        assert_eq!(report.path, Some(vec![NodeId(1), NodeId(2), NodeId(3)]));
        assert_eq!(report.reason, None);
    }

    #[test]
    fn test_reasons() {
        let weak = report(&network(), NodeId(1), NodeId(3), Power(2), None).unwrap();
        assert_eq!(weak.reason, Some(NoPathReason::InsufficientPower));

        let apart = report(&network(), NodeId(1), NodeId(5), Power(99), None).unwrap();
        assert_eq!(apart.reason, Some(NoPathReason::Disconnected));

        let json = serde_json::to_value(&apart).unwrap();
        assert_eq!(json["reason"], "disconnected");
        assert!(json["path"].is_null());
    }

    #[test]
    fn test_unknown_node_is_error() {
        assert!(report(&network(), NodeId(1), NodeId(9), Power(1), None).is_err());
    }
}
