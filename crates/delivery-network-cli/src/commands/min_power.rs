//! `delivery-network min-power` command - Find the smallest sufficient power.

use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use delivery_network::{
    graph_from_file, min_power_with_config, Graph, MinPowerConfig, NodeId, Power, PowerBound,
};
use serde::Serialize;
use tracing::debug;

use super::{format_path, print_json, OutputFormat};
use crate::error::CliResult;

/// Outcome of a minimum power query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinPowerReport {
    /// Start node.
    pub src: NodeId,
    /// End node.
    pub dest: NodeId,
    /// Search range policy used.
    pub bound: PowerBound,
    /// Smallest sufficient power, if the nodes can be joined.
    pub power: Option<Power>,
    /// Witness path for that power.
    pub path: Option<Vec<NodeId>>,
}

/// Run the query against a loaded network.
pub fn report(
    graph: &Graph,
    src: NodeId,
    dest: NodeId,
    bound: PowerBound,
    timeout: Option<Duration>,
) -> CliResult<MinPowerReport> {
    let mut config = MinPowerConfig::new().with_bound(bound);
    if let Some(timeout) = timeout {
        config = config.with_timeout(timeout);
    }

    let route = min_power_with_config(graph, &src, &dest, &config)?;
    let (path, power) = match route {
        Some(route) => {
            let (path, power) = route.into_parts();
            (Some(path), Some(power))
        }
        None => (None, None),
    };

    Ok(MinPowerReport {
        src,
        dest,
        bound,
        power,
        path,
    })
}

/// Execute the `min-power` command.
pub fn execute(
    file: &Path,
    src: NodeId,
    dest: NodeId,
    bound: PowerBound,
    timeout: Option<Duration>,
    format: OutputFormat,
) -> CliResult<()> {
    let graph = graph_from_file(file)?;
    debug!("Minimizing power {} -> {} ({:?} bound)", src, dest, bound);
    let report = report(&graph, src, dest, bound, timeout)?;

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            println!(
                "{} Minimum power {} -> {}",
                "→".bright_cyan(),
                report.src.to_string().bright_white(),
                report.dest.to_string().bright_white()
            );
            match (report.power, &report.path) {
                (Some(power), Some(path)) => {
                    println!(
                        "  {} Power: {}",
                        "•".dimmed(),
                        power.to_string().bright_yellow()
                    );
                    println!("  {} Path: {}", "•".dimmed(), format_path(path));
                }
                _ => println!("  {} No vehicle can make this trip", "✗".red()),
            }
            Ok(())
        }
    }
}
