//! `delivery-network components` command - List connected components.

use std::path::Path;

use colored::Colorize;
use delivery_network::{connected_components, graph_from_file, Graph, NodeId};
use serde::Serialize;

use super::{print_json, OutputFormat};
use crate::error::CliResult;

/// Connected components, each sorted, largest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentsReport {
    /// Node lists, one per component.
    pub components: Vec<Vec<NodeId>>,
}

/// Compute the components of a loaded network.
pub fn report(graph: &Graph) -> ComponentsReport {
    let mut components = connected_components(graph);
    for component in &mut components {
        component.sort();
    }
    components.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    ComponentsReport { components }
}

/// Execute the `components` command.
pub fn execute(file: &Path, format: OutputFormat) -> CliResult<()> {
    let graph = graph_from_file(file)?;
    let report = report(&graph);

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            println!(
                "{} {} components",
                "→".bright_cyan(),
                report.components.len().to_string().bright_white()
            );
            for (i, component) in report.components.iter().enumerate() {
                let members: Vec<String> = component.iter().map(ToString::to_string).collect();
                println!(
                    "  {} #{} ({} nodes): {}",
                    "•".dimmed(),
                    i,
                    component.len(),
                    members.join(" ").bright_yellow()
                );
            }
            Ok(())
        }
    }
}
