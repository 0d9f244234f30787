//! CLI command implementations.

pub mod components;
pub mod info;
pub mod min_power;
pub mod path;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use delivery_network::{NodeId, PowerBound};
use serde::Serialize;

use crate::error::CliResult;

/// Query output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON format for programmatic consumption.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!(
                "Unknown format '{}'. Valid options: text, json",
                s
            )),
        }
    }
}

/// Parse a `--bound` value.
pub fn parse_bound(bound: &str) -> Result<PowerBound, String> {
    match bound.to_lowercase().as_str() {
        "component" => Ok(PowerBound::Component),
        "incident" | "incident-to-source" => Ok(PowerBound::IncidentToSource),
        _ => Err(format!(
            "Unknown bound '{}'. Valid options: component, incident",
            bound
        )),
    }
}

/// Convert an optional `--timeout-ms` value.
pub fn timeout(timeout_ms: Option<u64>) -> Option<Duration> {
    timeout_ms.map(Duration::from_millis)
}

/// Print a report as pretty JSON on stdout.
pub fn print_json<T: Serialize>(report: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Render a path as `1 -> 2 -> 3`.
pub fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Display helper for optional values.
pub struct OrDash<T>(pub Option<T>);

impl<T: fmt::Display> fmt::Display for OrDash<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound("component"), Ok(PowerBound::Component));
        assert_eq!(parse_bound("incident"), Ok(PowerBound::IncidentToSource));
        assert!(parse_bound("global").is_err());
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[NodeId(1), NodeId(4), NodeId(2)]), "1 -> 4 -> 2");
        assert_eq!(format_path(&[NodeId(3)]), "3");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(OrDash(Some(5)).to_string(), "5");
        assert_eq!(OrDash::<i32>(None).to_string(), "-");
    }

    #[test]
    fn test_timeout() {
        assert_eq!(timeout(Some(250)), Some(Duration::from_millis(250)));
        assert_eq!(timeout(None), None);
    }
}
