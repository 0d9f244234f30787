//! Delivery network CLI - Query power-constrained routes in network files.
//!
//! # Commands
//!
//! - `delivery-network info <file>` - Summarize a network
//! - `delivery-network components <file>` - List connected components
//! - `delivery-network path <file> <src> <dest> --power <p>` - Route within a budget
//! - `delivery-network min-power <file> <src> <dest>` - Smallest sufficient power
//!
//! # Examples
//!
//! ```bash
//! # Can a truck with power 40 get from 1 to 17?
//! delivery-network path input/network.02.in 1 17 --power 40
//!
//! # Which truck power is needed, as JSON
//! delivery-network min-power input/network.02.in 1 17 --format json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use delivery_network::{NodeId, Power, PowerBound};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

use commands::{components, info, min_power, parse_bound, path, timeout, OutputFormat};

/// Delivery network CLI - power-constrained routing queries
#[derive(Parser)]
#[command(name = "delivery-network")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a network file
    Info {
        /// Network file (`n m` header, then `a b power [distance]` lines)
        file: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List connected components
    Components {
        /// Network file
        file: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Find a route usable with a given vehicle power
    Path {
        /// Network file
        file: PathBuf,

        /// Start node
        src: u32,

        /// End node
        dest: u32,

        /// Vehicle power
        #[arg(short, long, allow_negative_numbers = true)]
        power: i64,

        /// Abort the search after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Find the smallest vehicle power that connects two nodes
    MinPower {
        /// Network file
        file: PathBuf,

        /// Start node
        src: u32,

        /// End node
        dest: u32,

        /// Search range (component, incident)
        #[arg(short, long, default_value = "component", value_parser = parse_bound)]
        bound: PowerBound,

        /// Abort each probe after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Info { file, format } => info::execute(&file, format),

        Commands::Components { file, format } => components::execute(&file, format),

        Commands::Path {
            file,
            src,
            dest,
            power,
            timeout_ms,
            format,
        } => path::execute(
            &file,
            NodeId(src),
            NodeId(dest),
            Power(power),
            timeout(timeout_ms),
            format,
        ),

        Commands::MinPower {
            file,
            src,
            dest,
            bound,
            timeout_ms,
            format,
        } => min_power::execute(
            &file,
            NodeId(src),
            NodeId(dest),
            bound,
            timeout(timeout_ms),
            format,
        ),

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "delivery-network",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_min_power_args() {
        let cli = Cli::try_parse_from([
            "delivery-network",
            "min-power",
            "net.in",
            "1",
            "4",
            "--bound",
            "incident",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::MinPower {
                src,
                dest,
                bound,
                format,
                ..
            } => {
                assert_eq!((src, dest), (1, 4));
                assert_eq!(bound, PowerBound::IncidentToSource);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected min-power"),
        }
    }

    #[test]
    fn test_parse_negative_power() {
        let cli = Cli::try_parse_from(["delivery-network", "path", "net.in", "1", "2", "-p", "-3"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Path { power: -3, .. }));
    }
}
