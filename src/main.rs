//! Allocflow CLI - chart-data preparation for allocation dashboards

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::io::Read;

use allocflow::error::{AllocflowError, FixSuggestion};
use allocflow::{min_positive_magnitude, Scale, ScaleMode};
use allocflow::{FlowGraph, FlowTree};

#[derive(Parser)]
#[command(name = "allocflow")]
#[command(about = "Allocflow - chart-data preparation for allocation dashboards")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten an allocation tree into Sankey nodes and links
    Graph {
        /// Path to a FlowTree JSON file ('-' for stdin)
        file: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Resolve the axis scale for a magnitude series
    Scale {
        /// Scale mode (linear, log)
        mode: String,

        /// Path to a JSON array of numbers ('-' for stdin)
        file: String,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    // Logs go to stderr; stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Graph { file, pretty } => run_graph(&file, pretty),
        Commands::Scale { mode, file, pretty } => run_scale(&mode, &file, pretty),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn run_graph(file: &str, pretty: bool) -> Result<(), AllocflowError> {
    let raw = read_input(file)?;
    let tree: FlowTree = serde_json::from_str(&raw)?;
    let graph = FlowGraph::from_tree(&tree);
    print_json(&graph, pretty)
}

fn run_scale(mode: &str, file: &str, pretty: bool) -> Result<(), AllocflowError> {
    let raw = read_input(file)?;
    let series: Vec<f64> = serde_json::from_str(&raw)?;

    let mode = ScaleMode::parse(mode).ok_or_else(|| AllocflowError::UnknownScaleMode {
        mode: mode.to_string(),
    })?;
    let scale = match mode {
        ScaleMode::Linear => Scale::Linear,
        ScaleMode::Log => {
            let threshold = min_positive_magnitude(series.iter().copied())
                .ok_or(AllocflowError::EmptySeries)?;
            Scale::sym_log(threshold)
        }
    };

    let values: Vec<f64> = series.iter().map(|&v| scale.apply(v)).collect();
    let report = serde_json::json!({
        "scale": scale,
        "values": values,
    });
    print_json(&report, pretty)
}

fn read_input(path: &str) -> Result<String, AllocflowError> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<(), AllocflowError> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
