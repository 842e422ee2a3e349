//! dsep CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "dsep")]
#[command(about = "d-separation analysis of directed graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Engine config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directed edge FROM:TO, repeatable (defaults to the burglary example graph)
    #[arg(short, long = "edge", value_parser = parse_edge)]
    edges: Vec<(String, String)>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every query on the example graph
    Example,
    /// List forks and colliders
    Motifs,
    /// List every undirected path between two nodes
    Paths {
        from: String,
        to: String,
    },
    /// Decide whether two node sets are independent given a third
    Check {
        /// First node set, comma separated
        #[arg(short = 'x', long = "x", value_delimiter = ',', required = true)]
        xs: Vec<String>,

        /// Second node set, comma separated
        #[arg(short = 'y', long = "y", value_delimiter = ',', required = true)]
        ys: Vec<String>,

        /// Conditioning set, comma separated
        #[arg(short = 'z', long, value_delimiter = ',')]
        given: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show version
    Version,
}

fn parse_edge(raw: &str) -> Result<(String, String), String> {
    match raw.split_once(':') {
        Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => {
            Ok((from.trim().to_string(), to.trim().to_string()))
        }
        _ => Err(format!("expected FROM:TO, got `{raw}`")),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "dsep={log_level},dsep_core={log_level},dsep_engine={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let engine = commands::load_engine(cli.config.as_deref())?;
    let graph = commands::build_graph(&cli.edges);

    match cli.command {
        Commands::Example => commands::example(&engine),
        Commands::Motifs => commands::motifs(&graph),
        Commands::Paths { from, to } => commands::paths(&graph, &engine, &from, &to),
        Commands::Check {
            xs,
            ys,
            given,
            json,
        } => commands::check(&graph, &engine, &xs, &ys, &given, json),
        Commands::Version => {
            println!("dsep v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
