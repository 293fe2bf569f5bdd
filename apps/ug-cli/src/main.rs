use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use ug_graph::{Direction, Graph, GraphError, validate};
use ug_project::{Format, ProjectError};

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("Graph is inconsistent: {0}")]
    Inconsistent(#[from] GraphError),
}

#[derive(Parser)]
#[command(name = "ug-cli")]
#[command(about = "umlgraph CLI - inspect persisted diagram graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check key and adjacency consistency of a graph file
    Validate {
        /// Path to the graph file (.json, .yaml, .yml)
        graph_path: PathBuf,
        /// Override the format implied by the extension
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// List nodes with their adjacency, and links with their resolution state
    Show {
        /// Path to the graph file (.json, .yaml, .yml)
        graph_path: PathBuf,
        /// Override the format implied by the extension
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// List links whose source or target node is not registered
    Orphans {
        /// Path to the graph file (.json, .yaml, .yml)
        graph_path: PathBuf,
        /// Override the format implied by the extension
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::Yaml => Format::Yaml,
        }
    }
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { graph_path, format } => cmd_validate(&graph_path, format),
        Commands::Show { graph_path, format } => cmd_show(&graph_path, format),
        Commands::Orphans { graph_path, format } => cmd_orphans(&graph_path, format),
    }
}

fn load_graph(graph_path: &Path, format: Option<FormatArg>) -> CliResult<Graph> {
    let graph = match format {
        Some(format) => ug_project::load_as(graph_path, format.into())?,
        None => ug_project::load(graph_path)?,
    };
    info!(
        nodes = graph.node_count(),
        links = graph.link_count(),
        "loaded {}",
        graph_path.display()
    );
    Ok(graph)
}

fn cmd_validate(graph_path: &Path, format: Option<FormatArg>) -> CliResult<()> {
    println!("Validating graph: {}", graph_path.display());
    let graph = load_graph(graph_path, format)?;
    validate::check(&graph)?;

    let orphans = graph.orphaned_links().count();
    println!(
        "✓ Graph is valid ({} nodes, {} links, {} orphaned)",
        graph.node_count(),
        graph.link_count(),
        orphans
    );
    Ok(())
}

fn cmd_show(graph_path: &Path, format: Option<FormatArg>) -> CliResult<()> {
    let graph = load_graph(graph_path, format)?;

    if graph.node_count() == 0 {
        println!("No nodes in graph");
    } else {
        println!("Nodes:");
        for node in graph.nodes() {
            println!(
                "  {}  in: [{}]  out: [{}]",
                node.id(),
                join(node.links(Direction::Incoming)),
                join(node.links(Direction::Outgoing))
            );
        }
    }

    if graph.link_count() == 0 {
        println!("No links in graph");
    } else {
        println!("Links:");
        for link in graph.links() {
            let state = if link.is_resolved(&graph) {
                ""
            } else {
                "  (orphaned)"
            };
            println!(
                "  {} -> {}{}",
                link.source_node_id(),
                link.target_node_id(),
                state
            );
        }
    }
    Ok(())
}

fn cmd_orphans(graph_path: &Path, format: Option<FormatArg>) -> CliResult<()> {
    let graph = load_graph(graph_path, format)?;
    let orphans: Vec<_> = graph.orphaned_links().collect();

    if orphans.is_empty() {
        println!("No orphaned links");
        return Ok(());
    }

    println!("Orphaned links:");
    for link in orphans {
        let mut missing = Vec::new();
        if link.source(&graph).is_none() {
            missing.push(format!("source {}", link.source_node_id()));
        }
        if link.target(&graph).is_none() {
            missing.push(format!("target {}", link.target_node_id()));
        }
        println!("  {}  missing {}", link.id(), missing.join(", "));
    }
    Ok(())
}

fn join(ids: &[ug_core::NodeId]) -> String {
    ids.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
