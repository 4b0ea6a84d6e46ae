//! CLI entry point for the `ugraph` command-line tool.

use std::io::{self, Write};
use std::process;

use clap::{Args, Parser, Subcommand};

use undirected_graph::cli::{commands, EdgeSpec, GraphInput};
use undirected_graph::{GraphError, GraphResult, TraversalOrder};

#[derive(Parser)]
#[command(
    name = "ugraph",
    about = "ugraph — traverse small undirected graphs given on the command line"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Graph description shared by every subcommand.
#[derive(Args)]
struct GraphArgs {
    /// Edge as <label>-<label>; repeat for more edges
    #[arg(long = "edge")]
    edges: Vec<String>,
    /// Node label with no edges required; repeat for more nodes
    #[arg(long = "node")]
    nodes: Vec<String>,
}

impl GraphArgs {
    fn into_input(self) -> GraphResult<GraphInput> {
        let edges = self
            .edges
            .iter()
            .map(|s| s.parse::<EdgeSpec>())
            .collect::<GraphResult<Vec<_>>>()?;
        Ok(GraphInput {
            edges,
            nodes: self.nodes,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Depth-first traversal from a node
    Dfs {
        /// Starting node label
        start: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Breadth-first traversal from a node
    Bfs {
        /// Starting node label
        start: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Traversal from a node in the given order
    Traverse {
        /// Starting node label
        start: String,
        /// Order: depth_first or breadth_first
        #[arg(long, default_value = "breadth_first")]
        order: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Layer-counted distance between two nodes
    Distance {
        /// Starting node label
        start: String,
        /// Target node label
        end: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Node and edge counts with each node's neighbors
    Info {
        #[command(flatten)]
        graph: GraphArgs,
    },
}

fn run(command: Commands, json: bool) -> GraphResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Dfs { start, graph } => commands::cmd_traverse(
            &mut out,
            &graph.into_input()?,
            &start,
            TraversalOrder::DepthFirst,
            json,
        ),
        Commands::Bfs { start, graph } => commands::cmd_traverse(
            &mut out,
            &graph.into_input()?,
            &start,
            TraversalOrder::BreadthFirst,
            json,
        ),
        Commands::Traverse {
            start,
            order,
            graph,
        } => {
            let order: TraversalOrder = order.parse()?;
            commands::cmd_traverse(&mut out, &graph.into_input()?, &start, order, json)
        }
        Commands::Distance { start, end, graph } => {
            commands::cmd_distance(&mut out, &graph.into_input()?, &start, &end, json)
        }
        Commands::Info { graph } => commands::cmd_info(&mut out, &graph.into_input()?, json),
    }?;

    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    if let Err(e) = run(cli.command, json) {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::InvalidEdgeSpec(_) | GraphError::InvalidTraversalOrder(_) => 3,
            GraphError::NodeNotFound(_) | GraphError::UnknownLabel(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
