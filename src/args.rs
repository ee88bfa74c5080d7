use clap::{Parser, Subcommand};

use crate::files::STDIO;

const CMD_NAME: &str = "iddfs";
const DEFAULT_NUM_NODES: i64 = 8;
const DEFAULT_MAX_DEPTH: i64 = 3;

/// Stores our command-line args format.
#[derive(Parser, Debug)]
#[command(name = CMD_NAME, version, about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Write JSON output to FILE instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    #[arg(env = "IDDFS_OUTPUT")]
    pub output: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Print additional debugging info (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a random connected graph
    Generate {
        /// Number of nodes (clamped to 2..=50)
        #[arg(short, long, default_value_t = DEFAULT_NUM_NODES, allow_negative_numbers = true)]
        nodes: i64,

        /// Seed for a reproducible graph
        #[arg(short, long, env = "IDDFS_SEED")]
        seed: Option<u64>,
    },

    /// Run iterative deepening search and print its trace
    Trace {
        /// Graph JSON file ('-' for stdin)
        #[arg(short = 'f', long, value_name = "FILE", conflicts_with = "preset")]
        graph: Option<String>,

        /// Built-in graph (see `presets`)
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Id of the start node
        #[arg(short, long, value_name = "ID")]
        start: String,

        /// Id of the goal node
        #[arg(short, long, value_name = "ID")]
        goal: String,

        /// Largest depth limit to try
        #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH, allow_negative_numbers = true)]
        max_depth: i64,

        /// Print a summary of the search to stderr
        #[arg(long)]
        summary: bool,
    },

    /// Answer a JSON request ({"numNodes"} or {"graph", "startNode", "goalNode", "maxDepth"})
    Request {
        /// Request file ('-' for stdin)
        #[arg(value_name = "FILE", default_value = STDIO)]
        file: String,

        /// Seed for graphs generated in answer to {"numNodes"} requests
        #[arg(short, long, env = "IDDFS_SEED")]
        seed: Option<u64>,
    },

    /// List built-in graphs
    Presets,
}
