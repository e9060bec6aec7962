//! Command-line interface orchestration for the coterie clique miner.
//!
//! The CLI offers a single `run` command that loads a whitespace-delimited
//! edge list and enumerates every maximal clique in the resulting graph.

mod commands;

pub use commands::{Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli};
