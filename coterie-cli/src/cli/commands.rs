//! Command implementations and argument parsing for the coterie CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use coterie_core::{
    CliqueCensus, EnumerationError, degeneracy_ordering, enumerate_cliques,
    parallel_enumerate_cliques,
};
use coterie_providers_edgelist::{EdgeListError, EdgeListSource};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "coterie", about = "Enumerate maximal cliques in a graph.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Enumerate every maximal clique in an edge-list file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a whitespace-delimited edge-list file.
    pub path: PathBuf,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,

    /// Split the clique search across worker threads.
    #[arg(long)]
    pub parallel: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an input source.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list ingestion failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// Clique enumeration failed.
    #[error(transparent)]
    Core(#[from] EnumerationError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the data source.
    pub data_source: String,
    /// Vertices in the loaded graph.
    pub vertices: usize,
    /// Distinct undirected edges in the loaded graph.
    pub edges: usize,
    /// Degeneracy of the loaded graph.
    pub degeneracy: usize,
    /// Aggregated clique counts produced by the search.
    pub census: CliqueCensus,
    /// Wall-clock time spent ordering vertices and enumerating cliques.
    pub elapsed: Duration,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or enumeration fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use coterie_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 3\n0 1\n1 2\n2 0\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         name: None,
///         parallel: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.census.total(), 1);
/// assert_eq!(summary.census.largest(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, parallel = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        name,
        parallel,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("parallel", field::display(parallel));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_edge_list_reader(&path)?;
    let source = EdgeListSource::try_from_reader(chosen_name, reader)?;
    report_load(&source);

    let graph = source.graph();
    let started = Instant::now();
    let ordering = degeneracy_ordering(graph);
    let census = if parallel {
        parallel_enumerate_cliques(graph, &ordering)?
    } else {
        let mut census = CliqueCensus::new();
        enumerate_cliques(graph, &ordering, &mut census)?;
        census
    };
    let elapsed = started.elapsed();

    info!(
        data_source = source.name(),
        cliques = census.total(),
        largest = census.largest(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source: source.name().to_owned(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        degeneracy: ordering.degeneracy(),
        census,
        elapsed,
    })
}

fn report_load(source: &EdgeListSource) {
    let report = source.report();
    info!(
        data_source = source.name(),
        vertices = report.declared_vertices(),
        accepted_edges = report.accepted_edges(),
        "edge list loaded"
    );
    let rejections = report.rejections();
    if rejections.total() > 0 || report.malformed_lines() > 0 {
        warn!(
            self_loops = rejections.self_loops(),
            duplicates = rejections.duplicates(),
            out_of_range = rejections.out_of_range(),
            malformed_lines = report.malformed_lines(),
            "rejected records were dropped"
        );
    }
}

#[instrument(name = "cli.open_edge_list", err, fields(path = field::Empty))]
pub(super) fn open_edge_list_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "edge_list".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// The per-size histogram follows the headline figures, one `size<TAB>count`
/// line per clique size from one to the largest observed.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use std::time::Duration;
/// # use coterie_cli::cli::{ExecutionSummary, render_summary};
/// # use coterie_core::{CliqueCensus, CliqueSink};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut census = CliqueCensus::new();
/// census.record(&[0, 1, 2]);
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     vertices: 3,
///     edges: 3,
///     degeneracy: 2,
///     census,
///     elapsed: Duration::from_millis(12),
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.contains("total maximal cliques: 1"));
/// assert!(text.ends_with("3\t1\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "vertices: {}", summary.vertices)?;
    writeln!(writer, "edges: {}", summary.edges)?;
    writeln!(writer, "degeneracy: {}", summary.degeneracy)?;
    writeln!(writer, "total maximal cliques: {}", summary.census.total())?;
    writeln!(writer, "largest clique size: {}", summary.census.largest())?;
    writeln!(writer, "elapsed: {} ms", summary.elapsed.as_millis())?;
    for (size, count) in summary.census.size_counts() {
        writeln!(writer, "{size}\t{count}")?;
    }
    Ok(())
}
