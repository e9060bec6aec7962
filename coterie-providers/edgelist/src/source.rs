//! Edge-list file ingestion producing a [`Graph`] and a load report.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use coterie_core::{EdgeRejections, Graph, GraphBuilder};

use crate::errors::EdgeListError;
use crate::parse::{self, Header, IdMapper};

/// Counters describing how an edge-list file was interpreted.
///
/// Declared figures restate the header; they are informational and never
/// enforced against the data section.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LoadReport {
    declared_vertices: usize,
    declared_edges: u64,
    accepted_edges: usize,
    distinct_ids: usize,
    rejections: EdgeRejections,
    malformed_lines: u64,
}

impl LoadReport {
    #[must_use]
    #[rustfmt::skip]
    pub const fn declared_vertices(&self) -> usize { self.declared_vertices }

    #[must_use]
    #[rustfmt::skip]
    pub const fn declared_edges(&self) -> u64 { self.declared_edges }

    /// Distinct undirected edges retained after deduplication.
    #[must_use]
    #[rustfmt::skip]
    pub const fn accepted_edges(&self) -> usize { self.accepted_edges }

    /// Distinct external identifiers seen in the data section.
    #[must_use]
    #[rustfmt::skip]
    pub const fn distinct_ids(&self) -> usize { self.distinct_ids }

    #[must_use]
    #[rustfmt::skip]
    pub const fn rejections(&self) -> EdgeRejections { self.rejections }

    /// Data-section lines that parsed as neither an edge nor metadata.
    #[must_use]
    #[rustfmt::skip]
    pub const fn malformed_lines(&self) -> u64 { self.malformed_lines }
}

/// Graph loaded from a whitespace-delimited edge list.
///
/// The file must open with a header declaring the vertex and edge counts,
/// either as a bare `<n> <e>` line or as a `# Nodes: <n> Edges: <e>` comment.
/// External identifiers are remapped to dense internal ids in first-seen
/// order; identifiers beyond the declared vertex count, self-loops, and
/// duplicate edges are dropped and tallied in the [`LoadReport`].
#[derive(Debug)]
pub struct EdgeListSource {
    name: String,
    graph: Graph,
    report: LoadReport,
}

impl EdgeListSource {
    /// Loads an edge list from a file on disk.
    ///
    /// # Errors
    /// Returns `EdgeListError::Io` if the file cannot be opened or read, and
    /// otherwise fails as [`try_from_reader`](Self::try_from_reader) does.
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, EdgeListError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Loads an edge list from any buffered reader.
    ///
    /// # Errors
    /// Returns `EdgeListError::MissingHeader` if no header line is found,
    /// `EdgeListError::InvalidVertexCount` if the declared vertex count is
    /// not positive, and `EdgeListError::Io` on read failures.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use coterie_providers_edgelist::EdgeListSource;
    ///
    /// let data = "3 3\n0 1\n1 2\n2 0\n";
    /// let source = EdgeListSource::try_from_reader("demo", Cursor::new(data))
    ///     .expect("well-formed edge list");
    /// assert_eq!(source.graph().vertex_count(), 3);
    /// assert_eq!(source.report().accepted_edges(), 3);
    /// ```
    pub fn try_from_reader(
        name: impl Into<String>,
        reader: impl BufRead,
    ) -> Result<Self, EdgeListError> {
        let mut lines = reader.lines();
        let scan = read_header(&mut lines)?;
        let vertex_count = validate_vertex_count(scan.header.vertex_count)?;
        let mut ingestion = Ingestion::new(vertex_count, scan.header, scan.echo_guard);
        if let Some(line) = &scan.first_data_line {
            ingestion.consume(line);
        }
        for line in lines {
            ingestion.consume(&line?);
        }
        let (graph, report) = ingestion.finish();
        Ok(Self {
            name: name.into(),
            graph,
            report,
        })
    }

    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &Graph { &self.graph }

    #[must_use]
    #[rustfmt::skip]
    pub const fn report(&self) -> &LoadReport { &self.report }
}

struct HeaderScan {
    header: Header,
    first_data_line: Option<String>,
    echo_guard: bool,
}

/// Scans for the header, consuming lines up to and including it.
///
/// A comment header leaves the first data line unconsumed, so it is handed
/// back for ingestion. Files carrying both header forms repeat the counts as
/// the first data line; the echo guard tells ingestion to drop that echo.
fn read_header(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> Result<HeaderScan, EdgeListError> {
    let mut comment_header = None;
    for line in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('#') {
            if comment_header.is_none() {
                comment_header = parse::parse_comment_header(trimmed);
            }
            continue;
        }
        if let Some(header) = comment_header {
            return Ok(HeaderScan {
                header,
                first_data_line: Some(trimmed.to_owned()),
                echo_guard: true,
            });
        }
        return parse::parse_plain_header(trimmed)
            .map(|header| HeaderScan {
                header,
                first_data_line: None,
                echo_guard: false,
            })
            .ok_or(EdgeListError::MissingHeader);
    }
    comment_header
        .map(|header| HeaderScan {
            header,
            first_data_line: None,
            echo_guard: false,
        })
        .ok_or(EdgeListError::MissingHeader)
}

fn validate_vertex_count(declared: i64) -> Result<usize, EdgeListError> {
    if declared <= 0 {
        return Err(EdgeListError::InvalidVertexCount { declared });
    }
    usize::try_from(declared).map_err(|_| EdgeListError::InvalidVertexCount { declared })
}

struct Ingestion {
    builder: GraphBuilder,
    mapper: IdMapper,
    header: Header,
    malformed_lines: u64,
    echo_guard: bool,
}

impl Ingestion {
    fn new(vertex_count: usize, header: Header, echo_guard: bool) -> Self {
        Self {
            builder: GraphBuilder::new(vertex_count),
            mapper: IdMapper::new(),
            header,
            malformed_lines: 0,
            echo_guard,
        }
    }

    fn consume(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || parse::is_metadata_line(trimmed) {
            return;
        }
        let parsed = parse::parse_edge(trimmed);
        if self.echo_guard {
            self.echo_guard = false;
            if parsed.is_some_and(|(first, _)| first == self.header.vertex_count) {
                return;
            }
        }
        let Some((source, target)) = parsed else {
            self.malformed_lines += 1;
            return;
        };
        let source = self.mapper.map(source);
        let target = self.mapper.map(target);
        self.builder.add_edge(source, target);
    }

    fn finish(self) -> (Graph, LoadReport) {
        let declared_vertices = self.builder.vertex_count();
        let distinct_ids = self.mapper.distinct_ids();
        let (graph, rejections) = self.builder.build();
        let report = LoadReport {
            declared_vertices,
            declared_edges: u64::try_from(self.header.declared_edges).unwrap_or(0),
            accepted_edges: graph.edge_count(),
            distinct_ids,
            rejections,
            malformed_lines: self.malformed_lines,
        };
        (graph, report)
    }
}
