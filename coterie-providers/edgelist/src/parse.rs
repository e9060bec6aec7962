//! Line-level parsing helpers for edge-list headers and records.
use std::collections::HashMap;

/// Declared graph dimensions taken from a file header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Header {
    pub(crate) vertex_count: i64,
    pub(crate) declared_edges: i64,
}

/// Parses a bare `<n> <e>` header line. Trailing tokens are ignored.
pub(crate) fn parse_plain_header(line: &str) -> Option<Header> {
    let (vertex_count, declared_edges) = parse_pair(line)?;
    Some(Header {
        vertex_count,
        declared_edges,
    })
}

/// Parses a `# Nodes: <n> Edges: <e>` comment header. Both labels must be
/// present with a numeric token immediately after each.
pub(crate) fn parse_comment_header(line: &str) -> Option<Header> {
    let vertex_count = value_after_label(line, "Nodes:")?;
    let declared_edges = value_after_label(line, "Edges:")?;
    Some(Header {
        vertex_count,
        declared_edges,
    })
}

fn value_after_label(line: &str, label: &str) -> Option<i64> {
    let mut tokens = line.split_whitespace().skip_while(|&token| token != label);
    tokens.next()?;
    tokens.next()?.parse().ok()
}

/// Reports whether a data-phase line echoes header metadata, such as the
/// column banner `# FromNodeId ToNodeId` exported without its comment marker.
pub(crate) fn is_metadata_line(line: &str) -> bool {
    line.contains("Nodes:") || line.contains("Edges:") || line.contains("FromNodeId")
}

/// Parses the first two whitespace-separated integers on a line. Trailing
/// tokens are ignored.
pub(crate) fn parse_edge(line: &str) -> Option<(i64, i64)> {
    parse_pair(line)
}

fn parse_pair(line: &str) -> Option<(i64, i64)> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?.parse().ok()?;
    let second = tokens.next()?.parse().ok()?;
    Some((first, second))
}

/// Maps arbitrary external vertex identifiers to dense internal ids in
/// first-seen order. Identifiers beyond the declared vertex count still
/// receive slots so the builder can reject the edges that carry them.
#[derive(Debug, Default)]
pub(crate) struct IdMapper {
    assignments: HashMap<i64, usize>,
}

impl IdMapper {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn map(&mut self, external: i64) -> usize {
        let next = self.assignments.len();
        *self.assignments.entry(external).or_insert(next)
    }

    #[rustfmt::skip]
    pub(crate) fn distinct_ids(&self) -> usize { self.assignments.len() }
}
