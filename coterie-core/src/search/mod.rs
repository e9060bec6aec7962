//! Maximal clique enumeration.
//!
//! This module implements the Bron-Kerbosch search with greedy pivoting,
//! seeded once per vertex along a degeneracy ordering. Seeding bounds the
//! initial candidate set of every top-level call by the degeneracy, and
//! pivoting prunes the branching inside each call, so the total work is
//! proportional to the clique structure of the graph rather than to the
//! worst case over all graphs of its size.

mod pivot;
mod setops;

use tracing::instrument;

use crate::{
    census::{CliqueCensus, CliqueSink},
    degeneracy::DegeneracyOrdering,
    graph::Graph,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use self::pivot::select_pivot;

/// Errors returned while enumerating maximal cliques.
#[derive(Clone, Debug, thiserror::Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum EnumerationError {
    /// The supplied ordering does not cover the supplied graph.
    #[error("ordering covers {ordering_len} vertices, but the graph has {vertex_count}")]
    OrderingMismatch {
        /// The number of vertices in the ordering.
        ordering_len: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
}

impl EnumerationError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> EnumerationErrorCode {
        match self {
            Self::OrderingMismatch { .. } => EnumerationErrorCode::OrderingMismatch,
        }
    }
}

/// Machine-readable error codes for [`EnumerationError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EnumerationErrorCode {
    /// The supplied ordering does not cover the supplied graph.
    OrderingMismatch,
}

impl EnumerationErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrderingMismatch => "ORDERING_MISMATCH",
        }
    }
}

/// Enumerates every maximal clique of `graph`, reporting each exactly once
/// to `sink`.
///
/// The ordering must have been computed for this graph. Each vertex seeds
/// one top-level search over its later-ordered neighbours, so cliques are
/// discovered without repetition and without a global visited set.
///
/// # Errors
///
/// Returns [`EnumerationError::OrderingMismatch`] when `ordering` covers a
/// different number of vertices than `graph`.
///
/// # Examples
/// ```
/// use coterie_core::{CliqueCensus, GraphBuilder, degeneracy_ordering, enumerate_cliques};
///
/// let mut builder = GraphBuilder::new(4);
/// for (source, target) in [(0, 1), (1, 2), (2, 0), (2, 3)] {
///     builder.add_edge(source, target);
/// }
/// let (graph, _) = builder.build();
/// let ordering = degeneracy_ordering(&graph);
/// let mut census = CliqueCensus::new();
/// enumerate_cliques(&graph, &ordering, &mut census).expect("ordering matches the graph");
/// assert_eq!(census.total(), 2);
/// assert_eq!(census.largest(), 3);
/// ```
#[instrument(
    name = "core.enumerate",
    err,
    skip(graph, ordering, sink),
    fields(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        degeneracy = ordering.degeneracy(),
    ),
)]
pub fn enumerate_cliques<S: CliqueSink>(
    graph: &Graph,
    ordering: &DegeneracyOrdering,
    sink: &mut S,
) -> Result<(), EnumerationError> {
    validate(graph, ordering)?;
    for (rank, &vertex) in ordering.order().iter().enumerate() {
        let (candidates, excluded) = seed_frame(graph, ordering, rank, vertex);
        let mut clique = vec![vertex];
        expand(graph, &mut clique, candidates, excluded, sink);
    }
    Ok(())
}

/// Enumerates every maximal clique of `graph` across the Rayon thread pool,
/// returning the merged census.
///
/// Top-level seeds are independent, so they are distributed over worker
/// threads with one census accumulator per worker. The merged result is
/// identical to the census produced by [`enumerate_cliques`]; only
/// discovery order differs.
///
/// # Errors
///
/// Returns [`EnumerationError::OrderingMismatch`] when `ordering` covers a
/// different number of vertices than `graph`.
#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
#[instrument(
    name = "core.enumerate_parallel",
    err,
    skip(graph, ordering),
    fields(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        degeneracy = ordering.degeneracy(),
    ),
)]
pub fn parallel_enumerate_cliques(
    graph: &Graph,
    ordering: &DegeneracyOrdering,
) -> Result<CliqueCensus, EnumerationError> {
    validate(graph, ordering)?;
    let census = ordering
        .order()
        .par_iter()
        .enumerate()
        .fold(CliqueCensus::new, |mut census, (rank, &vertex)| {
            let (candidates, excluded) = seed_frame(graph, ordering, rank, vertex);
            let mut clique = vec![vertex];
            expand(graph, &mut clique, candidates, excluded, &mut census);
            census
        })
        .reduce(CliqueCensus::new, |mut left, right| {
            left.merge(&right);
            left
        });
    Ok(census)
}

fn validate(graph: &Graph, ordering: &DegeneracyOrdering) -> Result<(), EnumerationError> {
    if ordering.len() != graph.vertex_count() {
        return Err(EnumerationError::OrderingMismatch {
            ordering_len: ordering.len(),
            vertex_count: graph.vertex_count(),
        });
    }
    Ok(())
}

/// Splits the neighbours of a seed vertex into candidates (later in the
/// ordering) and excluded vertices (earlier in the ordering).
///
/// Both halves inherit the ascending sort of the adjacency row.
fn seed_frame(
    graph: &Graph,
    ordering: &DegeneracyOrdering,
    rank: usize,
    vertex: usize,
) -> (Vec<usize>, Vec<usize>) {
    let mut candidates = Vec::new();
    let mut excluded = Vec::new();
    for &neighbor in graph.neighbors(vertex) {
        match ordering.rank(neighbor) {
            Some(neighbor_rank) if neighbor_rank > rank => candidates.push(neighbor),
            Some(_) => excluded.push(neighbor),
            None => {}
        }
    }
    (candidates, excluded)
}

/// Recursive Bron-Kerbosch step over sorted candidate and exclusion sets.
///
/// `clique` holds the members chosen so far and is restored before the call
/// returns. The branch list is snapshotted up front; moving a branched
/// vertex from `candidates` to `excluded` afterwards is what prevents the
/// same clique from being reported through two different orderings of its
/// members.
fn expand<S: CliqueSink>(
    graph: &Graph,
    clique: &mut Vec<usize>,
    mut candidates: Vec<usize>,
    mut excluded: Vec<usize>,
    sink: &mut S,
) {
    if candidates.is_empty() && excluded.is_empty() {
        sink.record(clique);
        return;
    }

    let branches = match select_pivot(graph, &candidates, &excluded) {
        Some(pivot) => {
            let pivot_neighbors = graph.neighbors(pivot);
            candidates
                .iter()
                .copied()
                .filter(|&vertex| !setops::contains(pivot_neighbors, vertex))
                .collect()
        }
        None => candidates.clone(),
    };

    for vertex in branches {
        let neighbors = graph.neighbors(vertex);
        let next_candidates = setops::intersection(&candidates, neighbors);
        let next_excluded = setops::intersection(&excluded, neighbors);
        clique.push(vertex);
        expand(graph, clique, next_candidates, next_excluded, sink);
        clique.pop();
        setops::remove(&mut candidates, vertex);
        setops::insert(&mut excluded, vertex);
    }
}
