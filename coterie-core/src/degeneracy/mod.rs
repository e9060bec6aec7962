//! Degeneracy ordering via bucket-queue peeling.
//!
//! The orderer repeatedly removes a vertex of minimum degree in the
//! remaining graph, recording the removal sequence and the largest degree
//! observed at removal time (the degeneracy). Buckets are indexed by degree
//! and entries go stale rather than being relocated, so each vertex and
//! edge is touched a constant number of times.

use crate::graph::Graph;

/// A degeneracy ordering of a graph together with its degeneracy.
///
/// The ordering is a permutation of the vertex ids. Seeding the clique
/// search along it bounds every candidate set by the degeneracy, which is
/// what keeps the outer loop cheap on sparse graphs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DegeneracyOrdering {
    order: Vec<usize>,
    positions: Vec<usize>,
    degeneracy: usize,
}

impl DegeneracyOrdering {
    /// Returns the vertices in peeling order.
    #[must_use]
    #[rustfmt::skip]
    pub fn order(&self) -> &[usize] { &self.order }

    /// Returns the position of `vertex` within the ordering.
    ///
    /// Vertices outside `0..len` have no position.
    #[must_use]
    pub fn rank(&self, vertex: usize) -> Option<usize> {
        self.positions.get(vertex).copied()
    }

    /// Returns the degeneracy of the ordered graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn degeneracy(&self) -> usize { self.degeneracy }

    /// Returns the number of ordered vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.order.len() }

    /// Returns `true` when the ordering covers no vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.order.is_empty() }
}

/// Computes a degeneracy ordering of `graph` in `O(V + E)` time.
///
/// Ties between vertices of equal minimum degree are broken by taking the
/// most recently bucketed vertex, so the result is deterministic for a
/// given graph.
///
/// # Examples
/// ```
/// use coterie_core::{GraphBuilder, degeneracy_ordering};
///
/// let mut builder = GraphBuilder::new(4);
/// builder.add_edge(0, 1);
/// builder.add_edge(1, 2);
/// builder.add_edge(2, 0);
/// builder.add_edge(2, 3);
/// let (graph, _) = builder.build();
/// let ordering = degeneracy_ordering(&graph);
/// assert_eq!(ordering.degeneracy(), 2);
/// assert_eq!(ordering.len(), 4);
/// ```
#[must_use]
pub fn degeneracy_ordering(graph: &Graph) -> DegeneracyOrdering {
    let vertex_count = graph.vertex_count();
    let mut degrees: Vec<usize> = (0..vertex_count).map(|v| graph.degree(v)).collect();
    let max_degree = degrees.iter().copied().max().unwrap_or(0);

    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); max_degree + 1];
    for (vertex, &degree) in degrees.iter().enumerate() {
        buckets[degree].push(vertex);
    }

    let mut removed = vec![false; vertex_count];
    let mut positions = vec![0usize; vertex_count];
    let mut order = Vec::with_capacity(vertex_count);
    let mut degeneracy = 0usize;
    let mut floor = 0usize;

    while let Some((vertex, degree)) = pop_lowest(&mut buckets, &mut floor) {
        if removed[vertex] || degrees[vertex] != degree {
            continue;
        }
        removed[vertex] = true;
        positions[vertex] = order.len();
        order.push(vertex);
        degeneracy = degeneracy.max(degree);
        for &neighbor in graph.neighbors(vertex) {
            if removed[neighbor] {
                continue;
            }
            degrees[neighbor] -= 1;
            buckets[degrees[neighbor]].push(neighbor);
        }
        // A removal lowers each live degree by at most one.
        floor = floor.saturating_sub(1);
    }

    DegeneracyOrdering {
        order,
        positions,
        degeneracy,
    }
}

/// Pops a vertex from the lowest non-empty bucket at or above `floor`.
fn pop_lowest(buckets: &mut [Vec<usize>], floor: &mut usize) -> Option<(usize, usize)> {
    while let Some(bucket) = buckets.get_mut(*floor) {
        if let Some(vertex) = bucket.pop() {
            return Some((vertex, *floor));
        }
        *floor += 1;
    }
    None
}
