//! Immutable undirected simple graph storage.
//!
//! Graphs are assembled through [`GraphBuilder`], which rejects data-level
//! anomalies (self-loops, out-of-range endpoints, duplicate edges) without
//! failing the build, and are frozen into a compressed sparse row layout
//! whose adjacency rows are sorted ascending. The search relies on that
//! ordering for merge intersections and binary-search membership tests.

/// Tally of edges rejected while constructing a [`Graph`].
///
/// Rejections are recoverable by design: the offending edge is dropped and
/// counted, and construction continues.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EdgeRejections {
    self_loops: u64,
    out_of_range: u64,
    duplicates: u64,
}

impl EdgeRejections {
    /// Returns how many self-loop edges were dropped.
    #[must_use]
    #[rustfmt::skip]
    pub fn self_loops(&self) -> u64 { self.self_loops }

    /// Returns how many edges referenced a vertex outside `0..vertex_count`.
    #[must_use]
    #[rustfmt::skip]
    pub fn out_of_range(&self) -> u64 { self.out_of_range }

    /// Returns how many duplicate edges were dropped.
    #[must_use]
    #[rustfmt::skip]
    pub fn duplicates(&self) -> u64 { self.duplicates }

    /// Returns the total number of rejected edges.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.self_loops + self.out_of_range + self.duplicates
    }
}

/// Incrementally collects undirected edges for a fixed vertex set.
///
/// # Examples
/// ```
/// use coterie_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new(3);
/// builder.add_edge(0, 1);
/// builder.add_edge(1, 0);
/// builder.add_edge(1, 1);
/// builder.add_edge(2, 9);
/// let (graph, rejections) = builder.build();
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(rejections.duplicates(), 1);
/// assert_eq!(rejections.self_loops(), 1);
/// assert_eq!(rejections.out_of_range(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
    rejections: EdgeRejections,
}

impl GraphBuilder {
    /// Creates a builder for a graph over vertices `0..vertex_count`.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            rejections: EdgeRejections {
                self_loops: 0,
                out_of_range: 0,
                duplicates: 0,
            },
        }
    }

    /// Records the undirected edge `(source, target)`.
    ///
    /// Self-loops and edges referencing vertices outside `0..vertex_count`
    /// are dropped and tallied instead of being inserted. Duplicates are
    /// accepted here and collapsed during [`Self::build`].
    pub fn add_edge(&mut self, source: usize, target: usize) {
        if source == target {
            self.rejections.self_loops += 1;
            return;
        }
        if source >= self.vertex_count || target >= self.vertex_count {
            self.rejections.out_of_range += 1;
            return;
        }
        let (lo, hi) = if source <= target {
            (source, target)
        } else {
            (target, source)
        };
        self.edges.push((lo, hi));
    }

    /// Returns the number of vertices the builder was created with.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Freezes the collected edges into an immutable [`Graph`].
    ///
    /// Duplicate edges are collapsed here and counted in the returned
    /// [`EdgeRejections`].
    #[must_use]
    pub fn build(mut self) -> (Graph, EdgeRejections) {
        self.edges.sort_unstable();
        let before = self.edges.len();
        self.edges.dedup();
        self.rejections.duplicates += (before - self.edges.len()) as u64;

        let graph = Graph::from_canonical_edges(self.vertex_count, &self.edges);
        (graph, self.rejections)
    }
}

/// Immutable undirected simple graph in compressed sparse row form.
///
/// Adjacency is symmetric, contains no self-loops or duplicates, and each
/// row is sorted ascending by vertex id.
///
/// # Examples
/// ```
/// use coterie_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new(4);
/// builder.add_edge(0, 2);
/// builder.add_edge(0, 1);
/// builder.add_edge(2, 3);
/// let (graph, _) = builder.build();
/// assert_eq!(graph.neighbors(0), &[1, 2]);
/// assert_eq!(graph.degree(2), 2);
/// assert!(graph.contains_edge(3, 2));
/// assert!(!graph.contains_edge(1, 3));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    offsets: Vec<usize>,
    targets: Vec<usize>,
    edge_count: usize,
}

impl Graph {
    /// Builds the CSR layout from canonicalised, deduplicated edges.
    fn from_canonical_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut degrees = vec![0usize; vertex_count];
        for &(source, target) in edges {
            degrees[source] += 1;
            degrees[target] += 1;
        }

        let mut offsets = Vec::with_capacity(vertex_count + 1);
        let mut running = 0usize;
        offsets.push(0);
        for &degree in &degrees {
            running += degree;
            offsets.push(running);
        }

        let mut cursors: Vec<usize> = offsets.iter().copied().take(vertex_count).collect();
        let mut targets = vec![0usize; running];
        for &(source, target) in edges {
            targets[cursors[source]] = target;
            cursors[source] += 1;
            targets[cursors[target]] = source;
            cursors[target] += 1;
        }

        for vertex in 0..vertex_count {
            targets[offsets[vertex]..offsets[vertex + 1]].sort_unstable();
        }

        Self {
            offsets,
            targets,
            edge_count: edges.len(),
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Returns the number of undirected edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the neighbours of `vertex`, sorted ascending.
    ///
    /// Vertices outside `0..vertex_count` have no neighbours.
    #[must_use]
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        let Some(&start) = self.offsets.get(vertex) else {
            return &[];
        };
        let Some(&end) = self.offsets.get(vertex + 1) else {
            return &[];
        };
        self.targets.get(start..end).unwrap_or(&[])
    }

    /// Returns the degree of `vertex`.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).len()
    }

    /// Returns `true` when the undirected edge `(source, target)` exists.
    #[must_use]
    pub fn contains_edge(&self, source: usize, target: usize) -> bool {
        self.neighbors(source).binary_search(&target).is_ok()
    }
}
