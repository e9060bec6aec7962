//! Type definitions for clique-search property-based tests.
//!
//! Provides the fixture, configuration, and topology types used by the
//! graph generation strategies and property functions.

/// Topology class for generated graphs.
///
/// Controls the shape of generated inputs, producing graphs that stress
/// different aspects of the pivoted search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphTopology {
    /// Sparse random graph with low edge probability.
    Sparse,
    /// Dense random graph approaching a complete graph, stressing the
    /// pivot pruning.
    Dense,
    /// Random bipartite graph, so every maximal clique is an edge or an
    /// isolated vertex.
    TriangleFree,
    /// Disjoint planted cliques plus a sprinkling of noise edges.
    Planted,
    /// Several components with no cross-component edges.
    Disconnected,
}

/// Fixture for clique-search property tests.
///
/// Captures the vertex count, the raw generated edge list (which may
/// contain injected anomalies), and the topology used during generation,
/// providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct CliqueFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Raw edge list, including any injected anomalies.
    pub edges: Vec<(usize, usize)>,
    /// Topology class used during generation.
    pub topology: GraphTopology,
}

/// Configuration for the parallel equivalence property.
///
/// Controls how many times the parallel enumeration is re-executed on the
/// same input to detect scheduling-induced divergence.
#[cfg(feature = "parallel")]
pub(super) struct ConcurrencyConfig {
    /// Number of times to repeat the parallel enumeration per input.
    pub repetitions: usize,
}

#[cfg(feature = "parallel")]
impl ConcurrencyConfig {
    /// Loads the configuration from environment variables, falling back to
    /// sensible defaults.
    ///
    /// The environment variable `COTERIE_PBT_CONCURRENCY_REPS` controls
    /// the repetition count (default: 5).
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("COTERIE_PBT_CONCURRENCY_REPS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        Self { repetitions }
    }
}
