//! Synthetic graph generation for Criterion benchmarks.
//!
//! Produces seeded random graphs so benchmark timings are reproducible
//! across runs and machines.

use coterie_core::{Graph, GraphBuilder};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Configuration for a seeded G(n, p) random graph.
#[derive(Clone, Copy, Debug)]
pub struct GnpConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Probability that any given vertex pair is joined by an edge.
    pub edge_probability: f64,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// Generates a random graph by sampling every vertex pair independently.
///
/// # Panics
/// Panics if `edge_probability` lies outside `0.0..=1.0`.
#[must_use]
pub fn generate_gnp(config: &GnpConfig) -> Graph {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut builder = GraphBuilder::new(config.vertex_count);
    for source in 0..config.vertex_count {
        for target in (source + 1)..config.vertex_count {
            if rng.gen_bool(config.edge_probability) {
                builder.add_edge(source, target);
            }
        }
    }
    builder.build().0
}
