//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so that Criterion
//! benchmark ids stay readable as the parameter grid grows.

use std::fmt;

/// Parameters for a degeneracy ordering or clique enumeration benchmark run.
#[derive(Clone, Debug)]
pub struct SearchBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Edge probability used during generation.
    pub edge_probability: f64,
}

impl fmt::Display for SearchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.vertex_count, self.edge_probability)
    }
}
