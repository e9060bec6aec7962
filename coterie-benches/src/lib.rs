//! Benchmark support crate for coterie.
//!
//! Provides seeded synthetic graphs and parameter types used by Criterion
//! benchmarks for the degeneracy ordering and clique enumeration stages.

pub mod params;
pub mod source;
