//! Shared helper functions for clique-search property-based tests.
//!
//! Provides fixture-to-graph conversion, bitmask adjacency construction,
//! and search invocation wrappers that convert engine errors into
//! proptest failures with fixture context attached.

use proptest::test_runner::TestCaseError;

use crate::{
    CliqueCensus, CliqueCollector, Graph, GraphBuilder, degeneracy_ordering, enumerate_cliques,
};

use super::types::CliqueFixture;

/// Builds the engine graph from the fixture's raw edge list.
///
/// Anomalous edges pass through [`GraphBuilder`], which drops and tallies
/// them exactly as production ingestion does.
pub(super) fn build_graph(fixture: &CliqueFixture) -> Graph {
    let mut builder = GraphBuilder::new(fixture.vertex_count);
    for &(source, target) in &fixture.edges {
        builder.add_edge(source, target);
    }
    builder.build().0
}

/// Builds bitmask adjacency rows from the raw edge list.
///
/// Self-loops, duplicates, and out-of-range endpoints are ignored here
/// independently of the builder, so the oracle and the engine agree on
/// the effective simple graph without sharing code.
pub(super) fn adjacency_masks(fixture: &CliqueFixture) -> Vec<u32> {
    let mut masks = vec![0u32; fixture.vertex_count];
    for &(source, target) in &fixture.edges {
        if source == target || source >= fixture.vertex_count || target >= fixture.vertex_count {
            continue;
        }
        masks[source] |= 1 << target;
        masks[target] |= 1 << source;
    }
    masks
}

/// Runs the sequential search over the fixture and returns the cliques
/// sorted for comparison.
pub(super) fn enumerate_sorted_cliques(
    fixture: &CliqueFixture,
) -> Result<Vec<Vec<usize>>, TestCaseError> {
    let graph = build_graph(fixture);
    let ordering = degeneracy_ordering(&graph);
    let mut collector = CliqueCollector::new();
    enumerate_cliques(&graph, &ordering, &mut collector).map_err(|e| {
        TestCaseError::fail(format!(
            "enumerate_cliques failed: {e} (topology={:?}, vertices={}, edges={})",
            fixture.topology,
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })?;
    let mut cliques = collector.cliques().to_vec();
    cliques.sort();
    Ok(cliques)
}

/// Runs the sequential search over the fixture into a census.
pub(super) fn enumerate_census(fixture: &CliqueFixture) -> Result<CliqueCensus, TestCaseError> {
    let graph = build_graph(fixture);
    let ordering = degeneracy_ordering(&graph);
    let mut census = CliqueCensus::new();
    enumerate_cliques(&graph, &ordering, &mut census).map_err(|e| {
        TestCaseError::fail(format!(
            "enumerate_cliques failed: {e} (topology={:?}, vertices={}, edges={})",
            fixture.topology,
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })?;
    Ok(census)
}
