//! Property 1: Equivalence with the exhaustive oracle.
//!
//! For any generated input graph, verifies that the pivoted search
//! reports exactly the maximal cliques found by the subset-scan oracle,
//! as sorted member lists compared for full set equality.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::enumerate_sorted_cliques;
use super::oracle::brute_force_maximal_cliques;
use super::types::CliqueFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &CliqueFixture) -> TestCaseResult {
    let engine = enumerate_sorted_cliques(fixture)?;
    let oracle = brute_force_maximal_cliques(fixture);

    if engine != oracle {
        let engine_only: Vec<_> = engine.iter().filter(|c| !oracle.contains(c)).collect();
        let oracle_only: Vec<_> = oracle.iter().filter(|c| !engine.contains(c)).collect();
        return Err(TestCaseError::fail(format!(
            "clique sets differ: engine-only={engine_only:?}, oracle-only={oracle_only:?} \
             (topology={:?}, vertices={}, edges={})",
            fixture.topology,
            fixture.vertex_count,
            fixture.edges.len(),
        )));
    }

    Ok(())
}
