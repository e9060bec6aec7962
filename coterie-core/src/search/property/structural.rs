//! Property 2: Structural invariant verification.
//!
//! For any clique listing produced by the search, verifies:
//!
//! - **Clique-ness**: every pair of reported members is adjacent.
//! - **Maximality**: no outside vertex is adjacent to all members.
//! - **Uniqueness**: no clique is reported twice.
//! - **Census consistency**: the census counters agree with the listing.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::{adjacency_masks, enumerate_census, enumerate_sorted_cliques};
use super::types::CliqueFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &CliqueFixture) -> TestCaseResult {
    let cliques = enumerate_sorted_cliques(fixture)?;
    let masks = adjacency_masks(fixture);

    validate_cliques(fixture, &masks, &cliques)?;
    validate_maximality(fixture, &masks, &cliques)?;
    validate_uniqueness(fixture, &cliques)?;
    validate_census_consistency(fixture, &cliques)?;

    Ok(())
}

// ── Validation helpers ──────────────────────────────────────────────────

/// Verifies that every reported member list induces a complete subgraph.
fn validate_cliques(
    fixture: &CliqueFixture,
    masks: &[u32],
    cliques: &[Vec<usize>],
) -> TestCaseResult {
    for (index, clique) in cliques.iter().enumerate() {
        for (position, &member) in clique.iter().enumerate() {
            for &other in &clique[position + 1..] {
                if masks[member] & (1 << other) == 0 {
                    return Err(TestCaseError::fail(format!(
                        "clique {index}: members {member} and {other} are not adjacent \
                         (topology={:?}, vertices={})",
                        fixture.topology, fixture.vertex_count,
                    )));
                }
            }
        }
    }
    Ok(())
}

/// Verifies that no reported clique can be extended by an outside vertex.
fn validate_maximality(
    fixture: &CliqueFixture,
    masks: &[u32],
    cliques: &[Vec<usize>],
) -> TestCaseResult {
    for (index, clique) in cliques.iter().enumerate() {
        let subset = clique.iter().fold(0u32, |acc, &member| acc | 1 << member);
        for vertex in 0..fixture.vertex_count {
            if subset & (1 << vertex) != 0 {
                continue;
            }
            if masks[vertex] & subset == subset {
                return Err(TestCaseError::fail(format!(
                    "clique {index}: {clique:?} is extendable by vertex {vertex} \
                     (topology={:?}, vertices={})",
                    fixture.topology, fixture.vertex_count,
                )));
            }
        }
    }
    Ok(())
}

/// Verifies that the sorted listing contains no repeated clique.
fn validate_uniqueness(fixture: &CliqueFixture, cliques: &[Vec<usize>]) -> TestCaseResult {
    for window in cliques.windows(2) {
        if window[0] == window[1] {
            return Err(TestCaseError::fail(format!(
                "clique {:?} reported more than once (topology={:?}, vertices={})",
                window[0], fixture.topology, fixture.vertex_count,
            )));
        }
    }
    Ok(())
}

/// Verifies that the census agrees with the collected listing on totals,
/// largest size, and every per-size count.
fn validate_census_consistency(fixture: &CliqueFixture, cliques: &[Vec<usize>]) -> TestCaseResult {
    let census = enumerate_census(fixture)?;

    if census.total() != cliques.len() as u64 {
        return Err(TestCaseError::fail(format!(
            "census total {} disagrees with {} collected cliques (topology={:?})",
            census.total(),
            cliques.len(),
            fixture.topology,
        )));
    }

    let largest = cliques.iter().map(Vec::len).max().unwrap_or(0);
    if census.largest() != largest {
        return Err(TestCaseError::fail(format!(
            "census largest {} disagrees with collected largest {largest} (topology={:?})",
            census.largest(),
            fixture.topology,
        )));
    }

    for (size, count) in census.size_counts() {
        let collected = cliques.iter().filter(|clique| clique.len() == size).count() as u64;
        if count != collected {
            return Err(TestCaseError::fail(format!(
                "census counts {count} cliques of size {size}, collected {collected} \
                 (topology={:?})",
                fixture.topology,
            )));
        }
    }

    let histogram_sum: u64 = census.size_counts().map(|(_, count)| count).sum();
    if histogram_sum != census.total() {
        return Err(TestCaseError::fail(format!(
            "histogram sums to {histogram_sum}, census total is {} (topology={:?})",
            census.total(),
            fixture.topology,
        )));
    }

    Ok(())
}
