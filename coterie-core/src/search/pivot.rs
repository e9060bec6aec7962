//! Greedy pivot selection for the Bron-Kerbosch search.
//!
//! The pivot is the vertex, drawn from the candidate and exclusion sets,
//! whose neighbourhood covers the most candidates. Only candidates outside
//! the pivot's neighbourhood are branched on, which is the pruning that
//! keeps the search output-sensitive.
//!
//! Candidates are scanned before exclusions and a strict comparison keeps
//! the first maximum, so selection is deterministic for a given frame.

use crate::graph::Graph;

use super::setops;

pub(super) fn select_pivot(
    graph: &Graph,
    candidates: &[usize],
    excluded: &[usize],
) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for &vertex in candidates.iter().chain(excluded) {
        let coverage = setops::intersection_len(graph.neighbors(vertex), candidates);
        if best.is_none_or(|(_, best_coverage)| coverage > best_coverage) {
            best = Some((vertex, coverage));
        }
    }
    best.map(|(vertex, _)| vertex)
}
