//! Sorted-vector set operations shared by the clique search.
//!
//! Candidate sets, exclusion sets, and adjacency rows are all sorted
//! ascending, so membership is a binary search and intersection is a
//! linear merge over the shorter inputs.

use std::cmp::Ordering;

pub(super) fn intersection(left: &[usize], right: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(left.len().min(right.len()));
    let (mut i, mut j) = (0, 0);
    while let (Some(&a), Some(&b)) = (left.get(i), right.get(j)) {
        match a.cmp(&b) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

pub(super) fn intersection_len(left: &[usize], right: &[usize]) -> usize {
    let mut count = 0;
    let (mut i, mut j) = (0, 0);
    while let (Some(&a), Some(&b)) = (left.get(i), right.get(j)) {
        match a.cmp(&b) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}

pub(super) fn contains(set: &[usize], value: usize) -> bool {
    set.binary_search(&value).is_ok()
}

pub(super) fn remove(set: &mut Vec<usize>, value: usize) {
    if let Ok(position) = set.binary_search(&value) {
        set.remove(position);
    }
}

pub(super) fn insert(set: &mut Vec<usize>, value: usize) {
    if let Err(position) = set.binary_search(&value) {
        set.insert(position, value);
    }
}
