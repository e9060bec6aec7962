//! Aggregate statistics over enumerated cliques.
//!
//! The search reports each maximal clique exactly once through the
//! [`CliqueSink`] trait. [`CliqueCensus`] is the aggregate consumer used by
//! the public entry points; [`CliqueCollector`] retains the cliques
//! themselves and exists for callers that need the full listing.

/// Receives maximal cliques as the search discovers them.
///
/// The `members` slice is borrowed from the search's working stack and is
/// only valid for the duration of the call; implementations that retain
/// cliques must copy it.
pub trait CliqueSink {
    /// Records one maximal clique.
    fn record(&mut self, members: &[usize]);
}

/// Aggregate counts over a stream of maximal cliques.
///
/// Tracks the total number of cliques, the largest clique size, and a
/// per-size histogram. A census over zero cliques reports a total of zero,
/// a largest size of zero, and an empty histogram.
///
/// # Examples
/// ```
/// use coterie_core::{CliqueCensus, CliqueSink};
///
/// let mut census = CliqueCensus::new();
/// census.record(&[0, 1, 2]);
/// census.record(&[3]);
/// assert_eq!(census.total(), 2);
/// assert_eq!(census.largest(), 3);
/// assert_eq!(census.count_of(3), 1);
/// assert_eq!(census.count_of(2), 0);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CliqueCensus {
    total: u64,
    largest: usize,
    counts: Vec<u64>,
}

impl CliqueCensus {
    /// Creates an empty census.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            largest: 0,
            counts: Vec::new(),
        }
    }

    /// Returns the total number of recorded cliques.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total(&self) -> u64 { self.total }

    /// Returns the size of the largest recorded clique, or zero when no
    /// clique has been recorded.
    #[must_use]
    #[rustfmt::skip]
    pub const fn largest(&self) -> usize { self.largest }

    /// Returns the number of recorded cliques of exactly `size` members.
    #[must_use]
    pub fn count_of(&self, size: usize) -> u64 {
        size.checked_sub(1)
            .and_then(|slot| self.counts.get(slot))
            .copied()
            .unwrap_or(0)
    }

    /// Iterates the histogram as `(size, count)` pairs for every size from
    /// one to the largest recorded clique, including sizes with zero count.
    pub fn size_counts(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        (1..=self.largest).map(|size| (size, self.count_of(size)))
    }

    /// Folds another census into this one.
    ///
    /// Merging the censuses of disjoint partitions of a clique stream
    /// yields the census of the whole stream.
    pub fn merge(&mut self, other: &Self) {
        if self.counts.len() < other.counts.len() {
            self.counts.resize(other.counts.len(), 0);
        }
        for (slot, &count) in other.counts.iter().enumerate() {
            self.counts[slot] += count;
        }
        self.total += other.total;
        self.largest = self.largest.max(other.largest);
    }
}

impl CliqueSink for CliqueCensus {
    fn record(&mut self, members: &[usize]) {
        let Some(slot) = members.len().checked_sub(1) else {
            return;
        };
        if self.counts.len() <= slot {
            self.counts.resize(slot + 1, 0);
        }
        self.counts[slot] += 1;
        self.total += 1;
        self.largest = self.largest.max(members.len());
    }
}

/// Sink that retains every clique it is handed.
///
/// Member lists are stored sorted ascending so listings compare cheaply.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CliqueCollector {
    cliques: Vec<Vec<usize>>,
}

impl CliqueCollector {
    /// Creates an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cliques: Vec::new(),
        }
    }

    /// Returns the collected cliques in discovery order.
    #[must_use]
    #[rustfmt::skip]
    pub fn cliques(&self) -> &[Vec<usize>] { &self.cliques }
}

impl CliqueSink for CliqueCollector {
    fn record(&mut self, members: &[usize]) {
        let mut clique = members.to_vec();
        clique.sort_unstable();
        self.cliques.push(clique);
    }
}
