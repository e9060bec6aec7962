//! Coterie core library.
//!
//! Enumerates all maximal cliques of an undirected simple graph. The crate
//! builds an immutable adjacency structure, computes a degeneracy ordering,
//! and runs a pivot-pruned recursive search seeded once per vertex so that
//! every maximal clique is reported exactly once.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod census;
mod degeneracy;
mod graph;
mod search;

pub use crate::{
    census::{CliqueCensus, CliqueCollector, CliqueSink},
    degeneracy::{DegeneracyOrdering, degeneracy_ordering},
    graph::{EdgeRejections, Graph, GraphBuilder},
    search::{EnumerationError, EnumerationErrorCode, enumerate_cliques},
};

#[cfg(feature = "parallel")]
pub use crate::search::parallel_enumerate_cliques;
