//! Edge-list ingestion for whitespace-delimited graph files.

mod errors;
mod parse;
mod source;

pub use errors::EdgeListError;
pub use source::{EdgeListSource, LoadReport};

#[cfg(test)]
mod tests;
