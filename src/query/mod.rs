//! Queries - the normalized descriptor every operation is built from.

mod query;
mod sort;

pub use query::{Filter, Query};
pub use sort::{SortDescriptor, SortKey, SortSpec};
