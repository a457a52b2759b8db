use super::sort::{SortDescriptor, SortSpec};
use crate::record::Record;

/// An opaque filter over records of type `R`.
///
/// The facade never inspects or constructs filters; it hands them through to
/// the backend, which evaluates them however it evaluates predicates.
pub type Filter<R> = dyn Fn(&R) -> bool + Send + Sync;

/// A normalized query over one record type.
///
/// `limit == 0` means unbounded. Built fresh per call and consumed by a
/// single context operation; never retained or cached.
pub struct Query<'a, R> {
    pub entity: &'static str,
    pub filter: Option<&'a Filter<R>>,
    pub sort: Vec<SortDescriptor>,
    pub limit: usize,
}

impl<'a, R: Record> Query<'a, R> {
    /// Turn the optional filter/sort/limit knobs into a query.
    ///
    /// Single source of truth: every facade operation constructs its query
    /// here, whichever call shape the sort arrived in.
    pub fn build(
        filter: Option<&'a Filter<R>>,
        sort: impl Into<SortSpec<R::Key>>,
        limit: usize,
    ) -> Self {
        Query {
            entity: R::ENTITY,
            filter,
            sort: sort.into().into_descriptors(),
            limit,
        }
    }
}
