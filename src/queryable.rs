//! Queryable - query operations for any record type.
//!
//! Every [`Record`] type gets the full operation set through a blanket
//! implementation; there is no base type to inherit from and nothing to
//! register. Operations take a provider so the active context is looked up
//! fresh on every call.
//!
//! ## Example
//!
//! ```ignore
//! use queryable_rust::{InMemoryContext, Queryable, Record, SortKey};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Default, Serialize, Deserialize)]
//! struct Track {
//!     title: String,
//!     plays: u64,
//! }
//!
//! #[derive(Clone, Copy, SortKey)]
//! enum TrackKey {
//!     Title,
//!     Plays,
//! }
//!
//! impl Record for Track {
//!     const ENTITY: &'static str = "tracks";
//!     type Key = TrackKey;
//! }
//!
//! let context = InMemoryContext::new();
//! let popular = |t: &Track| t.plays > 1000;
//! let top_ten = Track::fetch_all(&context, Some(&popular), (TrackKey::Plays, false), 10)?;
//! let total = Track::count(&context, None)?;
//! ```

use crate::context::{Context, ContextProvider};
use crate::error::QueryError;
use crate::query::{Filter, Query, SortSpec};
use crate::record::{EntityDescription, Record};

/// Query operations available on every [`Record`] type.
///
/// All methods are defaults built on one query-construction routine
/// ([`Query::build`]). Each call looks the context up once and uses that
/// handle for the whole call; nothing is cached across calls.
pub trait Queryable: Record {
    /// Fetch every record matching `filter`, ordered by `sort`, truncated
    /// to `limit` records when `limit > 0` (0 means unbounded).
    ///
    /// `sort` accepts a single `(key, ascending)` pair, a sequence of pairs,
    /// a pre-built [`SortDescriptor`](crate::SortDescriptor) sequence, or
    /// `()` for storage order. An absent filter matches all records.
    fn fetch_all<P, S>(
        provider: &P,
        filter: Option<&Filter<Self>>,
        sort: S,
        limit: usize,
    ) -> Result<Vec<Self>, QueryError>
    where
        P: ContextProvider,
        S: Into<SortSpec<Self::Key>>,
    {
        let context = provider.current()?;
        context.fetch(&Query::build(filter, sort, limit))
    }

    /// Fetch the first record matching `filter` in `sort` order, or `None`
    /// when nothing matches. An empty result is not an error.
    fn fetch_one<P, S>(
        provider: &P,
        filter: Option<&Filter<Self>>,
        sort: S,
    ) -> Result<Option<Self>, QueryError>
    where
        P: ContextProvider,
        S: Into<SortSpec<Self::Key>>,
    {
        let context = provider.current()?;
        let records = context.fetch(&Query::build(filter, sort, 1))?;
        Ok(records.into_iter().next())
    }

    /// Count the records matching `filter`. Always equals the length of an
    /// unbounded [`fetch_all`](Queryable::fetch_all) with the same filter.
    fn count<P>(provider: &P, filter: Option<&Filter<Self>>) -> Result<usize, QueryError>
    where
        P: ContextProvider,
    {
        let context = provider.current()?;
        context.count(&Query::build(filter, (), 0))
    }

    /// Create a new default-valued record, registered in the current
    /// context, and return it.
    ///
    /// The record is not durable until the host commits the context;
    /// mutations made to the returned value live on the caller's copy until
    /// the host's own persistence flow stores them. Whether the registered
    /// record is visible to fetches before commit is backend-dependent (the
    /// bundled in-memory context makes it visible immediately).
    fn insert_new<P>(provider: &P) -> Result<Self, QueryError>
    where
        P: ContextProvider,
    {
        provider.current()?.register_new::<Self>()
    }

    /// Delete every record of this type.
    ///
    /// Uses the backend's bulk delete when
    /// [`supports_batch_delete`](Context::supports_batch_delete) reports it;
    /// otherwise fetches every record and deletes each through the same
    /// context handle, synchronously within this call. On a backend failure
    /// the call aborts immediately: with the fallback strategy the set of
    /// already-deleted records is then backend-defined, and no rollback is
    /// implied unless the underlying context is transactional.
    fn delete_all<P>(provider: &P) -> Result<(), QueryError>
    where
        P: ContextProvider,
    {
        let context = provider.current()?;
        if context.supports_batch_delete() {
            return context.batch_delete::<Self>();
        }

        let records = context.fetch(&Query::<Self>::build(None, (), 0))?;
        for record in &records {
            context.delete(record)?;
        }
        Ok(())
    }

    /// Resolve the backend's schema description for this record type.
    fn entity_description<P>(provider: &P) -> Result<EntityDescription, QueryError>
    where
        P: ContextProvider,
    {
        provider.current()?.entity_description::<Self>()
    }
}

// Blanket implementation: every record type is queryable
impl<R: Record> Queryable for R {}
