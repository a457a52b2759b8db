use crate::error::QueryError;
use crate::query::Query;
use crate::record::{EntityDescription, Record};

/// A persistence backend's unit of work.
///
/// Implementations are handles: cloning must yield a second handle onto the
/// same session, not a copy of its state. The facade performs no retries and
/// no error translation, so every failure an implementation returns reaches
/// the caller unchanged.
pub trait Context: Clone + Send + Sync {
    /// Execute `query` and return the matching records in query order,
    /// truncated to `query.limit` when it is non-zero.
    fn fetch<R: Record>(&self, query: &Query<'_, R>) -> Result<Vec<R>, QueryError>;

    /// Count the records matching `query`, ignoring its sort and limit.
    fn count<R: Record>(&self, query: &Query<'_, R>) -> Result<usize, QueryError>;

    /// Create a new default-valued record, register it in this unit of work,
    /// and return it.
    fn register_new<R: Record>(&self) -> Result<R, QueryError>;

    /// Delete a single record from this unit of work.
    fn delete<R: Record>(&self, record: &R) -> Result<(), QueryError>;

    /// Whether this backend can delete every record of an entity without
    /// materializing them.
    fn supports_batch_delete(&self) -> bool;

    /// Bulk-delete every record of `R`'s entity.
    fn batch_delete<R: Record>(&self) -> Result<(), QueryError>;

    /// Resolve the schema description for `R`'s entity.
    fn entity_description<R: Record>(&self) -> Result<EntityDescription, QueryError>;
}
