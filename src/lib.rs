mod context;
mod error;
mod query;
mod queryable;
mod record;

pub use context::{Context, ContextProvider, ContextSlot, InMemoryContext};
pub use error::QueryError;
pub use query::{Filter, Query, SortDescriptor, SortKey, SortSpec};
pub use queryable::Queryable;
pub use record::{EntityDescription, Record};

// Re-export the SortKey derive from the macros crate
pub use queryable_rust_macros::SortKey;
