//! Records - the contract a persisted type implements to become queryable.

use serde::{de::DeserializeOwned, Serialize};

use crate::query::SortKey;

/// Trait for types persisted as schema-backed records.
pub trait Record: Serialize + DeserializeOwned + Clone + Default + Send + Sync {
    /// The backend entity name for this record type (e.g., "tracks",
    /// "user_profiles"). Maps to a table in SQL, a collection in document
    /// stores, a key prefix in KV stores, etc. Convention: the type's own
    /// name, snake_cased and pluralized.
    const ENTITY: &'static str;

    /// The closed set of attributes this record type can be sorted by.
    type Key: SortKey;
}

/// Schema description for a record type, resolved from the backend.
///
/// For introspection by callers (e.g., UI layers needing attribute lists);
/// the query facade itself never consults it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescription {
    pub name: String,
    pub attributes: Vec<String>,
}
