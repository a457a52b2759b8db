//! InMemoryContext - HashMap-backed unit of work for testing and development.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;

use super::context::Context;
use super::provider::ContextProvider;
use crate::error::QueryError;
use crate::query::{Query, SortDescriptor};
use crate::record::{EntityDescription, Record};

/// In-memory persistence context.
///
/// Rows are stored as JSON bytes per entity, in insertion order, which is
/// the order unsorted fetches return. Clone-friendly via Arc: clones are
/// handles onto the same unit of work, so records registered through one
/// handle are immediately visible to fetches through another
/// (uncommitted-read visibility). There is no durable layer underneath;
/// the map itself is the session.
#[derive(Clone, Debug)]
pub struct InMemoryContext {
    rows: Arc<RwLock<HashMap<String, Vec<Vec<u8>>>>>,
    batch_delete: bool,
}

impl Default for InMemoryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContext {
    /// Create an empty context with bulk deletion enabled.
    pub fn new() -> Self {
        InMemoryContext {
            rows: Arc::new(RwLock::new(HashMap::new())),
            batch_delete: true,
        }
    }

    /// Create an empty context that deletes record-by-record instead of in
    /// bulk, for exercising the fallback deletion strategy.
    pub fn without_batch_delete() -> Self {
        InMemoryContext {
            batch_delete: false,
            ..Self::new()
        }
    }

    /// Stage a record into this unit of work.
    pub fn stage<R: Record>(&self, record: &R) -> Result<(), QueryError> {
        let bytes =
            serde_json::to_vec(record).map_err(|e| storage_error(R::ENTITY, e.to_string()))?;
        let mut rows = self
            .rows
            .write()
            .map_err(|_| storage_error(R::ENTITY, "storage lock poisoned"))?;
        rows.entry(R::ENTITY.to_string()).or_default().push(bytes);
        Ok(())
    }

    /// Deserialize and filter the stored rows for `query`, in insertion
    /// order, ignoring sort and limit.
    fn load<R: Record>(&self, query: &Query<'_, R>) -> Result<Vec<R>, QueryError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| storage_error(R::ENTITY, "storage lock poisoned"))?;

        let mut records = Vec::new();
        if let Some(stored) = rows.get(query.entity) {
            for bytes in stored {
                let record: R = serde_json::from_slice(bytes)
                    .map_err(|e| storage_error(R::ENTITY, e.to_string()))?;
                if query.filter.map_or(true, |filter| filter(&record)) {
                    records.push(record);
                }
            }
        }
        Ok(records)
    }
}

impl Context for InMemoryContext {
    fn fetch<R: Record>(&self, query: &Query<'_, R>) -> Result<Vec<R>, QueryError> {
        let mut records = self.load(query)?;
        if !query.sort.is_empty() {
            sort_records(&mut records, &query.sort)?;
        }
        if query.limit > 0 {
            records.truncate(query.limit);
        }
        Ok(records)
    }

    fn count<R: Record>(&self, query: &Query<'_, R>) -> Result<usize, QueryError> {
        Ok(self.load(query)?.len())
    }

    fn register_new<R: Record>(&self) -> Result<R, QueryError> {
        let record = R::default();
        self.stage(&record)?;
        Ok(record)
    }

    /// Removes the first stored row equal to `record`. Deleting a record
    /// that is not stored is a no-op.
    fn delete<R: Record>(&self, record: &R) -> Result<(), QueryError> {
        let bytes =
            serde_json::to_vec(record).map_err(|e| storage_error(R::ENTITY, e.to_string()))?;
        let mut rows = self
            .rows
            .write()
            .map_err(|_| storage_error(R::ENTITY, "storage lock poisoned"))?;

        if let Some(stored) = rows.get_mut(R::ENTITY) {
            if let Some(position) = stored.iter().position(|existing| *existing == bytes) {
                stored.remove(position);
            }
        }
        Ok(())
    }

    fn supports_batch_delete(&self) -> bool {
        self.batch_delete
    }

    fn batch_delete<R: Record>(&self) -> Result<(), QueryError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| storage_error(R::ENTITY, "storage lock poisoned"))?;
        rows.remove(R::ENTITY);
        Ok(())
    }

    /// Attributes are derived from a default-valued record's serialized
    /// shape and reported sorted by name.
    fn entity_description<R: Record>(&self) -> Result<EntityDescription, QueryError> {
        let value = serde_json::to_value(R::default())
            .map_err(|e| storage_error(R::ENTITY, e.to_string()))?;
        match value {
            Value::Object(map) => Ok(EntityDescription {
                name: R::ENTITY.to_string(),
                attributes: map.keys().cloned().collect(),
            }),
            _ => Err(storage_error(
                R::ENTITY,
                "record does not serialize to named attributes",
            )),
        }
    }
}

impl ContextProvider for InMemoryContext {
    type Context = InMemoryContext;

    fn current(&self) -> Result<InMemoryContext, QueryError> {
        Ok(self.clone())
    }
}

fn storage_error(entity: &str, reason: impl Into<String>) -> QueryError {
    QueryError::Execution {
        entity: entity.to_string(),
        reason: reason.into(),
    }
}

/// Stable multi-key sort over serialized attribute values.
///
/// Errors when a descriptor names an attribute the record shape does not
/// have; that is the schema-mismatch failure sort keys rely on.
fn sort_records<R: Record>(
    records: &mut Vec<R>,
    sort: &[SortDescriptor],
) -> Result<(), QueryError> {
    let mut keyed: Vec<(Vec<Value>, R)> = Vec::with_capacity(records.len());
    for record in records.drain(..) {
        let value =
            serde_json::to_value(&record).map_err(|e| storage_error(R::ENTITY, e.to_string()))?;
        let mut keys = Vec::with_capacity(sort.len());
        for descriptor in sort {
            match value.get(&descriptor.key) {
                Some(attribute) => keys.push(attribute.clone()),
                None => {
                    return Err(storage_error(
                        R::ENTITY,
                        format!("unknown sort attribute `{}`", descriptor.key),
                    ))
                }
            }
        }
        keyed.push((keys, record));
    }

    keyed.sort_by(|a, b| {
        for (index, descriptor) in sort.iter().enumerate() {
            let ordering = compare_attributes(&a.0[index], &b.0[index]);
            let ordering = if descriptor.ascending {
                ordering
            } else {
                ordering.reverse()
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });

    records.extend(keyed.into_iter().map(|(_, record)| record));
    Ok(())
}

/// Total order over JSON attribute values: null < booleans < numbers <
/// strings. Non-scalar attributes compare equal to each other, so sorting
/// by one leaves storage order.
fn compare_attributes(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => rank(a).cmp(&rank(b)),
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
