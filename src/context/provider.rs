use std::sync::{Arc, RwLock};

use super::context::Context;
use crate::error::QueryError;

/// Per-call lookup of the active [`Context`].
///
/// The facade calls [`current`](ContextProvider::current) once per operation
/// and never caches the result, so a provider may hand out a different
/// context on every call. A context that is its own provider simply returns
/// a clone of itself.
pub trait ContextProvider: Send + Sync {
    type Context: Context;

    /// Return the active unit of work.
    fn current(&self) -> Result<Self::Context, QueryError>;
}

/// An installable slot holding the active context.
///
/// The explicit-injection replacement for a global "ask the application for
/// its context" lookup: the host installs a context at setup, swaps it on
/// rotation, and clears it on teardown. Lookups against an empty slot fail
/// with [`QueryError::ContextUnavailable`]. Clones share the slot.
pub struct ContextSlot<C> {
    slot: Arc<RwLock<Option<C>>>,
}

impl<C> Clone for ContextSlot<C> {
    fn clone(&self) -> Self {
        ContextSlot {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<C: Context> ContextSlot<C> {
    /// Create an empty slot; lookups fail until a context is installed.
    pub fn empty() -> Self {
        ContextSlot {
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a slot with `context` already installed.
    pub fn with(context: C) -> Self {
        ContextSlot {
            slot: Arc::new(RwLock::new(Some(context))),
        }
    }

    /// Install (or replace) the active context.
    pub fn install(&self, context: C) -> Result<(), QueryError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| QueryError::ContextUnavailable("context slot lock poisoned".to_string()))?;
        *slot = Some(context);
        Ok(())
    }

    /// Remove the active context; subsequent lookups fail until another is
    /// installed.
    pub fn clear(&self) -> Result<(), QueryError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| QueryError::ContextUnavailable("context slot lock poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}

impl<C: Context> Default for ContextSlot<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C: Context> ContextProvider for ContextSlot<C> {
    type Context = C;

    fn current(&self) -> Result<C, QueryError> {
        let slot = self
            .slot
            .read()
            .map_err(|_| QueryError::ContextUnavailable("context slot lock poisoned".to_string()))?;
        (*slot)
            .clone()
            .ok_or_else(|| QueryError::ContextUnavailable("no context installed".to_string()))
    }
}
