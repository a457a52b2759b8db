//! Contexts - the unit-of-work seam between the facade and a backend.
//!
//! A [`Context`] is the backend's transactional session: queries execute
//! against it and new records are staged into it. The facade never owns one;
//! it looks the active context up through a [`ContextProvider`] on every
//! call, so hosts are free to rotate contexts between calls.

mod context;
mod in_memory;
mod provider;

pub use context::Context;
pub use in_memory::InMemoryContext;
pub use provider::{ContextProvider, ContextSlot};
