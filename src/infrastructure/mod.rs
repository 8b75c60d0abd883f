//! Adapters backing the domain ports with in-memory state.

pub mod in_memory;
