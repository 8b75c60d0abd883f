//! Application layer: the `TenderRegistry` orchestrator that composes the
//! validation rules, the store, and the external collaborator ports into
//! the public operation surface.

pub mod registry;
