//! Durable settings documents.
//!
//! # Responsibility
//! - Persist the user preference object and the hospital settings object as
//!   JSON text under namespaced keys.
//! - Merge stored values over documented defaults on load.
//!
//! # Invariants
//! - These documents are the only state that survives a page reload.
//! - Malformed stored content never surfaces as an error to callers.

pub mod document;
pub mod kv_store;
pub mod preferences;
