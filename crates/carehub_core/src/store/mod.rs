//! Page-scoped record storage.
//!
//! # Responsibility
//! - Own the in-memory record sequence of one domain for one page lifetime.
//! - Issue unique, time-based record ids.
//!
//! # Invariants
//! - Stores start from seed data and are never persisted.
//! - Writes are append (prepend) or whole-record replace only.

pub mod id;
pub mod record_store;
