//! Dashboard domain model.
//!
//! # Responsibility
//! - Define the generic `{ id, fields }` record envelope.
//! - Define one typed field set per dashboard domain.
//!
//! # Invariants
//! - Every record is identified by a store-unique `RecordId`.
//! - Records are never deleted; they are replaced whole.

pub mod activity;
pub mod hospital;
pub mod patient;
pub mod record;
pub mod seed;
