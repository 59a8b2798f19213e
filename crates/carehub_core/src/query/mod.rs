//! Read-side projections over record stores.
//!
//! # Responsibility
//! - Filter records by search text and discrete selections.
//! - Derive dropdown option sets from current records.
//!
//! # Invariants
//! - Projections never mutate the store.
//! - Nothing is cached; every call reflects the current records.

pub mod filter;
pub mod options;
