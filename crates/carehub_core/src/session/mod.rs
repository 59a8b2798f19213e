//! Transient per-page edit state.
//!
//! # Responsibility
//! - Manage the open/edit/commit/cancel lifecycle of one record draft.
//!
//! # Invariants
//! - At most one draft is open per session owner.

pub mod edit_session;
