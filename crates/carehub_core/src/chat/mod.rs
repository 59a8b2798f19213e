//! Simulated assistant chat.
//!
//! # Responsibility
//! - Model the assistant panel's message state machine.
//! - Model simulated reply latency as cancellable scheduled tasks.
//!
//! # Invariants
//! - Time only advances through explicit `now_ms` arguments.
//! - Scheduled work never outlives the session that owns it.

pub mod assistant;
pub mod scheduler;
