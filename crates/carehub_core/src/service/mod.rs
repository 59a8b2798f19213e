//! Dashboard use-case controllers.
//!
//! # Responsibility
//! - Compose stores, filters and edit sessions into page-level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod dashboard_page;
pub mod hospital_dashboard;
pub mod settings_service;
