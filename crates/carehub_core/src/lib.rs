//! Core domain logic for the CareHub hospital dashboard.
//! Record pages, filtering, edit sessions and persisted preferences live
//! here; front ends only render what this crate returns.

pub mod chat;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod routing;
pub mod service;
pub mod session;
pub mod settings;
pub mod store;

pub use chat::assistant::{ChatMessage, ChatSession, DelayPolicy, Speaker};
pub use config::CoreConfig;
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::record::{FieldError, FieldInput, FieldValue, Record, RecordFields, RecordId};
pub use query::filter::{FilteredView, RecordFilter, Selection, ALL_OPTION, NO_RESULTS_MESSAGE};
pub use query::options::{derive_dependent_options, derive_options};
pub use routing::{Role, Route};
pub use service::dashboard_page::DashboardPage;
pub use service::hospital_dashboard::{HospitalDashboard, OverviewStats};
pub use service::settings_service::SettingsService;
pub use session::edit_session::{CommitOutcome, EditSession, SessionError, SessionState};
pub use settings::document::{load_settings, save_settings, Loaded, SettingsDocument};
pub use settings::kv_store::{KeyValueStore, SqliteKeyValueStore, StorageError, StorageResult};
pub use settings::preferences::{HospitalSettings, UserPreferences};
pub use store::record_store::{CreateOutcome, RecordStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
