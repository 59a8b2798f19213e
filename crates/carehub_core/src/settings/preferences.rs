//! User preference and hospital settings documents.

use crate::routing::Route;
use crate::settings::document::SettingsDocument;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

/// UI languages with translated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Hi,
    Es,
    Fr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    #[default]
    Comfortable,
    Compact,
}

/// Per-user display preferences, stored under `carehub.preferences`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub theme: Theme,
    pub language: Language,
    pub notifications: bool,
    pub density: Density,
    /// Page opened after sign-in.
    pub landing: Route,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: Language::En,
            notifications: true,
            density: Density::Comfortable,
            landing: Route::Overview,
        }
    }
}

impl SettingsDocument for UserPreferences {
    const STORAGE_KEY: &'static str = "carehub.preferences";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupFrequency {
    Hourly,
    #[default]
    Daily,
    Weekly,
}

/// Hospital administration settings, stored under
/// `carehub.hospital_settings`.
///
/// Wire keys are camelCase (`maintenanceMode`, `sessionTimeout`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalSettings {
    pub maintenance_mode: bool,
    pub enable_audit_log: bool,
    pub auto_backup: bool,
    pub backup_frequency: BackupFrequency,
    /// Idle minutes before sign-out.
    pub session_timeout: u32,
}

impl Default for HospitalSettings {
    fn default() -> Self {
        Self {
            maintenance_mode: false,
            enable_audit_log: true,
            auto_backup: true,
            backup_frequency: BackupFrequency::Daily,
            session_timeout: 30,
        }
    }
}

impl SettingsDocument for HospitalSettings {
    const STORAGE_KEY: &'static str = "carehub.hospital_settings";
}
