use carehub_core::settings::preferences::{BackupFrequency, Density, Language, Theme};
use carehub_core::{
    load_settings, open_db, open_db_in_memory, save_settings, HospitalSettings, KeyValueStore,
    Route, SettingsService, SqliteKeyValueStore, UserPreferences,
};
use serde_json::{json, Value};

fn customized() -> UserPreferences {
    UserPreferences {
        theme: Theme::Dark,
        language: Language::Hi,
        notifications: false,
        density: Density::Compact,
        landing: Route::Patients,
    }
}

#[test]
fn missing_key_loads_defaults_without_advisory() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    let loaded = load_settings::<UserPreferences>(&store);
    assert_eq!(loaded.value, UserPreferences::default());
    assert_eq!(loaded.advisory, None);
}

#[test]
fn save_then_load_round_trips() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    save_settings(&store, &customized()).unwrap();
    let loaded = load_settings::<UserPreferences>(&store);
    assert_eq!(loaded.value, customized());
    assert_eq!(loaded.advisory, None);
}

#[test]
fn corrupted_text_loads_defaults_with_advisory() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    store.set("carehub.preferences", "{not json").unwrap();

    let loaded = load_settings::<UserPreferences>(&store);
    assert_eq!(loaded.value, UserPreferences::default());
    assert!(loaded.advisory.is_some());
}

#[test]
fn hospital_settings_use_camel_case_wire_keys() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    let settings = HospitalSettings {
        maintenance_mode: true,
        backup_frequency: BackupFrequency::Weekly,
        session_timeout: 45,
        ..HospitalSettings::default()
    };
    save_settings(&store, &settings).unwrap();

    let raw = store.get("carehub.hospital_settings").unwrap().unwrap();
    let wire: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(wire["maintenanceMode"], json!(true));
    assert_eq!(wire["backupFrequency"], json!("weekly"));
    assert_eq!(wire["sessionTimeout"], json!(45));
    assert_eq!(load_settings::<HospitalSettings>(&store).value, settings);
}

#[test]
fn documents_do_not_share_slots() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    save_settings(&store, &customized()).unwrap();

    let loaded = load_settings::<HospitalSettings>(&store);
    assert_eq!(loaded.value, HospitalSettings::default());
}

#[test]
fn settings_service_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("carehub_settings.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let mut service =
            SettingsService::<UserPreferences, _>::load(SqliteKeyValueStore::new(&conn));
        assert!(service.update(|prefs| {
            prefs.theme = Theme::System;
            prefs.landing = Route::Activity;
        }));
    }

    let conn = open_db(&path).unwrap();
    let service = SettingsService::<UserPreferences, _>::load(SqliteKeyValueStore::new(&conn));
    assert_eq!(service.current().theme, Theme::System);
    assert_eq!(service.current().landing, Route::Activity);
    assert_eq!(service.advisory(), None);
}
