//! Loading and saving JSON settings documents with per-key default fallback.
//!
//! # Invariants
//! - Loading never fails: unreadable storage or text yields the defaults.
//! - Stored keys are merged one by one over the defaults; a key whose value
//!   does not fit its field keeps the default for that key only.
//! - Unknown stored keys are ignored.

use crate::settings::kv_store::{KeyValueStore, StorageResult};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Settings object persisted under one namespaced key.
pub trait SettingsDocument: Serialize + DeserializeOwned + Default + Clone + PartialEq {
    /// Namespaced storage key, e.g. `carehub.preferences`.
    const STORAGE_KEY: &'static str;
}

/// Loaded settings plus an optional user-facing advisory.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub advisory: Option<String>,
}

/// Reads `T` from `store`, falling back to defaults on any failure.
pub fn load_settings<T: SettingsDocument>(store: &impl KeyValueStore) -> Loaded<T> {
    match store.get(T::STORAGE_KEY) {
        Ok(Some(raw)) => {
            let (value, advisory) = decode_settings::<T>(&raw);
            info!(
                "event=settings_load module=settings status=ok key={} fallback={}",
                T::STORAGE_KEY,
                advisory.is_some()
            );
            Loaded { value, advisory }
        }
        Ok(None) => Loaded {
            value: T::default(),
            advisory: None,
        },
        Err(err) => {
            warn!(
                "event=settings_load module=settings status=error key={} error={}",
                T::STORAGE_KEY,
                err
            );
            Loaded {
                value: T::default(),
                advisory: Some(format!(
                    "Saved settings could not be read ({err}); using defaults."
                )),
            }
        }
    }
}

/// Serializes `value` as JSON and writes it under its storage key.
pub fn save_settings<T: SettingsDocument>(
    store: &impl KeyValueStore,
    value: &T,
) -> StorageResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set(T::STORAGE_KEY, &raw)
}

/// Decodes stored text, merging recognised keys over the defaults.
///
/// Returns the merged value and an advisory when anything had to fall back.
pub fn decode_settings<T: SettingsDocument>(raw: &str) -> (T, Option<String>) {
    let stored = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            return (
                T::default(),
                Some("Saved settings were unreadable; defaults restored.".to_string()),
            )
        }
    };

    let Ok(Value::Object(mut merged)) = serde_json::to_value(T::default()) else {
        return (T::default(), None);
    };

    let mut rejected = Vec::new();
    for (key, value) in stored {
        let Some(previous) = merged.get(&key).cloned() else {
            continue;
        };
        merged.insert(key.clone(), value);
        if from_map::<T>(&merged).is_none() {
            merged.insert(key.clone(), previous);
            rejected.push(key);
        }
    }

    let value = from_map::<T>(&merged).unwrap_or_default();
    let advisory = if rejected.is_empty() {
        None
    } else {
        Some(format!(
            "Some saved settings were invalid and reset to defaults: {}.",
            rejected.join(", ")
        ))
    };
    (value, advisory)
}

fn from_map<T: DeserializeOwned>(map: &Map<String, Value>) -> Option<T> {
    serde_json::from_value(Value::Object(map.clone())).ok()
}
