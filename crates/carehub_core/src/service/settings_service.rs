//! Settings page use-cases over one persisted settings document.
//!
//! # Responsibility
//! - Hold the in-memory copy the settings page renders from.
//! - Write every accepted change through to durable storage.
//!
//! # Invariants
//! - Storage failures never surface as errors; they become an advisory
//!   message and the in-memory value stays authoritative.
//! - Writes are last-write-wins.

use crate::settings::document::{load_settings, save_settings, Loaded, SettingsDocument};
use crate::settings::kv_store::KeyValueStore;
use log::{info, warn};

/// Settings controller for document type `T` stored in `S`.
pub struct SettingsService<T: SettingsDocument, S: KeyValueStore> {
    store: S,
    current: T,
    advisory: Option<String>,
}

impl<T: SettingsDocument, S: KeyValueStore> SettingsService<T, S> {
    /// Loads the document from `store`, falling back to defaults.
    pub fn load(store: S) -> Self {
        let Loaded { value, advisory } = load_settings::<T>(&store);
        Self {
            store,
            current: value,
            advisory,
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    /// User-facing note about the last storage fallback, if any.
    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    pub fn dismiss_advisory(&mut self) {
        self.advisory = None;
    }

    /// Applies `change` and persists the result.
    ///
    /// Returns `true` when the value was written to storage.
    pub fn update(&mut self, change: impl FnOnce(&mut T)) -> bool {
        let mut next = self.current.clone();
        change(&mut next);
        if next == self.current {
            info!(
                "event=settings_update module=settings status=noop key={}",
                T::STORAGE_KEY
            );
            return true;
        }
        self.current = next;
        self.persist()
    }

    /// Restores defaults and persists them.
    pub fn reset(&mut self) -> bool {
        self.current = T::default();
        self.persist()
    }

    fn persist(&mut self) -> bool {
        match save_settings(&self.store, &self.current) {
            Ok(()) => {
                info!(
                    "event=settings_update module=settings status=ok key={}",
                    T::STORAGE_KEY
                );
                true
            }
            Err(err) => {
                warn!(
                    "event=settings_update module=settings status=error key={} error={}",
                    T::STORAGE_KEY,
                    err
                );
                self.advisory = Some(format!(
                    "Settings could not be saved ({err}); changes apply to this session only."
                ));
                false
            }
        }
    }
}
