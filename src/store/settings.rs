use serde_json::Value;
use std::sync::Arc;

use crate::db::KeyValueStore;
use crate::models::Settings;

/// Key of the settings blob.
pub const SETTINGS_KEY: &str = "app_settings_v1";

/// Reads and writes the [`Settings`] record.
///
/// Nothing here returns an error. Missing or malformed data reads as
/// defaults, one field at a time, and failed writes are logged and dropped.
#[derive(Clone)]
pub struct SettingsStore {
    kv: Arc<dyn KeyValueStore>,
}

impl SettingsStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    pub async fn read(&self) -> Settings {
        match self.kv.get(SETTINGS_KEY).await {
            Ok(Some(raw)) => decode(&raw),
            Ok(None) => Settings::default(),
            Err(e) => {
                tracing::warn!("Failed to read settings, using defaults: {}", e);
                Settings::default()
            }
        }
    }

    /// Persists the full record. Returns `false` if the write was discarded.
    pub async fn write(&self, settings: &Settings) -> bool {
        let raw = match serde_json::to_string(settings) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to encode settings: {}", e);
                return false;
            }
        };

        match self.kv.set(SETTINGS_KEY, &raw).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to save settings: {}", e);
                false
            }
        }
    }

    /// Sets the notification flag on `current` and returns the record to show,
    /// whether or not it was persisted. `current` is the record the caller
    /// is displaying; storage is not consulted.
    pub async fn set_notification(&self, current: Settings, enabled: bool) -> Settings {
        let settings = Settings {
            notification: enabled,
            ..current
        };
        self.write(&settings).await;
        settings
    }

    /// Sets the vibration flag on `current`. See [`Self::set_notification`].
    pub async fn set_vibration(&self, current: Settings, enabled: bool) -> Settings {
        let settings = Settings {
            vibration: enabled,
            ..current
        };
        self.write(&settings).await;
        settings
    }
}

fn decode(raw: &str) -> Settings {
    let defaults = Settings::default();

    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Ignoring malformed settings blob: {}", e);
            return defaults;
        }
    };

    Settings {
        notification: value
            .get("notification")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.notification),
        vibration: value
            .get("vibration")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.vibration),
    }
}
