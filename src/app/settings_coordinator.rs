//! Generic settings persistence coordination.
//!
//! Serializes arbitrary settings values to JSON strings in eframe's
//! key-value storage. Used for layout preferences that should survive
//! application restarts.

use serde::{Deserialize, Serialize};

/// Coordinates saving and loading of typed settings.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Saves a serializable value under the given key.
    ///
    /// Serialization failures are ignored; a setting that cannot be
    /// saved falls back to its default on the next start.
    pub fn save_setting<T: Serialize>(storage: &mut dyn eframe::Storage, key: &str, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            storage.set_string(key, json);
        }
    }

    /// Loads a setting, falling back to the type's default when absent
    /// or invalid.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: Default + for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Loads a setting, falling back to the provided default when
    /// absent or invalid.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        serde_json::from_str(&json_str).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_split_ratio() {
        let mut storage = MockStorage::new();

        SettingsCoordinator::save_setting(&mut storage, "layout_split", &0.68f32);

        let loaded: f32 = SettingsCoordinator::load_setting(Some(&storage), "layout_split");
        assert_eq!(loaded, 0.68);
    }

    #[test]
    fn test_load_with_default() {
        let storage = MockStorage::new();

        let loaded: f32 = SettingsCoordinator::load_setting(Some(&storage), "missing_key");
        assert_eq!(loaded, 0.0);
    }

    #[test]
    fn test_load_setting_or() {
        let storage = MockStorage::new();

        let loaded = SettingsCoordinator::load_setting_or(Some(&storage), "missing_key", 0.72f32);
        assert_eq!(loaded, 0.72);
    }

    #[test]
    fn test_try_load_setting() {
        let mut storage = MockStorage::new();

        let result: Option<f32> = SettingsCoordinator::try_load_setting(Some(&storage), "missing");
        assert_eq!(result, None);

        SettingsCoordinator::save_setting(&mut storage, "present", &1.5f32);
        let result: Option<f32> = SettingsCoordinator::try_load_setting(Some(&storage), "present");
        assert_eq!(result, Some(1.5));
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let mut storage = MockStorage::new();
        storage.set_string("broken", "not json".to_string());

        let result: Option<f32> = SettingsCoordinator::try_load_setting(Some(&storage), "broken");
        assert_eq!(result, None);
    }
}
