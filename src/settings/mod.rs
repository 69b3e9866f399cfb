//! Persisted user defaults.

mod file;
mod store;

pub use file::FileStore;
pub use store::{KeyValueStore, MemoryStore};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pass::GenerationConfig;
use crate::sim::{AttackKind, AttackMethod, HardwareProfile, hardware};

const SETTINGS_KEY: &str = "settings";

/// Defaults for `simulate` when no method or hardware is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationDefaults {
    pub method: AttackKind,
    /// Catalog id, see [`hardware::catalog`].
    pub hardware: String,
}

impl Default for SimulationDefaults {
    fn default() -> Self {
        Self {
            method: AttackKind::Sequential,
            hardware: hardware::baseline().id,
        }
    }
}

impl SimulationDefaults {
    pub fn method(&self) -> AttackMethod {
        AttackMethod::of(self.method)
    }

    /// The saved profile, or the baseline CPU if the id is unknown.
    pub fn hardware(&self) -> HardwareProfile {
        hardware::find(&self.hardware).unwrap_or_else(|| {
            log::warn!("unknown saved hardware '{}', using baseline", self.hardware);
            hardware::baseline()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generation: GenerationConfig,
    pub simulation: SimulationDefaults,
    pub number_of_passwords: usize,
    /// Empty means stdout.
    pub output_file_path: String,
    pub to_clipboard: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            simulation: SimulationDefaults::default(),
            number_of_passwords: 1,
            output_file_path: String::new(),
            to_clipboard: false,
        }
    }
}

impl Settings {
    /// Load saved settings. A missing entry yields defaults; a corrupt one
    /// is logged and also yields defaults. Store I/O errors propagate.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        let Some(raw) = store.get(SETTINGS_KEY)? else {
            return Ok(Self::default());
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                log::warn!("ignoring unreadable saved settings: {e}");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        store.set(SETTINGS_KEY, &raw)
    }

    pub fn clear(store: &dyn KeyValueStore) -> Result<()> {
        store.remove(SETTINGS_KEY)
    }

    /// Load from the default [`FileStore`].
    pub fn load_default() -> Result<Self> {
        Self::load(&FileStore::default_location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::WordLanguage;

    #[test]
    fn missing_entry_gives_defaults() {
        let store = MemoryStore::new();
        assert_eq!(Settings::load(&store).unwrap(), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let store = MemoryStore::new();
        let mut settings = Settings::default();
        settings.generation = GenerationConfig::default()
            .length(24)
            .with_symbols(false)
            .language(WordLanguage::Es);
        settings.simulation.method = AttackKind::Hybrid;
        settings.simulation.hardware = "cluster".into();
        settings.number_of_passwords = 5;
        settings.save(&store).unwrap();

        let loaded = Settings::load(&store).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.simulation.hardware().id, "cluster");
    }

    #[test]
    fn corrupt_entry_falls_back() {
        let store = MemoryStore::new();
        store.set("settings", "{ not json").unwrap();
        assert_eq!(Settings::load(&store).unwrap(), Settings::default());
    }

    #[test]
    fn partial_entry_fills_defaults() {
        let store = MemoryStore::new();
        store.set("settings", r#"{"generation":{"length":40}}"#).unwrap();
        let loaded = Settings::load(&store).unwrap();
        assert_eq!(loaded.generation.length, 40);
        assert!(loaded.generation.include_symbols);
        assert_eq!(loaded.number_of_passwords, 1);
    }

    #[test]
    fn clear_removes_entry() {
        let store = MemoryStore::new();
        Settings::default().save(&store).unwrap();
        Settings::clear(&store).unwrap();
        assert_eq!(store.get("settings").unwrap(), None);
    }

    #[test]
    fn unknown_hardware_uses_baseline() {
        let defaults = SimulationDefaults {
            method: AttackKind::Dictionary,
            hardware: "quantum".into(),
        };
        assert_eq!(defaults.hardware(), hardware::baseline());
        assert_eq!(defaults.method(), AttackMethod::dictionary());
    }
}
