pub use crate::prefs_store_stt::*;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

impl PrefType for bool {
    fn from_value(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn into_value(self) -> PrefValue {
        PrefValue::Bool(self)
    }
}

impl PrefType for i32 {
    fn from_value(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    fn into_value(self) -> PrefValue {
        PrefValue::Int(self)
    }
}

impl PrefType for String {
    fn from_value(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Str(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn into_value(self) -> PrefValue {
        PrefValue::Str(self)
    }
}

/// Typed access on top of any [`PreferenceStore`], including trait objects
pub trait PrefsExt {
    fn get<T: PrefType + Clone>(&self, key: &PrefKey<T>) -> T;
    fn put<T: PrefType>(&mut self, key: &PrefKey<T>, value: T) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PrefsExt for S {
    fn get<T: PrefType + Clone>(&self, key: &PrefKey<T>) -> T {
        match self.get_value(key.name) {
            None => key.default.clone(),
            Some(value) => T::from_value(&value).unwrap_or_else(|| {
                log::warn!(
                    "Preference {} holds unexpected value {:?}, using default",
                    key.name,
                    value
                );
                key.default.clone()
            }),
        }
    }

    fn put<T: PrefType>(&mut self, key: &PrefKey<T>, value: T) -> Result<()> {
        self.put_value(key.name, value.into_value())
    }
}

/// Writes one key; failures are logged, never surfaced to the user.
pub fn save_or_log<T: PrefType>(store: &mut dyn PreferenceStore, key: &PrefKey<T>, value: T) {
    if let Err(e) = store.put(key, value) {
        log::error!("Failed to save {}: {:#}", key.name, e);
    }
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get_value(&self, name: &str) -> Option<PrefValue> {
        self.values.get(name).cloned()
    }

    fn put_value(&mut self, name: &str, value: PrefValue) -> Result<()> {
        self.values.insert(name.to_string(), value);
        Ok(())
    }
}

impl FilePrefs {
    /// Load the preference file at `path`. A missing file opens as an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            log::debug!("Preference file {:?} not found, starting empty", path);
            return Ok(Self {
                path,
                values: BTreeMap::new(),
            });
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read preference file {:?}", path))?;

        let values: BTreeMap<String, PrefValue> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse preference file {:?}", path))?;

        log::debug!("Loaded {} preferences from {:?}", values.len(), path);
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let json =
            serde_json::to_string_pretty(&self.values).context("Failed to serialize preferences")?;

        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write preference file {:?}", self.path))?;

        Ok(())
    }
}

impl PreferenceStore for FilePrefs {
    fn get_value(&self, name: &str) -> Option<PrefValue> {
        self.values.get(name).cloned()
    }

    fn put_value(&mut self, name: &str, value: PrefValue) -> Result<()> {
        tracing::debug!("Preference {} = {:?}", name, value);
        self.values.insert(name.to_string(), value);
        self.persist()
    }
}
