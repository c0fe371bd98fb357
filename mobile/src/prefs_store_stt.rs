use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Primitive value held by a preference entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i32),
    Str(String),
}

/// Key name paired with the value a reader gets when the key is missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefKey<T> {
    pub name: &'static str,
    pub default: T,
}

impl<T> PrefKey<T> {
    pub const fn new(name: &'static str, default: T) -> Self {
        Self { name, default }
    }
}

/// Types that can be stored as a preference value
pub trait PrefType: Sized {
    fn from_value(value: &PrefValue) -> Option<Self>;
    fn into_value(self) -> PrefValue;
}

/// Key/value preference storage.
///
/// Each `put_value` is an independent single-key write; implementations make it
/// durable before returning.
pub trait PreferenceStore {
    fn get_value(&self, name: &str) -> Option<PrefValue>;
    fn put_value(&mut self, name: &str, value: PrefValue) -> anyhow::Result<()>;
}

/// Volatile store, used in tests and as a fallback when a preference file is unusable
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    pub values: BTreeMap<String, PrefValue>,
}

/// Store backed by a flat JSON object file, rewritten on every put
#[derive(Debug, Clone)]
pub struct FilePrefs {
    pub path: PathBuf,
    pub values: BTreeMap<String, PrefValue>,
}
