//! Persisted user preferences.
//!
//! One JSON object in the app data directory. Reads never fail: a missing,
//! unreadable or malformed file resolves to the default record. Writes are
//! best-effort and only logged on failure.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::app::PREFERENCES_FILE;
use crate::error::ShellResult;

const OPEN_AT_LOGIN_KEY: &str = "openAtLogin";

/// The preference record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Launch the shell when the user logs in.
    #[serde(default)]
    pub open_at_login: bool,

    /// Keys written by other versions, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Preferences {
    #[cfg(test)]
    pub fn with_open_at_login(open_at_login: bool) -> Self {
        Self {
            open_at_login,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `config.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record, falling back to the default on any failure.
    pub fn load(&self) -> Preferences {
        match self.try_load() {
            Ok(prefs) => prefs,
            Err(e) => {
                log::debug!("[PREFS] using defaults, {}: {}", self.path.display(), e);
                Preferences::default()
            },
        }
    }

    pub fn try_load(&self) -> ShellResult<Preferences> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Write the record. A failed write is logged and dropped.
    pub fn save(&self, prefs: &Preferences) {
        if let Err(e) = self.try_save(prefs) {
            log::error!("[PREFS] failed to save {}: {}", self.path.display(), e);
        }
    }

    pub fn try_save(&self, prefs: &Preferences) -> ShellResult<()> {
        self.write_json(prefs)
    }

    /// Read-modify-write of the autostart flag.
    ///
    /// Works on the raw object rather than [`Preferences`], so other keys
    /// survive even when the stored flag itself is not a boolean. Anything
    /// that is not a JSON object is replaced.
    pub fn set_open_at_login(&self, enabled: bool) {
        let mut record = self.load_object();
        record.insert(OPEN_AT_LOGIN_KEY.to_string(), Value::Bool(enabled));
        if let Err(e) = self.write_json(&record) {
            log::error!("[PREFS] failed to save {}: {}", self.path.display(), e);
        }
    }

    fn load_object(&self) -> Map<String, Value> {
        let parsed = fs::read_to_string(&self.path)
            .ok()
            .and_then(|data| serde_json::from_str::<Value>(&data).ok());
        match parsed {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> ShellResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
