use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Raw text of the four input fields, persisted between runs. Strings
/// round-trip exactly; no parsing happens here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredFields {
    #[serde(default)]
    pub endpoint_url: String,
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
}

/// JSON file holding the field texts, loaded on start and written back
/// when a command finishes.
pub struct FieldStore {
    path: PathBuf,
}

impl FieldStore {
    /// Store under the platform config dir, or wherever `WAYPOST_STORE`
    /// points.
    pub fn open_default() -> Result<Self> {
        if let Ok(path) = std::env::var("WAYPOST_STORE") {
            let path = path.trim();
            if !path.is_empty() {
                return Ok(Self::at(path));
            }
        }
        let base = dirs::config_dir().context("no config directory on this platform")?;
        Ok(Self::at(base.join("waypost").join("fields.json")))
    }

    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Missing or unreadable contents come back as blank fields; the
    /// tool starts empty rather than failing.
    pub fn load(&self) -> StoredFields {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "field store unreadable; starting blank"
                );
                StoredFields::default()
            }),
            Err(_) => StoredFields::default(),
        }
    }

    pub fn save(&self, fields: &StoredFields) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(fields)?;
        fs::write(&self.path, raw).with_context(|| format!("writing {}", self.path.display()))
    }
}
