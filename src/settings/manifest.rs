use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use tracing::{debug, warn};

use crate::constants::RECOGNIZED_KEYS;

/// Key/value pairs read from a dotenv-style manifest file.
pub type ManifestMap = BTreeMap<String, String>;

#[derive(Debug)]
pub struct ManifestError {
    pub path: PathBuf,
    pub detail: String,
}

impl std::fmt::Display for ManifestError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "could not read manifest {}: {}",
            self.path.display(),
            self.detail
        )
    }
}

impl std::error::Error for ManifestError {}

/// Loads a manifest file. Unrecognized keys are warned about and skipped;
/// empty values count as unset.
pub fn load(path: &Path) -> Result<ManifestMap> {
    let shown = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let iter = dotenvy::from_path_iter(path).map_err(|e| {
        anyhow!(ManifestError {
            path: shown.clone(),
            detail: e.to_string(),
        })
    })?;

    let mut map = ManifestMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| {
            anyhow!(ManifestError {
                path: shown.clone(),
                detail: e.to_string(),
            })
        })?;
        if !RECOGNIZED_KEYS.contains(&key.as_str()) {
            warn!("ignoring unrecognized key {key:?} in {}", shown.display());
            continue;
        }
        if value.is_empty() {
            debug!("empty {key} in {} counts as unset", shown.display());
            continue;
        }
        map.insert(key, value);
    }
    Ok(map)
}

/// Loads the default manifest if one exists; a missing file just means
/// built-in defaults apply.
pub fn load_default(path: &Path) -> Result<ManifestMap> {
    if !path.exists() {
        debug!("no manifest at {}", path.display());
        return Ok(ManifestMap::new());
    }
    load(path)
}
