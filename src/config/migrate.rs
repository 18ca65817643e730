//! Configuration file maintenance: detect and fill keys added in newer
//! releases without touching the values the user already set.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top level is not a mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default()).map_err(|_| AppError::ConfigSave)? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::ConfigSave),
    }
}

/// Keys known to this version that the file at `path` does not set.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value.
///
/// Returns `Ok(true)` when the file was rewritten, `Ok(false)` when nothing
/// was missing.
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;

    let mut changed = false;
    for (key, value) in defaults {
        if !current.contains_key(&key) {
            current.insert(key, value);
            changed = true;
        }
    }

    if changed {
        let serialized =
            serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, serialized)?;
    }

    Ok(changed)
}
