//! Configuration file upgrades: detect keys missing from an older
//! `rcheckin.conf` and fill them with defaults, keeping user values.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Dotted paths (`store.table`) present in the defaults but absent from `current`.
fn collect_missing(defaults: &Mapping, current: &Mapping, prefix: &str, out: &mut Vec<String>) {
    for (key, default_val) in defaults {
        let name = key.as_str().unwrap_or_default();
        let full = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match (current.get(key), default_val) {
            (None, _) => out.push(full),
            (Some(Value::Mapping(cur)), Value::Mapping(def)) => {
                collect_missing(def, cur, &full, out)
            }
            _ => {}
        }
    }
}

/// Insert defaults for missing keys, recursively. Existing values win.
fn merge_defaults(defaults: &Mapping, current: &mut Mapping) {
    for (key, default_val) in defaults {
        match current.get_mut(key) {
            None => {
                current.insert(key.clone(), default_val.clone());
            }
            Some(Value::Mapping(cur)) => {
                if let Value::Mapping(def) = default_val {
                    merge_defaults(def, cur);
                }
            }
            Some(_) => {}
        }
    }
}

fn defaults_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(format!("cannot serialize defaults: {e}")))?;
    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("defaults are not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::ConfigLoad("top level is not a mapping".into())),
        Err(e) => Err(AppError::ConfigLoad(e.to_string())),
    }
}

/// List configuration keys missing from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let mut out = Vec::new();
    collect_missing(&defaults_mapping()?, &current, "", &mut out);
    Ok(out)
}

/// Rewrite the file at `path` with every missing key set to its default.
/// Returns the keys that were added.
pub fn migrate_config(path: &Path) -> AppResult<Vec<String>> {
    let added = missing_fields(path)?;
    if added.is_empty() {
        return Ok(added);
    }

    let mut current = read_mapping(path)?;
    merge_defaults(&defaults_mapping()?, &mut current);

    let serialized = serde_yaml::to_string(&Value::Mapping(current))
        .map_err(|e| AppError::ConfigSave(e.to_string()))?;
    fs::write(path, serialized).map_err(|e| AppError::ConfigSave(e.to_string()))?;

    Ok(added)
}
