use crate::error::{IntakeError, Result};
use crate::types::config::IntakeConfig;
use crate::types::scoring::SUB_SCORE_KEYS;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "intake.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".intake/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/intake/config.toml";

pub fn load_config(root: &Path) -> Result<IntakeConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges global, repository and local files in that order; later layers win.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<IntakeConfig> {
    if !root.is_dir() {
        return Err(IntakeError::PathNotFound(root.display().to_string()));
    }

    let layers = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)]);

    let mut merged = Map::new();
    for layer in layers.filter(|path| path.exists()) {
        debug!(path = %layer.display(), "merging config layer");
        overlay(&mut merged, read_layer(&layer)?);
    }

    let cfg: IntakeConfig = Value::Table(merged).try_into()?;
    cfg.validate()?;
    Ok(cfg)
}

/// Parses one layer and rejects weight keys no sub-score uses, naming the file.
fn read_layer(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path)?;
    let table: Map<String, Value> = toml::from_str(&content)
        .map_err(|e| IntakeError::ConfigParse(format!("{}: {}", path.display(), e)))?;

    if let Some(Value::Table(weights)) = table.get("weights") {
        if let Some(key) = weights
            .keys()
            .find(|key| !SUB_SCORE_KEYS.contains(&key.as_str()))
        {
            return Err(IntakeError::InvalidWeights(format!(
                "{}: unknown key weights.{key}",
                path.display()
            )));
        }
    }
    Ok(table)
}

/// Later layers replace scalars and extend tables key by key.
fn overlay(base: &mut Map<String, Value>, layer: Map<String, Value>) {
    for (key, value) in layer {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(existing)), Value::Table(nested)) => overlay(existing, nested),
            (Some(slot), value) => *slot = value,
            (None, value) => {
                base.insert(key, value);
            }
        }
    }
}
