use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::MapsizeError;

/// Flat settings file. Keys are accepted in camelCase (JSON/YAML) or
/// snake_case (TOML).
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MapsizeConfig {
    pub top: Option<usize>,
    pub csv: Option<String>,
    pub notes: Option<bool>,
    #[serde(alias = "show_stats")]
    pub show_stats: Option<bool>,
    pub verbose: Option<bool>,
}

/// A config plus the file it came from, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: MapsizeConfig,
    pub path: Option<PathBuf>,
}

pub fn discover_config_path(root: &Path) -> Option<PathBuf> {
    let names = [
        "mapsize.toml",
        "mapsize.config.json",
        "mapsize.config.json5",
        "mapsize.config.yaml",
        "mapsize.config.yml",
        ".mapsizerc",
        ".mapsizerc.json",
        ".mapsizerc.yaml",
        ".mapsizerc.yml",
    ];
    names
        .into_iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

pub fn load_mapsize_config(root: &Path) -> Result<LoadedConfig, MapsizeError> {
    if let Some(path) = discover_config_path(root) {
        let config = load_mapsize_config_from_path(&path)?;
        return Ok(LoadedConfig {
            config,
            path: Some(path),
        });
    }

    let cargo_toml_path = root.join("Cargo.toml");
    if cargo_toml_path.is_file() {
        if let Some(config) = load_cargo_metadata_config(&cargo_toml_path)? {
            return Ok(LoadedConfig {
                config,
                path: Some(cargo_toml_path),
            });
        }
    }

    Ok(LoadedConfig::default())
}

pub fn load_mapsize_config_from_path(path: &Path) -> Result<MapsizeConfig, MapsizeError> {
    let ext = path
        .extension()
        .and_then(|x| x.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        // `.mapsizerc` has no extension and is read as JSON, like the `.json` variant.
        "json" | "json5" | "" => load_json_config(path),
        "yaml" | "yml" => load_yaml_config(path),
        "toml" => load_toml_config(path),
        _ => Err(config_parse_error(path, "unsupported config extension")),
    }
}

fn config_parse_error(path: &Path, message: impl ToString) -> MapsizeError {
    MapsizeError::ConfigParse {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

fn read_config_text(path: &Path) -> Result<String, MapsizeError> {
    std::fs::read_to_string(path).map_err(|source| MapsizeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn load_json_config(path: &Path) -> Result<MapsizeConfig, MapsizeError> {
    let raw = read_config_text(path)?;
    json5::from_str::<MapsizeConfig>(&raw)
        .or_else(|_| serde_json::from_str::<MapsizeConfig>(&raw))
        .map_err(|err| config_parse_error(path, err))
}

fn load_yaml_config(path: &Path) -> Result<MapsizeConfig, MapsizeError> {
    let raw = read_config_text(path)?;
    serde_yaml::from_str::<MapsizeConfig>(&raw).map_err(|err| config_parse_error(path, err))
}

fn load_toml_config(path: &Path) -> Result<MapsizeConfig, MapsizeError> {
    let raw = read_config_text(path)?;
    toml::from_str::<MapsizeConfig>(&raw).map_err(|err| config_parse_error(path, err))
}

// `[package.metadata.mapsize]`; `None` when the manifest has no such table.
fn load_cargo_metadata_config(path: &Path) -> Result<Option<MapsizeConfig>, MapsizeError> {
    let raw = read_config_text(path)?;
    let manifest =
        toml::from_str::<toml::Value>(&raw).map_err(|err| config_parse_error(path, err))?;
    let Some(table) = manifest
        .get("package")
        .and_then(|package| package.get("metadata"))
        .and_then(|metadata| metadata.get("mapsize"))
    else {
        return Ok(None);
    };
    table
        .clone()
        .try_into::<MapsizeConfig>()
        .map(Some)
        .map_err(|err| config_parse_error(path, err))
}
