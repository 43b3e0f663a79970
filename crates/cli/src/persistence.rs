use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const NAMES_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedNames {
    pub version: u32,
    #[serde(default)]
    pub player_one: Option<String>,
    #[serde(default)]
    pub player_two: Option<String>,
}

pub fn default_names_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("TABLETALK_NAMES") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".tabletalk_names.json"))
}

pub fn save_names_file(
    player_one: Option<&str>,
    player_two: Option<&str>,
    path: &Path,
) -> Result<(), String> {
    let payload = SavedNames {
        version: NAMES_SCHEMA_VERSION,
        player_one: player_one.map(str::to_string),
        player_two: player_two.map(str::to_string),
    };
    let body = serde_json::to_string_pretty(&payload).map_err(|err| err.to_string())?;
    fs::write(path, body).map_err(|err| err.to_string())
}

pub fn load_names_file(path: &Path) -> Result<SavedNames, String> {
    let body = fs::read_to_string(path).map_err(|err| err.to_string())?;
    let payload: SavedNames = serde_json::from_str(&body).map_err(|err| err.to_string())?;
    if payload.version != NAMES_SCHEMA_VERSION {
        return Err(format!(
            "unsupported names version {} (expected {})",
            payload.version, NAMES_SCHEMA_VERSION
        ));
    }
    Ok(payload)
}
