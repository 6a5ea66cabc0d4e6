//! JSON presets for [`WaveParameters`].

use std::fs;
use std::path::Path;

use super::water::WaveParameters;

/// Error loading or saving a preset file
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a preset from JSON text
///
/// Missing fields fall back to the built-in defaults.
pub fn from_json(text: &str) -> Result<WaveParameters, PresetError> {
    Ok(serde_json::from_str(text)?)
}

/// Serialize parameters as pretty-printed JSON
pub fn to_json(params: &WaveParameters) -> Result<String, PresetError> {
    Ok(serde_json::to_string_pretty(params)?)
}

/// Load a preset file
pub fn load(path: &Path) -> Result<WaveParameters, PresetError> {
    let text = fs::read_to_string(path)?;
    let params = from_json(&text)?;
    log::debug!("loaded preset from {}", path.display());
    Ok(params)
}

/// Write a preset file, replacing any existing one
pub fn save(path: &Path, params: &WaveParameters) -> Result<(), PresetError> {
    fs::write(path, to_json(params)?)?;
    log::debug!("saved preset to {}", path.display());
    Ok(())
}
