//! Settings file loader

use std::path::Path;

use super::{
    ConfigError,
    DictionarySettings,
};

/// Loads and validates dictionary settings from a JSON file.
///
/// Missing fields take their defaults.
///
/// # Errors
/// - File read error
/// - JSON parse error
/// - Validation error
pub fn load_settings(path: &Path) -> Result<DictionarySettings, ConfigError> {
    tracing::debug!("Loading dictionary settings from: {:?}", path);

    let content = std::fs::read_to_string(path)?;
    let settings: DictionarySettings = serde_json::from_str(&content)?;
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    tracing::debug!("Dictionary settings loaded: {:?}", settings);
    Ok(settings)
}
