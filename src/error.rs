use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while constructing a [`Dictionary`](crate::Dictionary).
///
/// Lookups never fail; these only surface once, at startup.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The root handed to the constructor was not a mapping.
    #[error("Dictionary root must be a mapping, found {found}")]
    RootNotMapping {
        /// Kind of value that was supplied instead (e.g. "string", "array").
        found: &'static str,
    },

    /// The root document was not valid JSON.
    #[error("Failed to parse dictionary document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The dictionary settings were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
