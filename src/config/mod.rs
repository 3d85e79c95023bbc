//! Dictionary settings
/// Settings file loader
mod loader;
/// Settings types and validation
mod types;

pub use loader::load_settings;
pub use types::{
    ConfigError,
    DictionarySettings,
    MissingKeyLog,
    ValidationError,
};
