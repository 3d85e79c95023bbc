use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::path::DEFAULT_SEPARATOR;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "keySeparator")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Renders validation errors as a numbered list.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// How a lookup miss in `t` is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingKeyLog {
    Off,
    #[default]
    Debug,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictionarySettings {
    /// Separator between path segments.
    pub key_separator: String,

    /// Log level for paths that fall back to the placeholder echo.
    pub missing_keys: MissingKeyLog,
}

impl DictionarySettings {
    /// # Errors
    /// - Empty key separator
    /// - Key separator containing placeholder braces
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.key_separator.contains(['{', '}']) {
            errors.push(ValidationError::new(
                "keySeparator",
                format!(
                    "The separator '{}' cannot contain '{{' or '}}', which delimit placeholders",
                    self.key_separator
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for DictionarySettings {
    fn default() -> Self {
        Self { key_separator: DEFAULT_SEPARATOR.to_string(), missing_keys: MissingKeyLog::default() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = DictionarySettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"keySeparator": ":"}"#;

        let settings: DictionarySettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.key_separator, eq(":"));
        assert_that!(settings.missing_keys, eq(MissingKeyLog::Debug));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let settings: DictionarySettings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings, DictionarySettings::default());
    }

    #[rstest]
    #[case(r#"{"missingKeys": "off"}"#, MissingKeyLog::Off)]
    #[case(r#"{"missingKeys": "debug"}"#, MissingKeyLog::Debug)]
    #[case(r#"{"missingKeys": "warn"}"#, MissingKeyLog::Warn)]
    fn deserialize_missing_keys(#[case] json: &str, #[case] expected: MissingKeyLog) {
        let settings: DictionarySettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.missing_keys, eq(expected));
    }

    #[rstest]
    fn deserialize_unknown_missing_keys_level() {
        let result = serde_json::from_str::<DictionarySettings>(r#"{"missingKeys": "loud"}"#);

        assert_that!(result, err(anything()));
    }

    #[rstest]
    fn validate_invalid_key_separator_empty() {
        let settings =
            DictionarySettings { key_separator: String::new(), ..DictionarySettings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("keySeparator")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    #[case("{")]
    #[case("}.")]
    fn validate_invalid_key_separator_brace(#[case] separator: &str) {
        let settings = DictionarySettings {
            key_separator: separator.to_string(),
            ..DictionarySettings::default()
        };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("keySeparator")),
                field!(ValidationError.message, contains_substring("delimit placeholders"))
            ]])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let errors = vec![
            ValidationError::new("keySeparator", "The separator cannot be empty"),
            ValidationError::new("missingKeys", "Unknown level"),
        ];
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. keySeparator - The separator cannot be empty"));
        assert_that!(error_message, contains_substring("2. missingKeys - Unknown level"));
    }
}
