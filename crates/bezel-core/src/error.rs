//! Error types for specification lookup and configuration parsing.

use thiserror::Error;

/// Reasons a device specification could not be produced directly.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The identifier is not a preset, or `custom` was requested without a
    /// custom specification.
    #[error("unknown device type")]
    UnknownDeviceType {
        /// Identifier supplied by the caller.
        requested: String,
    },
    /// No specification was available where one was required.
    #[error("device specification missing")]
    MissingSpecification,
}

/// Errors raised while loading an emulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration payload was not valid JSON for the expected shape.
    #[error("failed to parse emulator configuration")]
    Parse {
        /// Underlying serde error.
        source: serde_json::Error,
    },
    /// A field held a value outside its accepted range.
    #[error("invalid configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn errors_display_and_expose_sources() {
        let parse = serde_json::from_str::<serde_json::Value>("{")
            .map_err(|source| ConfigError::Parse { source })
            .expect_err("invalid json");
        assert_eq!(parse.to_string(), "failed to parse emulator configuration");
        assert!(parse.source().is_some());

        let invalid = ConfigError::InvalidField {
            field: "scale",
            value: Some("0".to_string()),
            reason: "must be a positive finite number",
        };
        assert_eq!(invalid.to_string(), "invalid configuration field");
        assert!(invalid.source().is_none());

        let lookup = LookupError::UnknownDeviceType {
            requested: "foo".to_string(),
        };
        assert_eq!(lookup.to_string(), "unknown device type");
        assert_eq!(
            LookupError::MissingSpecification.to_string(),
            "device specification missing"
        );
    }
}
