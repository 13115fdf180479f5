//! Tracker configuration.
//!
//! The only configurable surface is the open/close marker-name pair that
//! overrides pure timeout-based closure with explicit boundary semantics.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Default open-marker event name.
pub const DEFAULT_OPEN_MARKER: &str = "CHECK_OPEN";

/// Default close-marker event name.
pub const DEFAULT_CLOSE_MARKER: &str = "CHECK_CLOSE";

/// Marker-name configuration for a session tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Event name that holds a session open until countered.
    pub open_marker: String,

    /// Event name that counters the open marker and releases closure.
    pub close_marker: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            open_marker: DEFAULT_OPEN_MARKER.to_string(),
            close_marker: DEFAULT_CLOSE_MARKER.to_string(),
        }
    }
}

impl TrackerConfig {
    /// Creates a configuration with custom marker names.
    pub fn with_markers(
        open_marker: impl Into<String>,
        close_marker: impl Into<String>,
    ) -> Self {
        Self {
            open_marker: open_marker.into(),
            close_marker: close_marker.into(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if either marker name is empty or whitespace-only
    /// - `InvalidValue` if both marker names are identical
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.open_marker.trim().is_empty() {
            return Err(ValidationError::empty_field("open_marker"));
        }
        if self.close_marker.trim().is_empty() {
            return Err(ValidationError::empty_field("close_marker"));
        }
        if self.open_marker == self.close_marker {
            return Err(ValidationError::invalid_value(
                "close_marker",
                "must differ from open_marker",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_check_markers() {
        let config = TrackerConfig::default();
        assert_eq!(config.open_marker, "CHECK_OPEN");
        assert_eq!(config.close_marker, "CHECK_CLOSE");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_markers_validate() {
        let config = TrackerConfig::with_markers("SHIFT_START", "SHIFT_END");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_open_marker_is_rejected() {
        let config = TrackerConfig::with_markers("", "CHECK_CLOSE");
        assert_eq!(
            config.validate(),
            Err(ValidationError::empty_field("open_marker"))
        );
    }

    #[test]
    fn empty_close_marker_is_rejected() {
        let config = TrackerConfig::with_markers("CHECK_OPEN", "  ");
        assert_eq!(
            config.validate(),
            Err(ValidationError::empty_field("close_marker"))
        );
    }

    #[test]
    fn identical_markers_are_rejected() {
        let config = TrackerConfig::with_markers("CHECK", "CHECK");
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: TrackerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn config_deserializes_custom_markers() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{"open_marker":"IN","close_marker":"OUT"}"#).unwrap();
        assert_eq!(config.open_marker, "IN");
        assert_eq!(config.close_marker, "OUT");
    }
}
