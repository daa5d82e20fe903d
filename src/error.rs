//! Configuration errors
//!
//! Raised once, when a round is constructed. A missed throw is a game outcome
//! and never surfaces here.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Fewer than two segment colors configured
    TooFewColors { count: usize },
    /// A value that must be strictly positive
    NonPositive { field: &'static str, value: f32 },
    /// A value outside its inclusive range
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    /// Base rotation speed above the configured maximum
    SpeedExceedsMax { speed: f32, max: f32 },
    /// Malformed JSON
    Parse(String),
    /// Config file could not be read
    Io(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewColors { count } => {
                write!(f, "target needs at least 2 colors, got {count}")
            }
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field} must be within [{min}, {max}], got {value}"),
            Self::SpeedExceedsMax { speed, max } => write!(
                f,
                "rotation_speed {speed} exceeds max_rotation_speed {max}"
            ),
            Self::Parse(msg) => write!(f, "invalid config: {msg}"),
            Self::Io(msg) => write!(f, "cannot read config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ConfigError::TooFewColors { count: 1 }.to_string(),
            "target needs at least 2 colors, got 1"
        );
        assert_eq!(
            ConfigError::NonPositive {
                field: "target_radius",
                value: 0.0
            }
            .to_string(),
            "target_radius must be positive, got 0"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(ConfigError::from(err), ConfigError::Parse(_)));
    }
}
