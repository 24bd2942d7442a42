//! Domain validation errors.

use std::fmt;

/// Errors that can occur during strict validation of car attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided color is not in the color registry.
    UnknownColor(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColor(color) => write!(f, "Unknown color: {}", color),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_color_display() {
        let err = ValidationError::UnknownColor("purple".to_string());
        assert_eq!(err.to_string(), "Unknown color: purple");
    }
}
