//! The color registry.
//!
//! A fixed, process-wide list of color names. Cars store their color as a
//! plain string, so nothing here constrains what a car may hold; the
//! registry is only consulted by callers that ask for it.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Registered color names, in registry order.
pub const COLORS: [&str; 4] = ["blue", "black", "red", "green"];

/// Returns the registered color names.
///
/// # Example
///
/// ```
/// use car_model::domain::color;
///
/// assert!(color::colors().contains(&"green"));
/// ```
pub fn colors() -> &'static [&'static str] {
    &COLORS
}

/// Whether `name` is a registered color. Matching is exact and case-sensitive.
pub fn is_registered(name: &str) -> bool {
    COLORS.contains(&name)
}

/// A typed view of a registered color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    /// Every registered color, in registry order.
    pub const ALL: [Color; 4] = [Color::Blue, Color::Black, Color::Red, Color::Green];

    /// The registry name of this color.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
        }
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownColor(s.to_string()))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.as_str().to_string()
    }
}

// Serde support - serialize as the registry name
impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Serde support - deserialize from a registry name
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
