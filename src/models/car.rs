//! Car model: a mutable record with per-field defaults and a derived display name.

use crate::domain::color::{self, COLORS};
use crate::domain::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default make for a car built without one.
pub const DEFAULT_MAKE: &str = "Volvo";

/// Default model year for a car built without one.
pub const DEFAULT_YEAR: i32 = 2007;

/// Default color for a car built without one. Not a registered color.
pub const DEFAULT_COLOR: &str = "unknown";

/// Every car has exactly this many wheels.
pub const WHEELS: u8 = 4;

/// A car.
///
/// `make`, `year`, `color` and `doors` are freely readable and writable.
/// `wheels` is fixed at 4 and has no setter. `color` is stored as given;
/// use [`Car::set_color_strict`] or [`CarOptions::build_strict`] when the
/// value must come from the color registry.
///
/// # Example
///
/// ```
/// use car_model::{Car, CarOptions};
///
/// let mut car = CarOptions::new().make("Honda").color("blue").build();
/// assert_eq!(car.full_name(), "2007 Honda (blue)");
///
/// car.set_color("red");
/// assert_eq!(car.full_name(), "2007 Honda (red)");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Car {
    make: String,

    year: i32,

    color: String,

    /// Always [`WHEELS`]; any incoming value is ignored.
    #[serde(skip_deserializing)]
    wheels: u8,

    #[serde(skip_serializing_if = "Option::is_none")]
    doors: Option<u32>,
}

impl Car {
    /// Create a car with every attribute at its default.
    pub fn new() -> Self {
        Self::with_options(CarOptions::default())
    }

    /// Create a car from a partial set of options.
    ///
    /// Each omitted option falls back to its own default.
    pub fn with_options(options: CarOptions) -> Self {
        Self {
            make: options.make.unwrap_or_else(|| DEFAULT_MAKE.to_string()),
            year: options.year.unwrap_or(DEFAULT_YEAR),
            color: options.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            wheels: WHEELS,
            doors: None,
        }
    }

    /// The registered color names.
    pub fn colors() -> &'static [&'static str] {
        &COLORS
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn set_make(&mut self, make: impl Into<String>) {
        self.make = make.into();
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Set the color. Any string is accepted.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Set the color only if it is registered.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownColor` and leaves the car unchanged
    /// if `color` is not in the registry.
    pub fn set_color_strict(&mut self, color: impl Into<String>) -> Result<(), ValidationError> {
        let color = color.into();
        if !color::is_registered(&color) {
            tracing::debug!(color = %color, "Rejected unregistered color");
            return Err(ValidationError::UnknownColor(color));
        }
        self.color = color;
        Ok(())
    }

    /// Whether the current color is in the registry.
    pub fn has_registered_color(&self) -> bool {
        color::is_registered(&self.color)
    }

    pub fn wheels(&self) -> u8 {
        self.wheels
    }

    pub fn doors(&self) -> Option<u32> {
        self.doors
    }

    pub fn set_doors(&mut self, doors: u32) {
        self.doors = Some(doors);
    }

    pub fn clear_doors(&mut self) {
        self.doors = None;
    }

    /// `"<year> <make> (<color>)"` from the current attribute values.
    pub fn full_name(&self) -> String {
        format!("{} {} ({})", self.year, self.make, self.color)
    }

    /// Attribute names and their current values rendered as strings.
    ///
    /// `doors` is only listed once it has been set.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attributes = vec![
            ("make", self.make.clone()),
            ("year", self.year.to_string()),
            ("color", self.color.clone()),
            ("wheels", self.wheels.to_string()),
        ];
        if let Some(doors) = self.doors {
            attributes.push(("doors", doors.to_string()));
        }
        attributes
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.year, self.make, self.color)
    }
}

/// Construction options for a [`Car`]. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CarOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn build(self) -> Car {
        Car::with_options(self)
    }

    /// Build a car, rejecting a supplied color that is not registered.
    ///
    /// An omitted color is accepted and takes the default.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownColor` for an unregistered color.
    pub fn build_strict(self) -> Result<Car, ValidationError> {
        if let Some(color) = self.color.as_deref() {
            if !color::is_registered(color) {
                tracing::debug!(color = %color, "Rejected unregistered color option");
                return Err(ValidationError::UnknownColor(color.to_string()));
            }
        }
        Ok(self.build())
    }
}
