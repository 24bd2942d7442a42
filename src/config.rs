//! Configuration management for the car model binary.
//!
//! This module handles loading and validating configuration from environment variables,
//! reading a `.env` file first if one is present. The `Car` type itself takes no
//! configuration; these settings only describe which car the binary prints and how.

use crate::error::{CarResult, ConfigError, ConfigResult};
use crate::models::{Car, CarOptions};
use std::env;
use std::str::FromStr;

/// How the binary renders a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The car's full name
    #[default]
    Text,
    /// The car's JSON form
    Json,
}

impl OutputFormat {
    /// Render `car` in this format.
    pub fn render(self, car: &Car) -> CarResult<String> {
        match self {
            Self::Text => Ok(car.full_name()),
            Self::Json => Ok(serde_json::to_string(car)?),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Must be \"text\" or \"json\", got: {}", other)),
        }
    }
}

/// Configuration for the car model binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Make to build the car with (default: car default)
    pub make: Option<String>,

    /// Year to build the car with (default: car default)
    pub year: Option<i32>,

    /// Color to build the car with (default: car default)
    pub color: Option<String>,

    /// Door count to set after building (default: unset)
    pub doors: Option<u32>,

    /// Reject colors outside the registry (default: false)
    pub strict_colors: bool,

    /// Output format (default: text)
    pub output: OutputFormat,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CAR_MAKE`: Make of the car
    /// - `CAR_YEAR`: Model year, an integer
    /// - `CAR_COLOR`: Color, any string unless strict
    /// - `CAR_DOORS`: Number of doors
    /// - `CAR_STRICT_COLORS`: Reject unregistered colors (default: false)
    /// - `CAR_OUTPUT`: `text` or `json` (default: text)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let make = Self::env_string("CAR_MAKE");
        let year = Self::parse_env_i32("CAR_YEAR")?;
        let color = Self::env_string("CAR_COLOR");
        let doors = Self::parse_env_u32("CAR_DOORS")?;
        let strict_colors = Self::parse_env_bool("CAR_STRICT_COLORS", false)?;

        let output = match env::var("CAR_OUTPUT") {
            Ok(val) => val
                .parse::<OutputFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "CAR_OUTPUT".to_string(),
                    reason,
                })?,
            Err(_) => OutputFormat::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        tracing::debug!(strict_colors, ?output, "Configuration parsed");

        Ok(Config {
            make,
            year,
            color,
            doors,
            strict_colors,
            output,
            log_level,
        })
    }

    /// The construction options described by this configuration.
    pub fn car_options(&self) -> CarOptions {
        CarOptions {
            make: self.make.clone(),
            year: self.year,
            color: self.color.clone(),
        }
    }

    /// Build the configured car, strictly if `strict_colors` is set.
    pub fn build_car(&self) -> CarResult<Car> {
        let options = self.car_options();
        let mut car = if self.strict_colors {
            options.build_strict()?
        } else {
            options.build()
        };
        if let Some(doors) = self.doors {
            car.set_doors(doors);
        }
        Ok(car)
    }

    /// Read an environment variable, treating empty values as unset.
    fn env_string(var_name: &str) -> Option<String> {
        env::var(var_name).ok().filter(|val| !val.is_empty())
    }

    /// Parse an optional environment variable as i32.
    fn parse_env_i32(var_name: &str) -> ConfigResult<Option<i32>> {
        match Self::env_string(var_name) {
            Some(val) => val
                .trim()
                .parse::<i32>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be an integer, got: {}", val),
                }),
            None => Ok(None),
        }
    }

    /// Parse an optional environment variable as u32.
    fn parse_env_u32(var_name: &str) -> ConfigResult<Option<u32>> {
        match Self::env_string(var_name) {
            Some(val) => val
                .trim()
                .parse::<u32>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a non-negative number, got: {}", val),
                }),
            None => Ok(None),
        }
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match Self::env_string(var_name) {
            Some(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true/false or 1/0, got: {}", val),
                }),
            },
            None => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            make: None,
            year: None,
            color: None,
            doors: None,
            strict_colors: false,
            output: OutputFormat::Text,
            log_level: "error".to_string(),
        }
    }
}
