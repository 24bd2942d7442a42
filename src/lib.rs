//! Car Model - a small `Car` record with a fixed color registry.
//!
//! A `Car` holds a make, year, color and optional door count, always has four
//! wheels, and renders itself as `"<year> <make> (<color>)"`.
//!
//! # Architecture
//!
//! - **models**: The `Car` record and its construction options
//! - **domain**: The color registry and strict-validation errors
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use domain::{Color, ValidationError, COLORS};
pub use error::{CarError, ConfigError};
pub use models::{Car, CarOptions};
