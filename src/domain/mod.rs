//! Domain value objects and types.
//!
//! This module contains the color registry and the validation errors used
//! by the opt-in strict construction path.

pub mod color;
pub mod errors;

pub use color::{Color, COLORS};
pub use errors::ValidationError;
