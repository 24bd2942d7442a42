//! Data models.
//!
//! This module contains the `Car` record and the options used to build it.

pub mod car;

pub use car::{Car, CarOptions};
