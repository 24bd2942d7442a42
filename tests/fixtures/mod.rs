//! Test fixtures and sample cars.
//!
//! This module provides reusable cars for the integration tests.

use car_model::{Car, CarOptions};

/// A Honda built with every option supplied.
pub fn sample_honda() -> Car {
    CarOptions::new()
        .make("Honda")
        .year(2007)
        .color("blue")
        .build()
}

/// A car with the attributes the "has attributes" examples assign.
#[allow(dead_code)]
pub fn sample_dodge() -> Car {
    let mut car = Car::new();
    car.set_make("Dodge");
    car.set_year(2008);
    car.set_color("red");
    car
}

/// Assert that `car` reports `name` with `value` among its attributes.
#[allow(dead_code)]
pub fn assert_has_attribute(car: &Car, name: &str, value: &str) {
    let attributes = car.attributes();
    assert!(
        attributes.iter().any(|(n, v)| *n == name && v == value),
        "expected attribute {} = {:?}, got {:?}",
        name,
        value,
        attributes
    );
}
