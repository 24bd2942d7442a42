//! Integration tests for the color registry.

use car_model::domain::color;
use car_model::{Car, CarOptions, Color, ValidationError};
use std::collections::HashSet;

fn expected_colors() -> HashSet<&'static str> {
    ["blue", "black", "red", "green"].into_iter().collect()
}

#[test]
fn test_colors_returns_color_names() {
    let colors: HashSet<&str> = Car::colors().iter().copied().collect();
    assert_eq!(colors, expected_colors());
    assert_eq!(Car::colors().len(), 4);
}

#[test]
fn test_colors_is_stable_and_instance_independent() {
    let first = Car::colors();
    let mut car = Car::new();
    car.set_color("purple");
    assert_eq!(Car::colors(), first);
    assert_eq!(color::colors(), first);
}

#[test]
fn test_typed_colors_cover_registry() {
    let typed: HashSet<&str> = Color::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(typed, expected_colors());
}

#[test]
fn test_every_registered_color_passes_strict_construction() {
    for name in Car::colors() {
        let car = CarOptions::new().color(*name).build_strict().unwrap();
        assert_eq!(car.color(), *name);
        assert!(car.has_registered_color());
    }
}

#[test]
fn test_strict_construction_rejects_unregistered_color() {
    let result = CarOptions::new().color("Red").build_strict();
    assert_eq!(result, Err(ValidationError::UnknownColor("Red".to_string())));
}

#[test]
fn test_lenient_construction_accepts_unregistered_color() {
    let car = CarOptions::new().color("Red").build();
    assert_eq!(car.color(), "Red");
    assert!(!car.has_registered_color());
}

#[test]
fn test_default_color_is_not_registered() {
    assert!(!Car::new().has_registered_color());
}
