//! Integration tests for the derived full name.

mod fixtures;

use car_model::{Car, CarOptions};
use fixtures::*;

#[test]
fn test_full_name_expected_format() {
    let honda = sample_honda();
    assert_eq!(honda.full_name(), "2007 Honda (blue)");
}

#[test]
fn test_full_name_with_no_arguments_uses_defaults() {
    let car = Car::new();
    assert_eq!(car.full_name(), "2007 Volvo (unknown)");
}

#[test]
fn test_full_name_is_not_cached() {
    let mut car = Car::new();
    let before = car.full_name();
    car.set_color("red");
    assert_eq!(before, "2007 Volvo (unknown)");
    assert_eq!(car.full_name(), "2007 Volvo (red)");
}

#[test]
fn test_full_name_with_partial_options() {
    let car = CarOptions::new().year(1985).color("green").build();
    assert_eq!(car.full_name(), "1985 Volvo (green)");
}

#[test]
fn test_full_name_ignores_doors() {
    let mut car = sample_honda();
    car.set_doors(2);
    assert_eq!(car.full_name(), "2007 Honda (blue)");
}

#[test]
fn test_display_uses_full_name() {
    let car = sample_honda();
    assert_eq!(format!("{}", car), "2007 Honda (blue)");
}

#[test]
fn test_full_name_survives_json_round_trip() {
    let mut car = sample_honda();
    car.set_doors(4);
    let json = serde_json::to_string(&car).unwrap();
    let restored: Car = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, car);
    assert_eq!(restored.full_name(), "2007 Honda (blue)");
}
