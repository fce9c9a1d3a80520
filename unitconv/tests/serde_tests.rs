//! Serialization tests; run with `--features serde`.
#![cfg(feature = "serde")]

use unitconv::registry::{AnyUnit, DomainKind};
use unitconv::*;

use serde::{Deserialize, Serialize};

#[test]
fn units_serialize_as_canonical_symbol() {
    assert_eq!(serde_json::to_string(&Speed::KilometreHour).unwrap(), "\"km/h\"");
    assert_eq!(serde_json::to_string(&Temperature::Celsius).unwrap(), "\"C\"");
}

#[test]
fn units_deserialize_from_any_alias() {
    let knot: Speed = serde_json::from_str("\"knots\"").unwrap();
    assert_eq!(knot, Speed::Knot);
    let minute: Time = serde_json::from_str("\"m\"").unwrap();
    assert_eq!(minute, Time::Minute);
}

#[test]
fn unknown_symbol_is_a_deserialization_error() {
    let err = serde_json::from_str::<Mass>("\"stone\"").unwrap_err();
    assert!(err.to_string().contains("stone"));
}

#[test]
fn quantity_round_trip() {
    let q = Quantity::new(12.5, Distance::NauticalMile);
    let json = serde_json::to_string(&q).unwrap();
    let back: Quantity<Distance> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);
}

#[test]
fn any_unit_is_tagged_with_domain() {
    let unit = AnyUnit::from(Pressure::Atmosphere);
    let json = serde_json::to_value(unit).unwrap();
    assert_eq!(json, serde_json::json!({ "domain": "pressure", "unit": "atm" }));
    let back: AnyUnit = serde_json::from_value(json).unwrap();
    assert_eq!(back, unit);
}

#[test]
fn domain_kind_is_lowercase() {
    assert_eq!(serde_json::to_string(&DomainKind::Volume).unwrap(), "\"volume\"");
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Reading {
    sensor: String,
    temperature: Quantity<Temperature>,
    wind: Quantity<Speed>,
}

#[test]
fn nested_in_user_struct() {
    let json = r#"{
        "sensor": "mast-2",
        "temperature": { "value": 71.6, "unit": "°F" },
        "wind": { "value": 14.0, "unit": "kt" }
    }"#;
    let reading: Reading = serde_json::from_str(json).unwrap();
    assert_eq!(reading.temperature.unit(), Temperature::Fahrenheit);
    assert_eq!(reading.wind.unit(), Speed::Knot);
}
