//! Serde support for `DateDetails`.

#![cfg(all(feature = "serde", feature = "date"))]

use polycurry::date::DateDetails;

#[test]
fn test_date_details_serializes_as_object() {
    let details = DateDetails {
        year: 2024,
        month: 6,
        date: 1,
    };
    let json = serde_json::to_value(details).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "year": 2024, "month": 6, "date": 1 })
    );
}

#[test]
fn test_date_details_deserializes() {
    let details: DateDetails =
        serde_json::from_str(r#"{ "year": 1970, "month": 1, "date": 1 }"#).unwrap();
    assert_eq!(details.format("{year}-{month}-{date}"), "1970-01-01");
}

#[test]
fn test_date_details_rejects_missing_field() {
    let result = serde_json::from_str::<DateDetails>(r#"{ "year": 1970, "month": 1 }"#);
    assert!(result.is_err());
}
