use crate::Priority;

use std::str::FromStr;

#[test]
fn test_priority_as_str() {
    assert_eq!(Priority::Low.as_str(), "low");
    assert_eq!(Priority::Medium.as_str(), "medium");
    assert_eq!(Priority::High.as_str(), "high");
}

#[test]
fn test_priority_from_str() {
    assert_eq!(Priority::from_str("low").unwrap(), Priority::Low);
    assert_eq!(Priority::from_str("high").unwrap(), Priority::High);
    assert!(Priority::from_str("critical").is_err());
}

#[test]
fn test_priority_default() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn test_priority_serializes_lowercase() {
    let json = serde_json::to_string(&Priority::High).unwrap();
    assert_eq!(json, "\"high\"");
}
