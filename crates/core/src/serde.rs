//! Serde helper functions for query-string and form deserialization.
//!
//! These functions handle the quirks of HTML form submissions where
//! empty strings should be treated as None for optional fields.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::events::parse_tag_list;

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional NaiveDate, treating empty strings as None.
/// Expects format: YYYY-MM-DD
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Deserialize an optional number sent as text, treating empty strings as None.
pub fn deserialize_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Deserialize a comma-separated tag list such as `"free, family"`.
/// Missing or empty values give an empty list.
pub fn deserialize_tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| parse_tag_list(&s)).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test struct that uses the deserializer functions
    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_date")]
        date_field: Option<NaiveDate>,
        #[serde(default, deserialize_with = "deserialize_optional_number")]
        number_field: Option<f64>,
        #[serde(default, deserialize_with = "deserialize_tag_list")]
        tags_field: Vec<String>,
    }

    #[test]
    fn test_deserialize_optional_string_empty() {
        let json = r#"{"string_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_whitespace() {
        let json = r#"{"string_field": "   "}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_value() {
        let json = r#"{"string_field": "hello"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.string_field, Some("hello".to_string()));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let result: TestStruct = serde_json::from_str("{}").unwrap();
        assert_eq!(result.string_field, None);
        assert_eq!(result.date_field, None);
        assert_eq!(result.number_field, None);
        assert!(result.tags_field.is_empty());
    }

    #[test]
    fn test_deserialize_optional_date_valid() {
        let json = r#"{"date_field": "2025-06-07"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.date_field,
            Some(NaiveDate::from_ymd_opt(2025, 6, 7).unwrap())
        );
    }

    #[test]
    fn test_deserialize_optional_date_empty() {
        let json = r#"{"date_field": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.date_field, None);
    }

    #[test]
    fn test_deserialize_optional_date_invalid() {
        let json = r#"{"date_field": "not-a-date"}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_optional_number() {
        let result: TestStruct = serde_json::from_str(r#"{"number_field": "10"}"#).unwrap();
        assert_eq!(result.number_field, Some(10.0));

        let result: TestStruct = serde_json::from_str(r#"{"number_field": ""}"#).unwrap();
        assert_eq!(result.number_field, None);

        let result: Result<TestStruct, _> = serde_json::from_str(r#"{"number_field": "ten"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_tag_list() {
        let json = r#"{"tags_field": "Family, outdoors,,"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.tags_field, vec!["Family", "outdoors"]);
    }
}
