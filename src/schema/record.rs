//! Raw form values and the validated record

use super::field::Role;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unvalidated values as typed into the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    /// Insertion-ordered, duplicate-free
    pub preferences: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

/// A record that passed every rule of the schema it was validated against.
///
/// Optional members are `None` exactly when the schema variant leaves the
/// field out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_date_accepts_iso_dates() {
        assert_eq!(parse_date("2024-05-10"), NaiveDate::from_ymd_opt(2024, 5, 10));
        assert_eq!(parse_date(" 2024-05-10 "), NaiveDate::from_ymd_opt(2024, 5, 10));
    }

    #[test]
    fn test_parse_date_rejects_impossible_and_malformed_dates() {
        assert!(parse_date("").is_none());
        assert!(parse_date("2024-02-30").is_none());
        assert!(parse_date("2024-13-01").is_none());
        assert!(parse_date("10/05/2024").is_none());
        assert!(parse_date("tomorrow").is_none());
    }

    #[test]
    fn test_parse_date_accepts_leap_day() {
        assert!(parse_date("2024-02-29").is_some());
        assert!(parse_date("2023-02-29").is_none());
    }

    #[test]
    fn test_record_serializes_with_camel_case_and_iso_dates() {
        let record = FormRecord {
            name: "Aiko".to_string(),
            email: "aiko@example.com".to_string(),
            password: "secret1".to_string(),
            role: Some(Role::User),
            preferences: Some(vec!["music".to_string()]),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 10),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Aiko",
                "email": "aiko@example.com",
                "password": "secret1",
                "role": "user",
                "preferences": ["music"],
                "startDate": "2024-05-01",
                "endDate": "2024-05-10",
            })
        );
    }

    #[test]
    fn test_record_omits_fields_outside_the_variant() {
        let record = FormRecord {
            name: "Aiko".to_string(),
            email: "aiko@example.com".to_string(),
            password: "secret1".to_string(),
            role: None,
            preferences: None,
            start_date: None,
            end_date: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        assert!(json.get("role").is_none());
        assert!(json.get("startDate").is_none());
    }
}
