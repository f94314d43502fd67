use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

use super::API_PREFIX;

/// Path segment of a resource route: either `all` or a primary key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceId {
    All,
    One(i32),
    /// Anything else; matches no row
    Unknown(String),
}

impl ResourceId {
    pub fn parse(raw: &str) -> Self {
        if raw == "all" {
            return Self::All;
        }

        match raw.parse::<i32>() {
            Ok(id) => Self::One(id),
            Err(_) => Self::Unknown(raw.to_string()),
        }
    }

    /// The id to mutate, or `None` when the segment cannot name a row
    pub fn row_id(&self) -> Option<i32> {
        match self {
            Self::One(id) => Some(*id),
            _ => None,
        }
    }
}

/// GET on `<id|all>` answers with either one representation or the full list
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

pub fn resource_uri(collection: &str, id: i32) -> String {
    format!("{}/{}/{}", API_PREFIX, collection, id)
}

pub fn not_found(entity: &str, raw_id: &str) -> AppError {
    AppError::NotFound(format!("{} with ID '{}' not found", entity, raw_id))
}

/// Only the text `true`, in any case, counts as true
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.to_lowercase() == "true",
        _ => false,
    }
}

pub fn deserialize_truthy<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_null()).map(|v| is_truthy(&v)))
}

/// Accepts exactly `YYYY-MM-DD`; chrono alone would take unpadded or space-led input
pub fn parse_release_date(raw: &str) -> Result<NaiveDate> {
    let well_formed = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(AppError::InvalidInput(format!(
            "release_date '{}' is not an ISO-8601 date (YYYY-MM-DD)",
            raw
        )));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
        AppError::InvalidInput(format!(
            "release_date '{}' is not an ISO-8601 date: {}",
            raw, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resource_id_recognizes_all_and_numbers() {
        assert_eq!(ResourceId::parse("all"), ResourceId::All);
        assert_eq!(ResourceId::parse("42"), ResourceId::One(42));
        assert_eq!(
            ResourceId::parse("abc"),
            ResourceId::Unknown("abc".to_string())
        );
        assert_eq!(ResourceId::parse("ALL").row_id(), None);
    }

    #[test]
    fn truthy_only_accepts_true() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("true")));
        assert!(is_truthy(&json!("TRUE")));
        assert!(!is_truthy(&json!("yes")));
        assert!(!is_truthy(&json!(1)));
        assert!(!is_truthy(&json!(false)));
    }

    #[test]
    fn truthy_field_treats_null_as_absent() {
        #[derive(Deserialize)]
        struct Payload {
            #[serde(default, deserialize_with = "deserialize_truthy")]
            explicit: Option<bool>,
        }

        let absent: Payload = serde_json::from_value(json!({})).unwrap();
        let null: Payload = serde_json::from_value(json!({ "explicit": null })).unwrap();
        let text: Payload = serde_json::from_value(json!({ "explicit": "True" })).unwrap();

        assert_eq!(absent.explicit, None);
        assert_eq!(null.explicit, None);
        assert_eq!(text.explicit, Some(true));
    }

    #[test]
    fn release_date_must_be_iso() {
        assert_eq!(
            parse_release_date("2021-11-11").unwrap(),
            NaiveDate::from_ymd_opt(2021, 11, 11).unwrap()
        );
        assert!(matches!(
            parse_release_date("11/11/2021"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(parse_release_date("2021-02-30").is_err());
        assert!(parse_release_date("2021-1-1").is_err());
        assert!(parse_release_date(" 2021-01-01").is_err());
        assert!(parse_release_date("2021-01-01 ").is_err());
    }

    #[test]
    fn uri_points_back_at_the_resource() {
        assert_eq!(resource_uri("albums", 7), "/api/v1/resources/albums/7");
    }
}
