//! Lenient deserializers for records coming from the REST service.
//!
//! The service passes database rows through mostly untouched, so identities
//! can be numbers, text columns can be `null` and dates can carry a time part.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::coerce::parse_flexible_date;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
    Float(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::Str(s) => s,
            StringOrNumber::Int(n) => n.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        }
    }

    fn into_amount(self) -> Option<f64> {
        match self {
            StringOrNumber::Str(s) => s.trim().parse().ok(),
            StringOrNumber::Int(n) => Some(n as f64),
            StringOrNumber::Float(f) => Some(f),
        }
    }
}

/// `null` reads as `T::default()`; combine with `#[serde(default)]` for absent keys.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identity that may be sent as a JSON string or number.
pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(StringOrNumber::deserialize(deserializer)?.into_string())
}

/// Optional identity; `null` and `""` both read as `None`.
pub fn id_string_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(raw.map(StringOrNumber::into_string).filter(|s| !s.is_empty()))
}

/// Decimal that may be a number, a numeric string or `null`.
pub fn amount_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(raw.and_then(StringOrNumber::into_amount))
}

/// Calendar date sent as `YYYY-MM-DD` or a timestamp.
/// `null`, `""` and unparsable text read as `None`.
pub fn flexible_date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_flexible_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "id_string")]
        id: String,
        #[serde(default, deserialize_with = "id_string_opt")]
        parent: Option<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "amount_opt")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "flexible_date_opt")]
        day: Option<NaiveDate>,
        #[serde(default, deserialize_with = "flexible_date_opt")]
        due: Option<NaiveDate>,
    }

    #[test]
    fn numeric_ids_become_strings() {
        let row: Row =
            serde_json::from_str(r#"{"id": 42, "parent": 7, "day": "2024-01-01"}"#).unwrap();
        assert_eq!(row.id, "42");
        assert_eq!(row.parent.as_deref(), Some("7"));
    }

    #[test]
    fn nulls_and_missing_keys_fall_back() {
        let row: Row = serde_json::from_str(
            r#"{"id": "A", "parent": "", "name": null, "price": null, "day": "2024-01-01", "due": null}"#,
        )
        .unwrap();
        assert_eq!(row.parent, None);
        assert_eq!(row.name, "");
        assert_eq!(row.price, None);
        assert_eq!(row.due, None);
    }

    #[test]
    fn amounts_accept_numeric_strings() {
        let row: Row =
            serde_json::from_str(r#"{"id": "A", "price": "120.50", "day": "2024-01-01"}"#).unwrap();
        assert_eq!(row.price, Some(120.5));
    }

    #[test]
    fn timestamps_keep_only_the_date() {
        let row: Row = serde_json::from_str(
            r#"{"id": "A", "day": "2024-03-15T14:02:26.123Z", "due": "2024-04-01T00:00:00+00:00"}"#,
        )
        .unwrap();
        assert_eq!(row.day, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(row.due, NaiveDate::from_ymd_opt(2024, 4, 1));
    }

    #[test]
    fn unusable_dates_read_as_none() {
        let row: Row = serde_json::from_str(r#"{"id": "A", "day": "soon"}"#).unwrap();
        assert_eq!(row.day, None);
        assert_eq!(row.due, None);
    }
}
