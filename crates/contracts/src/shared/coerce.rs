//! Conversions between form text and typed wire values.
//!
//! Form inputs hold text; the REST service wants numbers, `null` for blank
//! optional values and dates as `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar date from `YYYY-MM-DD` or a timestamp.
///
/// Timestamps with an offset are converted to UTC before the date is taken.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts.date());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(ts.date());
    }
    None
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Current UTC calendar date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse decimal text; blank or invalid input yields `None`.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse decimal text; blank or invalid input yields `0`.
pub fn parse_amount_or_zero(text: &str) -> f64 {
    parse_amount(text).unwrap_or(0.0)
}

/// Blank text becomes `None`; anything else is kept as typed.
pub fn text_opt(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Blank date text becomes `None`; parsable text is normalized to `YYYY-MM-DD`.
pub fn date_text_opt(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(parse_flexible_date(trimmed).map(format_date).unwrap_or_else(|| trimmed.to_string()))
}

/// Decimal rendered for a text input; `None` renders as an empty field.
pub fn amount_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn date_text(value: Option<NaiveDate>) -> String {
    value.map(format_date).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_plain_dates_and_timestamps() {
        assert_eq!(parse_flexible_date("2024-02-01"), Some(date(2024, 2, 1)));
        assert_eq!(parse_flexible_date(" 2024-02-01 "), Some(date(2024, 2, 1)));
        assert_eq!(parse_flexible_date("2024-02-01T10:30:00"), Some(date(2024, 2, 1)));
        assert_eq!(parse_flexible_date("2024-02-01 10:30:00"), Some(date(2024, 2, 1)));
        assert_eq!(parse_flexible_date("2024-02-01T23:30:00-02:00"), Some(date(2024, 2, 2)));
        assert_eq!(parse_flexible_date(""), None);
        assert_eq!(parse_flexible_date("01/02/2024"), None);
    }

    #[test]
    fn amounts_from_text() {
        assert_eq!(parse_amount("100"), Some(100.0));
        assert_eq!(parse_amount(" 12.5 "), Some(12.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount_or_zero(""), 0.0);
        assert_eq!(parse_amount_or_zero("7.25"), 7.25);
    }

    #[test]
    fn blank_text_is_none() {
        assert_eq!(text_opt(""), None);
        assert_eq!(text_opt("   "), None);
        assert_eq!(text_opt("S-12"), Some("S-12".to_string()));
    }

    #[test]
    fn empty_date_text_is_none_not_empty_string() {
        assert_eq!(date_text_opt(""), None);
        assert_eq!(date_text_opt("2024-05-06"), Some("2024-05-06".to_string()));
        assert_eq!(date_text_opt("2024-05-06T08:00:00Z"), Some("2024-05-06".to_string()));
    }

    #[test]
    fn values_render_back_to_text() {
        assert_eq!(amount_text(Some(100.0)), "100");
        assert_eq!(amount_text(Some(12.5)), "12.5");
        assert_eq!(amount_text(None), "");
        assert_eq!(date_text(Some(date(2024, 1, 9))), "2024-01-09");
        assert_eq!(date_text(None), "");
    }
}
