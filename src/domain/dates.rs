use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::warn;
use serde::{Deserialize, Deserializer};

/// Parses the date formats seen across the results platforms
pub fn parse_event_date(date_str: &str) -> Result<NaiveDate> {
    let trimmed = date_str.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    // Try RFC3339 format (with timezone)
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_utc().date());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt.date());
        }
    }

    anyhow::bail!("Failed to parse date: {}", date_str)
}

/// Lenient date field: empty or unparseable values become `None`
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let date = match raw.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => match parse_event_date(s) {
            Ok(date) => Some(date),
            Err(e) => {
                warn!("{}; treating date as missing", e);
                None
            }
        },
    };
    Ok(date)
}
