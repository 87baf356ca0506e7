//! Row entities read from and written to SQLite
//!
//! Each entity mirrors one table (or one listing query) column for column.
//! Conversion to the core record types happens through `to_record`.

mod complaint;
mod detail;
mod history;
mod registration;

pub use complaint::*;
pub use detail::*;
pub use history::*;
pub use registration::*;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DbError, DbResult};

/// Stored timestamp layout; fixed width so text order is time order
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> DbResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| DbError::InvalidRow(format!("Invalid timestamp '{}': {}", s, e)))
}

/// Encode a list or object answer for a JSON text column
pub fn to_json_text<T: Serialize>(value: &T) -> DbResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Decode a JSON text column, treating NULL as the empty value
pub fn from_json_text<T: DeserializeOwned + Default>(value: &Option<String>) -> DbResult<T> {
    match value.as_deref() {
        None | Some("") => Ok(T::default()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_round_trip_keeps_micros() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 9, 5, 3).unwrap()
            + chrono::Duration::microseconds(42);
        let text = format_timestamp(ts);
        assert_eq!(text, "2024-06-01 09:05:03.000042");
        assert_eq!(parse_timestamp(&text).unwrap(), ts);
    }

    #[test]
    fn test_timestamp_text_sorts_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2024, 6, 1, 9, 5, 3).unwrap();
        let later = earlier + chrono::Duration::microseconds(1);
        assert!(format_timestamp(earlier) < format_timestamp(later));
    }

    #[test]
    fn test_null_json_is_default() {
        let list: Vec<String> = from_json_text(&None).unwrap();
        assert!(list.is_empty());
        let list: Vec<String> = from_json_text(&Some("[\"a\"]".to_string())).unwrap();
        assert_eq!(list, vec!["a".to_string()]);
    }
}
