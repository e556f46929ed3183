//! Conversion between host dates and their database representation
//!
//! Birthdays are stored as ISO-8601 text (`YYYY-MM-DD`) under a `DATE`
//! column; an absent date maps to SQL `NULL` and back. Both directions of
//! the conversion live here so the table layer never touches the raw
//! storage format.
use chrono::NaiveDate;
use rusqlite::types::{FromSqlError, Value, ValueRef};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts an optional date into the value bound to a statement parameter.
///
/// `None` becomes the SQL `NULL` marker.
pub fn date_to_sql(date: Option<NaiveDate>) -> Value {
    match date {
        Some(date) => Value::Text(date.format(DATE_FORMAT).to_string()),
        None => Value::Null,
    }
}

/// Converts a column value read from a row back into an optional date.
///
/// SQL `NULL` becomes `None`. Non-text values and text that does not parse
/// as an ISO-8601 date are conversion errors.
pub fn date_from_sql(value: ValueRef<'_>) -> Result<Option<NaiveDate>, FromSqlError> {
    match value {
        ValueRef::Null => Ok(None),
        ValueRef::Text(text) => {
            let text = std::str::from_utf8(text).map_err(|e| FromSqlError::Other(Box::new(e)))?;
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .map(Some)
                .map_err(|e| FromSqlError::Other(Box::new(e)))
        }
        _ => Err(FromSqlError::InvalidType),
    }
}
