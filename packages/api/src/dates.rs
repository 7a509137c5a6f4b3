//! Timestamp helpers for record ids and audit dates.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Epoch milliseconds as a string, used as the id of new accounts.
pub fn current_timestamp_string() -> String {
    timestamp_string(Utc::now())
}

/// Today's local date as `YYYY-MM-DD`.
pub fn current_date_string() -> String {
    date_string(Local::now())
}

pub fn timestamp_string(at: DateTime<Utc>) -> String {
    at.timestamp_millis().to_string()
}

pub fn date_string<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y-%m-%d").to_string()
}
