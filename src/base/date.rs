//! Date handling for the prompt and the store.
//!
//! Dates typed at the prompt use the compact `yyyyMMdd` form. Stored and
//! displayed dates use the ISO `yyyy-mm-dd` form that [`time::Date`] speaks
//! natively.

use time::macros::format_description;

/// Parses a compact `yyyyMMdd` date, e.g. `20230105`.
pub fn parse_compact(s: &str) -> Result<time::Date, time::error::Parse> {
    time::Date::parse(s, format_description!("[year][month][day]"))
}

/// Returns the local date.
#[cfg(not(test))]
pub fn today() -> time::Date {
    time::OffsetDateTime::now_local()
        .unwrap_or_else(|_| time::OffsetDateTime::now_utc())
        .date()
}

/// Returns the local date.
#[cfg(test)]
pub fn today() -> time::Date {
    time::macros::date!(2023 - 01 - 15)
}
