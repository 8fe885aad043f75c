//! Data models for the watchlist backend.
//!
//! Field names serialize as camelCase to match the web client.

mod list;
mod list_movie;
mod movie;

pub use list::*;
pub use list_movie::*;
pub use movie::*;

use chrono::{SecondsFormat, Utc};

/// Current time as a fixed-width RFC 3339 UTC string.
///
/// Millisecond precision with a `Z` suffix keeps lexical and chronological
/// ordering identical, which the `ORDER BY` clauses rely on.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
