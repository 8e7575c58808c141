//! Wire formats for calendar columns.
//!
//! Every date, time and timestamp leaving the API goes through these
//! helpers so the textual shape never depends on the database driver:
//!
//! | Column type | Format                |
//! |-------------|-----------------------|
//! | date        | `YYYY-MM-DD`          |
//! | time        | `HH:MM:SS`            |
//! | timestamp   | `YYYY-MM-DD HH:MM:SS` |
//!
//! Use them with `#[serde(serialize_with = "...")]`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serializer;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Calendar value with a fixed textual representation.
pub trait WireFormat {
    fn to_wire(&self) -> String;
}

impl WireFormat for NaiveDate {
    fn to_wire(&self) -> String {
        self.format(DATE_FORMAT).to_string()
    }
}

impl WireFormat for NaiveTime {
    fn to_wire(&self) -> String {
        self.format(TIME_FORMAT).to_string()
    }
}

impl WireFormat for NaiveDateTime {
    fn to_wire(&self) -> String {
        self.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Serialize a calendar value in its wire format.
pub fn wire<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: WireFormat,
    S: Serializer,
{
    serializer.serialize_str(&value.to_wire())
}

/// Serialize an optional calendar value, `null` when absent.
pub fn wire_opt<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: WireFormat,
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_some(&v.to_wire()),
        None => serializer.serialize_none(),
    }
}
