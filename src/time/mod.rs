pub mod error;

use crate::time::error::Error;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::fmt::Write;

/// Layouts for timestamps without an offset, which are read as local time.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Reads a JUnit `timestamp` attribute.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Local>, Error> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Ok(with_offset.with_timezone(&Local));
    }
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| Error::Syntax(raw.to_owned()))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| Error::NonexistentLocalTime(raw.to_owned()))
}

/// Formats with a strftime-style layout, rejecting layouts chrono cannot render.
pub fn format_datetime(datetime: &DateTime<Local>, format: &str) -> Result<String, Error> {
    let mut formatted = String::new();
    write!(formatted, "{}", datetime.format(format))
        .map_err(|_| Error::Format(format.to_owned()))?;
    Ok(formatted)
}

/// Fixed-point seconds, e.g. `1.234` with `precision = 3`.
pub fn format_seconds(seconds: f64, precision: usize) -> String {
    format!("{:.*}", precision, seconds)
}
