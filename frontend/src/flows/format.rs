use chrono::{Local, TimeZone};
use shared::{PredictionLabel, parse_timestamp};
use std::fmt::Display;

/// `0.9512` with two decimals renders as `"95.12%"`.
pub fn percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

/// CSS class of the result box shown after an upload.
pub fn result_class(label: &PredictionLabel) -> &'static str {
    if label.is_tumor() { "tumor-detected" } else { "no-tumor" }
}

/// CSS class of a label badge in the history list.
pub fn history_class(label: &PredictionLabel) -> &'static str {
    if label.is_tumor() { "tumor" } else { "no-tumor" }
}

pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// Unparseable input is returned untouched.
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_timestamp(raw) {
        Some(utc) => utc.with_timezone(tz).format("%b %-d, %Y %H:%M").to_string(),
        None => raw.to_string(),
    }
}
