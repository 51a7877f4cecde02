//! Content date parsing and display formatting.
//!
//! Dates from the content service come in several shapes; the first format
//! that parses wins. Output uses the strftime pattern from
//! `ResolverConfig::date_format`, with a clock time appended when the input
//! carried one.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::config::DEFAULT_DATE_FORMAT;

/// Rendered for input that matches none of the accepted formats.
pub const INVALID_DATE: &str = "Invalid date";

const TIME_SUFFIX: &str = ", %-I:%M %p";
const MIDNIGHT: &str = "00:00:00";

/// A parsed content date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentDate {
    pub datetime: NaiveDateTime,
    /// The input carried a time of day other than midnight.
    pub has_time: bool,
}

/// Parses `raw` with the formats the content service emits, in order:
/// ISO 8601 without and with fractional seconds, `YYYY-MM-DD HH:MM:SS +ZZZZ`,
/// plain `YYYY-MM-DD`, and US `MM/DD/YYYY hh:mm:ss AM`.
pub fn parse_content_date(raw: &str) -> Option<ContentDate> {
    let raw = raw.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
    {
        let has_time = raw.len() > 10
            && raw
                .rsplit('T')
                .next()
                .is_some_and(|time| !time.starts_with(MIDNIGHT));
        return Some(ContentDate {
            datetime: dt,
            has_time,
        });
    }

    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z") {
        return Some(ContentDate {
            datetime: dt.naive_local(),
            has_time: second_field_has_time(raw),
        });
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(ContentDate {
            datetime: date.and_hms_opt(0, 0, 0)?,
            has_time: false,
        });
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%m/%d/%Y %I:%M:%S %p") {
        return Some(ContentDate {
            datetime: dt,
            has_time: second_field_has_time(raw),
        });
    }

    None
}

fn second_field_has_time(raw: &str) -> bool {
    raw.split(' ')
        .nth(1)
        .is_some_and(|time| !time.starts_with(MIDNIGHT))
}

/// Renders `raw` with `date_format`, appending the clock time when the
/// input has one and `include_time` is set.
///
/// An unusable `date_format` falls back to the default pattern; unparseable
/// input renders as [`INVALID_DATE`].
pub fn format_content_date(raw: &str, date_format: &str, include_time: bool) -> String {
    let Some(parsed) = parse_content_date(raw) else {
        return INVALID_DATE.to_string();
    };

    let base = if is_valid_pattern(date_format) {
        date_format
    } else {
        tracing::debug!("invalid date_format {:?}; using default", date_format);
        DEFAULT_DATE_FORMAT
    };
    let mut pattern = base.to_string();
    if parsed.has_time && include_time {
        pattern.push_str(TIME_SUFFIX);
    }
    parsed.datetime.format(&pattern).to_string()
}

fn is_valid_pattern(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
