//! Date parsing helpers for the free-form date cells of the sheet

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d.%m.%Y"];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// Date-only component of a cell: its first 10 characters.
pub fn date_prefix(value: &str) -> &str {
    let value = value.trim();
    match value.char_indices().nth(10) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

/// Parses a date cell as a calendar date.
///
/// Accepts ISO dates (`2024-09-14`), ISO date-times and RFC 3339 timestamps
/// (the date part is used), `YYYY/MM/DD`, `DD/MM/YYYY` and `DD.MM.YYYY`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    // Anything else that still starts with an ISO date
    NaiveDate::parse_from_str(date_prefix(value), "%Y-%m-%d").ok()
}

/// Orders two optional date cells chronologically. Cells that do not parse
/// sort after every parsable date and compare equal among themselves.
pub fn compare_date_cells(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a.and_then(parse_date), b.and_then(parse_date)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Swedish month abbreviation ("jan" .. "dec") for a 1-based month number.
pub fn month_abbreviation(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_ABBREVIATIONS.get(index as usize))
        .copied()
        .unwrap_or("")
}

/// Short Swedish form of a date, e.g. `14 sep`.
pub fn short_date(date: NaiveDate) -> String {
    format!("{} {}", date.day(), month_abbreviation(date.month()))
}

/// Human-readable Swedish date range.
///
/// - same day: `14 sep 2024`
/// - same month: `14–15 sep 2024`
/// - same year: `30 sep – 2 okt 2024`
/// - otherwise: `30 dec 2024 – 2 jan 2025`
///
/// Cells that do not parse are shown verbatim.
pub fn format_date_range(from: &str, to: &str) -> String {
    let (Some(start), Some(end)) = (parse_date(from), parse_date(to)) else {
        return if to.trim().is_empty() || from.trim() == to.trim() {
            from.trim().to_string()
        } else {
            format!("{} – {}", from.trim(), to.trim())
        };
    };

    if start == end {
        format!("{} {}", short_date(start), start.year())
    } else if start.year() == end.year() && start.month() == end.month() {
        format!(
            "{}–{} {} {}",
            start.day(),
            end.day(),
            month_abbreviation(start.month()),
            start.year()
        )
    } else if start.year() == end.year() {
        format!("{} – {} {}", short_date(start), short_date(end), end.year())
    } else {
        format!(
            "{} {} – {} {}",
            short_date(start),
            start.year(),
            short_date(end),
            end.year()
        )
    }
}
