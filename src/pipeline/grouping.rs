//! Month and season bucketing of event records

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::warn;

use super::dates::compare_date_cells;
use crate::constants::labels;
use crate::data_fetcher::models::EventRecord;

/// Bucket key of a month group.
///
/// Known keys order by their `"{year}-{month}"` text with the month padded to
/// two digits, which is chronological for four-digit years. Records without a
/// month number (or year) share the `Unknown` key, which orders last.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum MonthKey {
    Known { year: String, month: String },
    Unknown,
}

impl MonthKey {
    /// Key for a record, taken verbatim from its `year` and `month_number` cells.
    pub fn for_record(record: &EventRecord) -> Self {
        match (record.year.as_deref(), record.month_number.as_deref()) {
            (Some(year), Some(month)) => MonthKey::Known {
                year: year.trim().to_string(),
                month: format!("{:0>2}", month.trim()),
            },
            _ => MonthKey::Unknown,
        }
    }

    /// Sort key text, e.g. `2024-09`. `None` for the unknown bucket.
    pub fn sort_key(&self) -> Option<String> {
        match self {
            MonthKey::Known { year, month } => Some(format!("{year}-{month}")),
            MonthKey::Unknown => None,
        }
    }

    /// Heading text such as `2024 – september`, falling back to the month
    /// number when the sheet has no month name.
    pub fn title(&self, month_name: Option<&str>) -> String {
        match (self, month_name) {
            (MonthKey::Unknown, _) => labels::UNKNOWN_MONTH.to_string(),
            (MonthKey::Known { year, .. }, Some(name)) => format!("{year} – {name}"),
            (MonthKey::Known { year, month }, None) => format!("{year} – {month}"),
        }
    }
}

impl Ord for MonthKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sort_key(), other.sort_key()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for MonthKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Events of one calendar month, sorted by start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGroup {
    pub key: MonthKey,
    pub year: Option<String>,
    pub month_name: Option<String>,
    pub events: Vec<EventRecord>,
}

impl MonthGroup {
    /// Heading text such as `2024 – september`.
    pub fn title(&self) -> String {
        self.key.title(self.month_name.as_deref())
    }
}

/// Events of one season, bucketed by month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonGroup {
    pub season: String,
    pub months: Vec<MonthGroup>,
}

/// Groups records by `(year, month_number)` in ascending key order.
///
/// The key comes from the record's own calendar cells, not from `date_from`.
/// Within a group, events are sorted by `date_from` as calendar dates; the
/// sort is stable and events with unparsable dates come last. Records missing
/// a month number are collected in a trailing unknown group and reported.
pub fn group_by_month(records: &[EventRecord]) -> Vec<MonthGroup> {
    let mut buckets: BTreeMap<MonthKey, MonthGroup> = BTreeMap::new();

    for record in records {
        let key = MonthKey::for_record(record);
        if key == MonthKey::Unknown {
            warn!(
                "Event '{}' has no month number or year, grouping it under '{}'",
                record.display_name(),
                labels::UNKNOWN_MONTH
            );
        }

        buckets
            .entry(key.clone())
            .or_insert_with(|| MonthGroup {
                key,
                year: record.year.clone(),
                month_name: record.month_name.clone(),
                events: Vec::new(),
            })
            .events
            .push(record.clone());
    }

    buckets
        .into_values()
        .map(|mut group| {
            group
                .events
                .sort_by(|a, b| compare_date_cells(a.date_from.as_deref(), b.date_from.as_deref()));
            group
        })
        .collect()
}

/// Groups records by season label, newest season first, each bucketed by month.
///
/// Records without a season are collected under `Okänd`.
pub fn group_by_season(records: &[EventRecord]) -> Vec<SeasonGroup> {
    let mut seasons: BTreeMap<String, Vec<EventRecord>> = BTreeMap::new();
    for record in records {
        let season = record
            .season
            .clone()
            .unwrap_or_else(|| labels::UNKNOWN_SEASON.to_string());
        seasons.entry(season).or_default().push(record.clone());
    }

    seasons
        .into_iter()
        .rev()
        .map(|(season, events)| SeasonGroup {
            season,
            months: group_by_month(&events),
        })
        .collect()
}
