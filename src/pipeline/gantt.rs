//! Season overview tasks and timeline math

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

use super::dates::{month_abbreviation, parse_date};
use super::filter::{matches_season, matches_types};
use crate::data_fetcher::models::EventRecord;

/// One bar of the season overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GanttTask {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub event_type: Option<String>,
    pub place: Option<String>,
}

/// Width of one timeline column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeScale {
    Day,
    Week,
    #[default]
    Month,
}

/// One column of the overview timeline, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineColumn {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

/// Overview tasks of `season`, optionally narrowed to a set of types and of
/// places (empty set = all), sorted by start date.
///
/// A task ends at `date_to`, or on its start day without one. Rows whose
/// start date does not parse cannot be placed on a timeline and are left out.
pub fn gantt_tasks(
    records: &[EventRecord],
    season: &str,
    types: &BTreeSet<String>,
    places: &BTreeSet<String>,
) -> Vec<GanttTask> {
    let mut tasks: Vec<GanttTask> = records
        .iter()
        .filter(|r| matches_season(r, Some(season)) && matches_types(r, types))
        .filter(|r| {
            places.is_empty() || r.place.as_ref().is_some_and(|place| places.contains(place))
        })
        .filter_map(|r| {
            let Some(start) = r.date_from.as_deref().and_then(parse_date) else {
                debug!("Skipping '{}' in overview, start date does not parse", r.display_name());
                return None;
            };
            let end = r
                .date_to
                .as_deref()
                .and_then(parse_date)
                .filter(|end| *end >= start)
                .unwrap_or(start);
            Some(GanttTask {
                name: r.display_name().to_string(),
                start,
                end,
                event_type: r.event_type.clone(),
                place: r.place.clone(),
            })
        })
        .collect();

    tasks.sort_by_key(|task| task.start);
    tasks
}

/// Columns covering `[from, to]` at the given scale, at most `max_columns`.
pub fn timeline(from: NaiveDate, to: NaiveDate, scale: TimeScale, max_columns: usize) -> Vec<TimelineColumn> {
    let mut columns = Vec::new();
    if to < from {
        return columns;
    }

    let mut cursor = match scale {
        TimeScale::Day => from,
        TimeScale::Week => from - Duration::days(i64::from(from.weekday().num_days_from_monday())),
        TimeScale::Month => from.with_day(1).unwrap_or(from),
    };

    while cursor <= to && columns.len() < max_columns {
        let (end, label, next) = match scale {
            TimeScale::Day => (cursor, cursor.day().to_string(), cursor + Duration::days(1)),
            TimeScale::Week => (
                cursor + Duration::days(6),
                format!("v{}", cursor.iso_week().week()),
                cursor + Duration::days(7),
            ),
            TimeScale::Month => {
                let next = first_of_next_month(cursor);
                (
                    next - Duration::days(1),
                    month_abbreviation(cursor.month()).to_string(),
                    next,
                )
            }
        };
        columns.push(TimelineColumn {
            start: cursor,
            end,
            label,
        });
        cursor = next;
    }

    columns
}

fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date + Duration::days(31))
}

/// Inclusive column index range a task covers, `None` when it lies outside
/// the timeline.
pub fn task_span(task: &GanttTask, columns: &[TimelineColumn]) -> Option<(usize, usize)> {
    let first = columns.iter().position(|c| c.end >= task.start)?;
    let last = columns.iter().rposition(|c| c.start <= task.end)?;
    (first <= last).then_some((first, last))
}

/// Date range a timeline should cover for the given tasks: the season's
/// bounds when known, widened to include every task.
pub fn timeline_range(
    tasks: &[GanttTask],
    season_bounds: Option<(NaiveDate, NaiveDate)>,
) -> Option<(NaiveDate, NaiveDate)> {
    let task_start = tasks.iter().map(|t| t.start).min();
    let task_end = tasks.iter().map(|t| t.end).max();

    match (season_bounds, task_start, task_end) {
        (Some((from, to)), Some(start), Some(end)) => Some((from.min(start), to.max(end))),
        (Some(bounds), _, _) => Some(bounds),
        (None, Some(start), Some(end)) => Some((start, end)),
        _ => None,
    }
}
