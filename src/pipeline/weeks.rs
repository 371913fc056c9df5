//! ISO-week subdivision of a month group

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use super::dates::{month_abbreviation, parse_date};
use super::grouping::MonthGroup;
use crate::data_fetcher::models::EventRecord;

/// How a week group is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekKind {
    /// A lone event, shown without a week heading
    Single,
    /// Two or more events of the same week, shown under a week heading
    Week,
}

/// Consecutive events of a month that fall in the same ISO week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekGroup {
    /// ISO-8601 week number of the group's first event
    pub iso_week: Option<u32>,
    /// Calendar year of the group's first event
    pub year: Option<i32>,
    pub kind: WeekKind,
    /// Week heading, only for `WeekKind::Week`
    pub label: Option<String>,
    pub events: Vec<EventRecord>,
}

/// Identity of the week an event starts in: ISO week number and calendar year.
fn week_identity(record: &EventRecord) -> Option<(u32, i32, NaiveDate)> {
    let date = record.date_from.as_deref().and_then(parse_date)?;
    Some((date.iso_week().week(), date.year(), date))
}

/// Week heading such as `Vecka 38 (16–22 sep)` or `Vecka 40 (30 sep – 6 okt)`.
pub fn week_label(date: NaiveDate) -> String {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    let sunday = monday + Duration::days(6);
    let week = date.iso_week().week();

    if monday.month() == sunday.month() {
        format!(
            "Vecka {week} ({}–{} {})",
            monday.day(),
            sunday.day(),
            month_abbreviation(sunday.month())
        )
    } else {
        format!(
            "Vecka {week} ({} {} – {} {})",
            monday.day(),
            month_abbreviation(monday.month()),
            sunday.day(),
            month_abbreviation(sunday.month())
        )
    }
}

/// Splits a month group's (already date-sorted) events into week groups.
///
/// A new group starts whenever an event's `date_from` is not in the same ISO
/// week number and calendar year as the first event of the open group.
/// Events whose date does not parse always form a group of their own.
pub fn group_by_week(month: &MonthGroup) -> Vec<WeekGroup> {
    let mut groups: Vec<(Option<(u32, i32, NaiveDate)>, Vec<EventRecord>)> = Vec::new();

    for event in &month.events {
        let identity = week_identity(event);
        let joins_open_group = match (groups.last(), identity) {
            (Some((Some((open_week, open_year, _)), _)), Some((week, year, _))) => {
                *open_week == week && *open_year == year
            }
            _ => false,
        };

        if joins_open_group {
            if let Some((_, events)) = groups.last_mut() {
                events.push(event.clone());
            }
        } else {
            groups.push((identity, vec![event.clone()]));
        }
    }

    groups
        .into_iter()
        .map(|(identity, events)| {
            let kind = if events.len() > 1 {
                WeekKind::Week
            } else {
                WeekKind::Single
            };
            let label = match (kind, identity) {
                (WeekKind::Week, Some((_, _, date))) => Some(week_label(date)),
                _ => None,
            };
            WeekGroup {
                iso_week: identity.map(|(week, _, _)| week),
                year: identity.map(|(_, year, _)| year),
                kind,
                label,
                events,
            }
        })
        .collect()
}
