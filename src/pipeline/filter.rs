use serde::Serialize;
use std::collections::BTreeSet;

use crate::data_fetcher::models::EventRecord;

/// Current filter choices of a view. `None` / an empty set means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub season: Option<String>,
    pub event_types: BTreeSet<String>,
    pub place: Option<String>,
    pub free_from_school: Option<String>,
}

impl FilterSelection {
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    pub fn with_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_types.insert(event_type.into());
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    pub fn with_free_from_school(mut self, value: impl Into<String>) -> Self {
        self.free_from_school = Some(value.into());
        self
    }

    /// `true` when `record` satisfies every populated field of the selection.
    ///
    /// Season and place compare by exact string equality, the type must be a
    /// member of the selected set, and free-from-school compares ignoring case.
    pub fn matches(&self, record: &EventRecord) -> bool {
        matches_season(record, self.season.as_deref())
            && matches_types(record, &self.event_types)
            && matches_exact(record.place.as_deref(), self.place.as_deref())
            && matches_school(record, self.free_from_school.as_deref())
    }
}

pub(crate) fn matches_season(record: &EventRecord, season: Option<&str>) -> bool {
    matches_exact(record.season.as_deref(), season)
}

pub(crate) fn matches_types(record: &EventRecord, types: &BTreeSet<String>) -> bool {
    types.is_empty()
        || record
            .event_type
            .as_ref()
            .is_some_and(|t| types.contains(t))
}

pub(crate) fn matches_school(record: &EventRecord, school: Option<&str>) -> bool {
    match school {
        None => true,
        Some(wanted) => record
            .free_from_school
            .as_deref()
            .is_some_and(|v| v.to_lowercase() == wanted.to_lowercase()),
    }
}

fn matches_exact(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => value == Some(wanted),
    }
}

/// Records matching `selection`, in their original order.
pub fn filter_events(records: &[EventRecord], selection: &FilterSelection) -> Vec<EventRecord> {
    records
        .iter()
        .filter(|record| selection.matches(record))
        .cloned()
        .collect()
}
