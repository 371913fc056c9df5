//! Filter option lists derived from the records
//!
//! The options cascade: the selected season and free-from-school value
//! narrow the event types on offer, and those (plus the selected types)
//! narrow the places on offer.

use std::collections::BTreeSet;

use super::filter::{matches_school, matches_season, matches_types};
use crate::data_fetcher::models::EventRecord;

/// Every season label in the data, newest first.
pub fn available_seasons(records: &[EventRecord]) -> Vec<String> {
    let seasons: BTreeSet<&str> = records.iter().filter_map(|r| r.season.as_deref()).collect();
    seasons.into_iter().rev().map(str::to_string).collect()
}

/// Event types present for the given season and free-from-school choice, sorted.
pub fn available_types(
    records: &[EventRecord],
    season: Option<&str>,
    school: Option<&str>,
) -> Vec<String> {
    let types: BTreeSet<&str> = records
        .iter()
        .filter(|r| matches_season(r, season) && matches_school(r, school))
        .filter_map(|r| r.event_type.as_deref())
        .collect();
    types.into_iter().map(str::to_string).collect()
}

/// Places present for the given season, type set and free-from-school choice, sorted.
pub fn available_places(
    records: &[EventRecord],
    season: Option<&str>,
    types: &BTreeSet<String>,
    school: Option<&str>,
) -> Vec<String> {
    let places: BTreeSet<&str> = records
        .iter()
        .filter(|r| matches_season(r, season) && matches_types(r, types) && matches_school(r, school))
        .filter_map(|r| r.place.as_deref())
        .collect();
    places.into_iter().map(str::to_string).collect()
}

/// Initial season selection: the current season if the data contains it.
pub fn default_season(records: &[EventRecord], current_season: &str) -> Option<String> {
    records
        .iter()
        .any(|r| r.season.as_deref() == Some(current_season))
        .then(|| current_season.to_string())
}
