//! Filter state ownership for the schedule views
//!
//! A [`ScheduleView`] owns the fetched records and the current
//! [`FilterSelection`]. Changing one filter recomputes the option lists that
//! depend on it in a fixed order (season/school, then types, then places),
//! and [`ScheduleView::snapshot`] reruns the pipeline on the current state.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::data_fetcher::models::EventRecord;
use crate::pipeline::{
    BudgetSummary, FilterSelection, GanttTask, MonthGroup, SeasonGroup, WeekGroup,
    aggregate_cost, available_places, available_seasons, available_types, default_season,
    filter_events, gantt_tasks, group_by_month, group_by_season, group_by_week,
    partition_events,
};
use crate::season::SeasonClock;
use std::collections::BTreeSet;

/// Filter values currently on offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub seasons: Vec<String>,
    pub event_types: Vec<String>,
    pub places: Vec<String>,
}

/// Upcoming events grouped by month, with past events grouped separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventListing {
    pub upcoming: Vec<MonthGroup>,
    pub past: Vec<MonthGroup>,
}

/// Result of one pipeline run over the view's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ScheduleSnapshot {
    /// A season is selected
    Season {
        season: String,
        is_current: bool,
        today: NaiveDate,
        listing: EventListing,
    },
    /// No season selected: every season, newest first
    AllSeasons { seasons: Vec<SeasonGroup> },
}

/// A month of upcoming events, further split into ISO weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyMonth {
    pub month: MonthGroup,
    pub weeks: Vec<WeekGroup>,
}

/// Owner of the records and filter selection of one viewing session.
#[derive(Debug, Clone)]
pub struct ScheduleView {
    records: Vec<EventRecord>,
    selection: FilterSelection,
    options: FilterOptions,
}

impl ScheduleView {
    /// Creates a view with the current season preselected when the data has it.
    pub fn new(records: Vec<EventRecord>, clock: &dyn SeasonClock) -> Self {
        let current = clock.current_season();
        let season = default_season(&records, &current);
        debug!("Initial season selection: {:?} (current season {current})", season);

        let mut view = ScheduleView {
            options: FilterOptions {
                seasons: available_seasons(&records),
                ..Default::default()
            },
            records,
            selection: FilterSelection {
                season,
                ..Default::default()
            },
        };
        view.recompute_types();
        view
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Selects a season (`None` = all seasons). Clears the types and place.
    pub fn set_season(&mut self, season: Option<String>) {
        self.selection.season = season;
        self.reset_types_and_place();
    }

    /// Selects a free-from-school value (`None` = all). Clears the types and place.
    pub fn set_school(&mut self, school: Option<String>) {
        self.selection.free_from_school = school.map(|s| s.to_lowercase());
        self.reset_types_and_place();
    }

    fn reset_types_and_place(&mut self) {
        self.selection.event_types.clear();
        self.selection.place = None;
        self.recompute_types();
    }

    /// Adds or removes a type from the selection. Clears the place.
    pub fn toggle_type(&mut self, event_type: &str) {
        if !self.selection.event_types.remove(event_type) {
            self.selection.event_types.insert(event_type.to_string());
        }
        self.selection.place = None;
        self.recompute_places();
    }

    /// Empties the type selection. Clears the place.
    pub fn clear_types(&mut self) {
        self.selection.event_types.clear();
        self.selection.place = None;
        self.recompute_places();
    }

    /// Selects a place (`None` = all).
    pub fn set_place(&mut self, place: Option<String>) {
        self.selection.place = place;
    }

    fn recompute_types(&mut self) {
        self.options.event_types = available_types(
            &self.records,
            self.selection.season.as_deref(),
            self.selection.free_from_school.as_deref(),
        );
        self.recompute_places();
    }

    fn recompute_places(&mut self) {
        self.options.places = available_places(
            &self.records,
            self.selection.season.as_deref(),
            &self.selection.event_types,
            self.selection.free_from_school.as_deref(),
        );
    }

    /// Records matching the current selection, in sheet order.
    pub fn filtered(&self) -> Vec<EventRecord> {
        filter_events(&self.records, &self.selection)
    }

    /// Runs filter, partition and grouping for the current selection.
    pub fn snapshot(&self, clock: &dyn SeasonClock) -> ScheduleSnapshot {
        let filtered = self.filtered();

        let Some(season) = self.selection.season.clone() else {
            return ScheduleSnapshot::AllSeasons {
                seasons: group_by_season(&filtered),
            };
        };

        let current = clock.current_season();
        let today = clock.effective_today();
        let split = partition_events(&filtered, Some(&season), &current, today);

        ScheduleSnapshot::Season {
            is_current: season == current,
            season,
            today,
            listing: EventListing {
                upcoming: group_by_month(&split.upcoming),
                past: group_by_month(&split.past),
            },
        }
    }

    /// Upcoming events by month and ISO week (all filtered events when the
    /// selected season is not the current one).
    pub fn weekly(&self, clock: &dyn SeasonClock) -> Vec<WeeklyMonth> {
        let filtered = self.filtered();
        let split = partition_events(
            &filtered,
            self.selection.season.as_deref(),
            &clock.current_season(),
            clock.effective_today(),
        );

        group_by_month(&split.upcoming)
            .into_iter()
            .map(|month| WeeklyMonth {
                weeks: group_by_week(&month),
                month,
            })
            .collect()
    }

    /// Budget of the filtered records. Returns `None` without a selected season,
    /// the budget is always per season.
    pub fn budget(&self) -> Option<BudgetSummary> {
        self.selection.season.as_ref()?;
        Some(aggregate_cost(&self.filtered()))
    }

    /// Overview tasks for the selected season, narrowed to `places` (empty = all).
    pub fn overview(&self, places: &BTreeSet<String>) -> Option<Vec<GanttTask>> {
        let season = self.selection.season.as_deref()?;
        Some(gantt_tasks(
            &self.records,
            season,
            &self.selection.event_types,
            places,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::FixedClock;
    use crate::testing_utils::TestDataBuilder;

    fn clock() -> FixedClock {
        FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 10, 14).unwrap())
    }

    fn sample() -> Vec<EventRecord> {
        vec![
            TestDataBuilder::event("Höstcup", "2024-2025", "2024-09-14")
                .with_type("Cup")
                .with_place("Umeå")
                .with_school("ja")
                .with_cost("500 kr")
                .build(),
            TestDataBuilder::event("Oslotur", "2024-2025", "2024-10-20")
                .with_type("Resa")
                .with_place("Oslo")
                .with_school("nej")
                .with_cost("2 000 kr")
                .build(),
            TestDataBuilder::event("Julcup", "2024-2025", "2024-12-28")
                .with_type("Cup")
                .with_place("Sundsvall")
                .with_school("nej")
                .build(),
            TestDataBuilder::event("Vårläger", "2023-2024", "2024-04-10")
                .with_type("Läger")
                .with_place("Åre")
                .build(),
        ]
    }

    #[test]
    fn test_new_view_preselects_current_season() {
        let view = ScheduleView::new(sample(), &clock());
        assert_eq!(view.selection().season.as_deref(), Some("2024-2025"));
        assert_eq!(view.options().seasons, vec!["2024-2025", "2023-2024"]);
        assert_eq!(view.options().event_types, vec!["Cup", "Resa"]);
        assert_eq!(view.options().places, vec!["Oslo", "Sundsvall", "Umeå"]);
    }

    #[test]
    fn test_new_view_without_current_season_selects_all() {
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
        let view = ScheduleView::new(sample(), &clock);
        assert_eq!(view.selection().season, None);
        assert!(matches!(view.snapshot(&clock), ScheduleSnapshot::AllSeasons { .. }));
    }

    #[test]
    fn test_toggle_type_clears_place_and_narrows_places() {
        let mut view = ScheduleView::new(sample(), &clock());
        view.set_place(Some("Oslo".to_string()));
        view.toggle_type("Cup");

        assert_eq!(view.selection().place, None);
        assert_eq!(view.options().places, vec!["Sundsvall", "Umeå"]);

        view.toggle_type("Cup");
        assert!(view.selection().event_types.is_empty());
        assert_eq!(view.options().places.len(), 3);
    }

    #[test]
    fn test_season_change_clears_types_and_place() {
        let mut view = ScheduleView::new(sample(), &clock());
        view.toggle_type("Cup");
        view.set_place(Some("Umeå".to_string()));

        view.set_season(Some("2023-2024".to_string()));

        assert!(view.selection().event_types.is_empty());
        assert_eq!(view.selection().place, None);
        assert_eq!(view.options().event_types, vec!["Läger"]);
        assert_eq!(view.filtered().len(), 1);
    }

    #[test]
    fn test_school_change_clears_types_and_place() {
        let mut view = ScheduleView::new(sample(), &clock());
        view.toggle_type("Resa");
        view.set_place(Some("Oslo".to_string()));

        view.set_school(Some("ja".to_string()));

        assert!(view.selection().event_types.is_empty());
        assert_eq!(view.selection().place, None);
        assert_eq!(view.filtered().len(), 1);
    }

    #[test]
    fn test_school_change_cascades_to_types_and_places() {
        let mut view = ScheduleView::new(sample(), &clock());
        view.set_school(Some("JA".to_string()));
        assert_eq!(view.selection().free_from_school.as_deref(), Some("ja"));
        assert_eq!(view.options().event_types, vec!["Cup"]);
        assert_eq!(view.options().places, vec!["Umeå"]);
    }

    #[test]
    fn test_snapshot_partitions_current_season() {
        let view = ScheduleView::new(sample(), &clock());
        let ScheduleSnapshot::Season {
            is_current, listing, ..
        } = view.snapshot(&clock())
        else {
            panic!("expected a season snapshot");
        };

        assert!(is_current);
        let upcoming: Vec<_> = listing
            .upcoming
            .iter()
            .flat_map(|g| g.events.iter().map(|e| e.display_name()))
            .collect();
        assert_eq!(upcoming, vec!["Oslotur", "Julcup"]);
        assert_eq!(listing.past.len(), 1);
        assert_eq!(listing.past[0].events[0].display_name(), "Höstcup");
    }

    #[test]
    fn test_snapshot_of_other_season_has_no_past() {
        let mut view = ScheduleView::new(sample(), &clock());
        view.set_season(Some("2023-2024".to_string()));
        let ScheduleSnapshot::Season {
            is_current, listing, ..
        } = view.snapshot(&clock())
        else {
            panic!("expected a season snapshot");
        };
        assert!(!is_current);
        assert!(listing.past.is_empty());
        assert_eq!(listing.upcoming[0].events[0].display_name(), "Vårläger");
    }

    #[test]
    fn test_snapshot_is_repeatable() {
        let view = ScheduleView::new(sample(), &clock());
        assert_eq!(view.snapshot(&clock()), view.snapshot(&clock()));
    }

    #[test]
    fn test_budget_requires_season() {
        let mut view = ScheduleView::new(sample(), &clock());
        let budget = view.budget().unwrap();
        assert_eq!(budget.total, 2500.0);

        view.set_season(None);
        assert!(view.budget().is_none());
    }

    #[test]
    fn test_weekly_omits_past_events() {
        let view = ScheduleView::new(sample(), &clock());
        let weekly = view.weekly(&clock());
        assert_eq!(weekly.len(), 2);
        assert_eq!(weekly[0].weeks[0].events[0].display_name(), "Oslotur");
    }

    #[test]
    fn test_overview_ignores_place_and_school_selection() {
        let mut view = ScheduleView::new(sample(), &clock());
        view.set_place(Some("Oslo".to_string()));
        let tasks = view.overview(&BTreeSet::new()).unwrap();
        assert_eq!(tasks.len(), 3);
    }
}
