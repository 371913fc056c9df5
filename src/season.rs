//! Season detection and "effective today" derivation
//!
//! A season runs from July 1 of one year through June 30 of the next and is
//! labeled by both years, e.g. `"2024-2025"`.
//!
//! The 2025 cutover rules below are fixed historical constants: during May and
//! June 2025 the club already planned the 2025-2026 season, so the current
//! season label moved early and "today" was frozen at the new season's start.
//! They are kept separate from the general rule so they can be removed as a unit.

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};

/// First month of a season (July)
pub const SEASON_START_MONTH: u32 = 7;

/// Year in which the early season cutover happened
const CUTOVER_YEAR: i32 = 2025;

/// First month of the cutover window (May)
const CUTOVER_FROM_MONTH: u32 = 5;

/// Season label forced during the cutover window
const CUTOVER_SEASON: &str = "2025-2026";

/// Source of the wall-clock instant the schedule views are evaluated against.
pub trait SeasonClock {
    fn now(&self) -> DateTime<Local>;

    /// Season label for the clock's current instant.
    fn current_season(&self) -> String {
        current_season_with_current_time(self.now())
    }

    /// Date used as the past/upcoming cutoff for the clock's current instant.
    fn effective_today(&self) -> NaiveDate {
        effective_today_with_current_time(self.now())
    }
}

/// Clock backed by the system time, evaluated in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SeasonClock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        // Use UTC internally, convert to local time for calendar fields
        Utc::now().with_timezone(&Local)
    }
}

/// Clock pinned to a single instant. Used by tests and the `--today` flag.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// Pins the clock to local noon of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        let noon = date
            .and_hms_opt(12, 0, 0)
            .and_then(|dt| dt.and_local_timezone(Local).earliest())
            .unwrap_or_else(|| Utc::now().with_timezone(&Local));
        FixedClock(noon)
    }
}

impl SeasonClock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Season label for the current system time.
pub fn current_season() -> String {
    SystemClock.current_season()
}

/// Effective today for the current system time.
pub fn effective_today() -> NaiveDate {
    SystemClock.effective_today()
}

/// Season label for `now`.
///
/// From July onwards the season is `"{year}-{year+1}"`, before July it is
/// `"{year-1}-{year}"`. May and June 2025 are reported as `"2025-2026"`.
pub fn current_season_with_current_time<T: Datelike>(now: T) -> String {
    let year = now.year();
    let month = now.month();

    if year == CUTOVER_YEAR && month >= CUTOVER_FROM_MONTH {
        return CUTOVER_SEASON.to_string();
    }

    if month >= SEASON_START_MONTH {
        format!("{}-{}", year, year + 1)
    } else {
        format!("{}-{}", year - 1, year)
    }
}

/// Date-only "today" for `now`, frozen at 2025-07-01 for the first half of 2025.
pub fn effective_today_with_current_time(now: DateTime<Local>) -> NaiveDate {
    let today = now.date_naive();
    if today.year() == CUTOVER_YEAR && today.month() < SEASON_START_MONTH {
        return NaiveDate::from_ymd_opt(CUTOVER_YEAR, SEASON_START_MONTH, 1).unwrap_or(today);
    }
    today
}

/// Start and end dates (inclusive) of a season label such as `"2024-2025"`.
///
/// Returns `None` when the label does not consist of two consecutive years.
pub fn season_bounds(label: &str) -> Option<(NaiveDate, NaiveDate)> {
    let (first, second) = label.trim().split_once('-')?;
    let first: i32 = first.trim().parse().ok()?;
    let second: i32 = second.trim().parse().ok()?;
    if second != first + 1 {
        return None;
    }

    let start = NaiveDate::from_ymd_opt(first, SEASON_START_MONTH, 1)?;
    let end = NaiveDate::from_ymd_opt(second, 6, 30)?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(year: i32, month: u32, day: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("valid local time")
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_current_season_general_rule() {
        assert_eq!(current_season_with_current_time(local(2024, 3, 15)), "2023-2024");
        assert_eq!(current_season_with_current_time(local(2024, 8, 1)), "2024-2025");
        assert_eq!(current_season_with_current_time(local(2024, 7, 1)), "2024-2025");
        assert_eq!(current_season_with_current_time(local(2024, 6, 30)), "2023-2024");
        assert_eq!(current_season_with_current_time(local(2026, 10, 14)), "2026-2027");
    }

    #[test]
    fn test_current_season_cutover_window() {
        assert_eq!(current_season_with_current_time(local(2025, 5, 10)), "2025-2026");
        assert_eq!(current_season_with_current_time(local(2025, 6, 30)), "2025-2026");
        assert_eq!(current_season_with_current_time(local(2025, 1, 10)), "2024-2025");
        assert_eq!(current_season_with_current_time(local(2025, 4, 30)), "2024-2025");
        assert_eq!(current_season_with_current_time(local(2025, 12, 1)), "2025-2026");
    }

    #[test]
    fn test_cutover_is_not_generalized_to_other_years() {
        assert_eq!(current_season_with_current_time(local(2026, 5, 10)), "2025-2026");
        assert_eq!(current_season_with_current_time(local(2024, 5, 10)), "2023-2024");
    }

    #[test]
    fn test_current_season_accepts_naive_dates() {
        assert_eq!(current_season_with_current_time(date(2023, 9, 1)), "2023-2024");
    }

    #[test]
    fn test_effective_today() {
        assert_eq!(effective_today_with_current_time(local(2025, 3, 1)), date(2025, 7, 1));
        assert_eq!(effective_today_with_current_time(local(2025, 6, 30)), date(2025, 7, 1));
        assert_eq!(effective_today_with_current_time(local(2025, 8, 1)), date(2025, 8, 1));
        assert_eq!(effective_today_with_current_time(local(2024, 12, 1)), date(2024, 12, 1));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::at_date(date(2025, 2, 14));
        assert_eq!(clock.current_season(), "2024-2025");
        assert_eq!(clock.effective_today(), date(2025, 7, 1));

        let clock = FixedClock::at_date(date(2024, 11, 3));
        assert_eq!(clock.current_season(), "2024-2025");
        assert_eq!(clock.effective_today(), date(2024, 11, 3));
    }

    #[test]
    fn test_season_bounds() {
        assert_eq!(
            season_bounds("2024-2025"),
            Some((date(2024, 7, 1), date(2025, 6, 30)))
        );
        assert_eq!(season_bounds("2024-2026"), None);
        assert_eq!(season_bounds("Okänd"), None);
        assert_eq!(season_bounds(""), None);
    }
}
