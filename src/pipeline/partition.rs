use chrono::NaiveDate;
use serde::Serialize;

use super::dates::date_prefix;
use crate::data_fetcher::models::EventRecord;

/// Filtered records split around the effective today.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub upcoming: Vec<EventRecord>,
    pub past: Vec<EventRecord>,
}

/// Splits records into upcoming and past events.
///
/// The split only applies when `selected_season` is the current season;
/// for any other selection every record is upcoming. An event is past when
/// the date part of its end (`date_to`, else `date_from`) is strictly before
/// `today`, so an event ending today is still upcoming. Records without any
/// date are upcoming. Input order is kept in both halves.
pub fn partition_events(
    records: &[EventRecord],
    selected_season: Option<&str>,
    current_season: &str,
    today: NaiveDate,
) -> Partition {
    if selected_season != Some(current_season) {
        return Partition {
            upcoming: records.to_vec(),
            past: Vec::new(),
        };
    }

    let (past, upcoming): (Vec<EventRecord>, Vec<EventRecord>) = records
        .iter()
        .cloned()
        .partition(|record| ends_before(record, today));

    Partition { upcoming, past }
}

/// `true` when the record's end date lies strictly before `today`.
pub fn ends_before(record: &EventRecord, today: NaiveDate) -> bool {
    let Some(end) = record.end_date().map(date_prefix) else {
        return false;
    };
    if end.is_empty() {
        return false;
    }

    match NaiveDate::parse_from_str(end, "%Y-%m-%d") {
        Ok(end) => end < today,
        // Not an ISO date: compare as text, like the sheet's own ISO formatting would
        Err(_) => end < today.format("%Y-%m-%d").to_string().as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 14).unwrap()
    }

    #[test]
    fn test_event_ending_today_is_upcoming() {
        let records = vec![
            TestDataBuilder::event("Idag", "2024-2025", "2024-10-12")
                .with_date_to("2024-10-14")
                .build(),
            TestDataBuilder::event("Igår", "2024-2025", "2024-10-12")
                .with_date_to(&(today() - Duration::days(1)).format("%Y-%m-%d").to_string())
                .build(),
        ];

        let split = partition_events(&records, Some("2024-2025"), "2024-2025", today());
        assert_eq!(split.upcoming.len(), 1);
        assert_eq!(split.upcoming[0].display_name(), "Idag");
        assert_eq!(split.past.len(), 1);
        assert_eq!(split.past[0].display_name(), "Igår");
    }

    #[test]
    fn test_date_from_is_used_without_date_to() {
        let records = vec![TestDataBuilder::event("Match", "2024-2025", "2024-10-01").build()];
        let split = partition_events(&records, Some("2024-2025"), "2024-2025", today());
        assert_eq!(split.past.len(), 1);
        assert!(split.upcoming.is_empty());
    }

    #[test]
    fn test_time_component_is_ignored() {
        let records = vec![
            TestDataBuilder::event("Kväll", "2024-2025", "2024-10-14T19:00:00").build(),
        ];
        let split = partition_events(&records, Some("2024-2025"), "2024-2025", today());
        assert_eq!(split.upcoming.len(), 1);
    }

    #[test]
    fn test_other_season_is_all_upcoming() {
        let records = vec![
            TestDataBuilder::event("Gammal", "2023-2024", "2023-10-01").build(),
            TestDataBuilder::event("Äldre", "2023-2024", "2023-09-01").build(),
        ];
        let split = partition_events(&records, Some("2023-2024"), "2024-2025", today());
        assert_eq!(split.upcoming, records);
        assert!(split.past.is_empty());

        let split = partition_events(&records, None, "2024-2025", today());
        assert_eq!(split.upcoming.len(), 2);
        assert!(split.past.is_empty());
    }

    #[test]
    fn test_records_without_dates_are_upcoming() {
        let mut record = TestDataBuilder::event("Odaterad", "2024-2025", "2024-10-01").build();
        record.date_from = None;
        let split = partition_events(&[record], Some("2024-2025"), "2024-2025", today());
        assert_eq!(split.upcoming.len(), 1);
    }

    #[test]
    fn test_order_is_preserved_in_both_halves() {
        let records = vec![
            TestDataBuilder::event("B", "2024-2025", "2024-11-01").build(),
            TestDataBuilder::event("A", "2024-2025", "2024-09-01").build(),
            TestDataBuilder::event("D", "2024-2025", "2024-10-20").build(),
            TestDataBuilder::event("C", "2024-2025", "2024-08-01").build(),
        ];
        let split = partition_events(&records, Some("2024-2025"), "2024-2025", today());
        let upcoming: Vec<_> = split.upcoming.iter().map(|r| r.display_name()).collect();
        let past: Vec<_> = split.past.iter().map(|r| r.display_name()).collect();
        assert_eq!(upcoming, vec!["B", "D"]);
        assert_eq!(past, vec!["A", "C"]);
    }
}
