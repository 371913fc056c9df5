//! End-to-end checks of the event pipeline, from sheet CSV to grouped views

use chrono::NaiveDate;
use club_schedule::data_fetcher::parse_events;
use club_schedule::pipeline::{
    FilterSelection, MonthKey, aggregate_cost, filter_events, group_by_month, group_by_week,
    partition_events,
};
use club_schedule::season::{current_season_with_current_time, effective_today_with_current_time};
use club_schedule::season::{FixedClock, SeasonClock};

const SHEET: &str = "\
Säsong,Typ av händelse,Plats,Ledig från skolan?,Namn på händelse,Datum från,Datum till,År,Månadsnummer,Månadsnamn,Kostnad per spelare,Sista betalningsdag,Betalningsmottagare,Övrig information
2024-2025,Cup,Umeå,ja,Höstcupen,2024-09-14,2024-09-15,2024,9,september,150 kr,2024-09-01,Föreningen,
2024-2025,Resa,Oslo,nej,\"Oslo, Norway Cup\",2024-12-28,2025-01-02,2024,12,december,\"1 234,50 kr\",,,\"Ta med pass
och matsäck\"
,,,,,,,,,,,,,
2024-2025,Läger,Åre,nej,Vinterläger,2025-01-10,2025-01-12,2025,1,januari,,,,
2024-2025,Match,Härnösand,,Utan månad,2025-02-01,,2025,,,abc,,,
2023-2024,Cup,Sundsvall,ja,Förra säsongen,2024-03-02,2024-03-03,2024,3,mars,300 kr,,,
";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_sheet_parses_with_quoted_and_blank_rows() {
    let records = parse_events(SHEET, "sheet").unwrap();
    assert_eq!(records.len(), 5);

    let oslo = &records[1];
    assert_eq!(oslo.name.as_deref(), Some("Oslo, Norway Cup"));
    assert_eq!(oslo.cost.as_deref(), Some("1 234,50 kr"));
    assert_eq!(oslo.other_info.as_deref(), Some("Ta med pass\noch matsäck"));
    assert_eq!(oslo.payment_deadline, None);
}

#[test]
fn test_season_labels_and_effective_today() {
    assert_eq!(current_season_with_current_time(date(2024, 3, 15)), "2023-2024");
    assert_eq!(current_season_with_current_time(date(2024, 8, 1)), "2024-2025");
    assert_eq!(current_season_with_current_time(date(2025, 5, 10)), "2025-2026");
    assert_eq!(current_season_with_current_time(date(2025, 1, 10)), "2024-2025");

    let clock = FixedClock::at_date(date(2025, 3, 1));
    assert_eq!(clock.effective_today(), date(2025, 7, 1));
    let unchanged = FixedClock::at_date(date(2024, 12, 1));
    assert_eq!(
        effective_today_with_current_time(unchanged.now()),
        date(2024, 12, 1)
    );
}

#[test]
fn test_filter_by_season_keeps_sheet_order() {
    let records = parse_events(SHEET, "sheet").unwrap();
    let selection = FilterSelection::default().with_season("2024-2025");
    let names: Vec<_> = filter_events(&records, &selection)
        .iter()
        .map(|r| r.display_name().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["Höstcupen", "Oslo, Norway Cup", "Vinterläger", "Utan månad"]
    );
}

#[test]
fn test_month_groups_cross_year_and_unknown_last() {
    let records = parse_events(SHEET, "sheet").unwrap();
    let season = filter_events(&records, &FilterSelection::default().with_season("2024-2025"));
    let groups = group_by_month(&season);

    let keys: Vec<_> = groups.iter().map(|g| g.key.sort_key()).collect();
    assert_eq!(
        keys,
        vec![
            Some("2024-09".to_string()),
            Some("2024-12".to_string()),
            Some("2025-01".to_string()),
            None
        ]
    );
    assert_eq!(groups.last().unwrap().key, MonthKey::Unknown);
}

#[test]
fn test_partition_against_effective_today() {
    let records = parse_events(SHEET, "sheet").unwrap();
    let season = filter_events(&records, &FilterSelection::default().with_season("2024-2025"));

    // The Oslo trip ends 2025-01-02: still upcoming that day, past the day after
    let split = partition_events(&season, Some("2024-2025"), "2024-2025", date(2025, 1, 2));
    assert!(split.upcoming.iter().any(|r| r.display_name() == "Oslo, Norway Cup"));

    let split = partition_events(&season, Some("2024-2025"), "2024-2025", date(2025, 1, 3));
    assert!(split.past.iter().any(|r| r.display_name() == "Oslo, Norway Cup"));
    assert_eq!(split.upcoming.len() + split.past.len(), season.len());
}

#[test]
fn test_cost_totals() {
    let records = parse_events(SHEET, "sheet").unwrap();
    let season = filter_events(&records, &FilterSelection::default().with_season("2024-2025"));
    let summary = aggregate_cost(&season);

    assert_eq!(summary.total, 1384.5);
    assert_eq!(summary.months.len(), 4);
    assert_eq!(summary.months[1].total, 1234.5);
    assert_eq!(summary.months[3].total, 0.0, "'abc' counts as zero");
}

#[test]
fn test_filter_and_grouping_are_idempotent() {
    let records = parse_events(SHEET, "sheet").unwrap();
    let selection = FilterSelection::default()
        .with_season("2024-2025")
        .with_type("Cup");
    let first = group_by_month(&filter_events(&records, &selection));
    let second = group_by_month(&filter_events(&records, &selection));
    assert_eq!(first, second);
}

#[test]
fn test_week_groups_inside_months() {
    let records = parse_events(SHEET, "sheet").unwrap();
    let groups = group_by_month(&records);
    for group in &groups {
        let weeks = group_by_week(group);
        let total: usize = weeks.iter().map(|w| w.events.len()).sum();
        assert_eq!(total, group.events.len());
    }
}
