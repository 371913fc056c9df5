//! Month and ISO-week grouped list of upcoming events

use std::io::Write;

use super::Renderer;
use super::colors::{date_fg, text_fg, week_fg};
use super::events::event_period;
use super::formatting::event_count;
use crate::data_fetcher::models::EventRecord;
use crate::error::AppError;
use crate::pipeline::WeekKind;
use crate::view::WeeklyMonth;

fn render_event_line<W: Write>(
    renderer: &mut Renderer<W>,
    indent: usize,
    record: &EventRecord,
) -> Result<(), AppError> {
    let place = record
        .place
        .as_deref()
        .map(|p| format!(" ({p})"))
        .unwrap_or_default();
    renderer.line(
        indent,
        &[
            (date_fg(), &format!("{:<24}", event_period(record))),
            (text_fg(), record.display_name()),
            (text_fg(), &place),
        ],
    )
}

/// Renders upcoming events month by month, with same-week events under a
/// week heading.
pub fn render_weeks<W: Write>(
    renderer: &mut Renderer<W>,
    season: Option<&str>,
    months: &[WeeklyMonth],
) -> Result<(), AppError> {
    match season {
        Some(season) => renderer.header(&format!("VECKOVY {season}"))?,
        None => renderer.header("VECKOVY ALLA SÄSONGER")?,
    }

    if months.is_empty() {
        renderer.blank()?;
        renderer.line(0, &[(text_fg(), "Inga kommande händelser.")])?;
    }

    for weekly in months {
        renderer.blank()?;
        renderer.subheader(&format!(
            "{}  ({})",
            weekly.month.title(),
            event_count(weekly.month.events.len())
        ))?;

        for week in &weekly.weeks {
            match (week.kind, week.label.as_deref()) {
                (WeekKind::Week, Some(label)) => {
                    renderer.line(2, &[(week_fg(), label)])?;
                    for record in &week.events {
                        render_event_line(renderer, 4, record)?;
                    }
                }
                _ => {
                    for record in &week.events {
                        render_event_line(renderer, 2, record)?;
                    }
                }
            }
        }
    }
    renderer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::render_plain;
    use crate::season::FixedClock;
    use crate::testing_utils::TestDataBuilder;
    use crate::view::ScheduleView;
    use chrono::NaiveDate;

    #[test]
    fn test_week_heading_only_for_shared_weeks() {
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
        let records = vec![
            TestDataBuilder::event("Träningsmatch", "2024-2025", "2024-09-17")
                .with_place("Härnösand")
                .build(),
            TestDataBuilder::event("Seriematch", "2024-2025", "2024-09-21").build(),
            TestDataBuilder::event("Cup", "2024-2025", "2024-09-28").build(),
        ];
        let view = ScheduleView::new(records, &clock);
        let weekly = view.weekly(&clock);
        let output = render_plain(|r| render_weeks(r, Some("2024-2025"), &weekly));

        assert!(output.starts_with("VECKOVY 2024-2025\n"));
        assert!(output.contains("Vecka 38 (16–22 sep)"));
        assert!(!output.contains("Vecka 39"));
        assert!(output.contains("Träningsmatch (Härnösand)"));
        assert!(output.contains("2024 – september  (3 händelser)"));
    }

    #[test]
    fn test_empty_weeks_view() {
        let output = render_plain(|r| render_weeks(r, Some("2024-2025"), &[]));
        assert!(output.contains("Inga kommande händelser."));
    }
}
