//! Text Gantt chart of a season

use std::io::Write;

use super::Renderer;
use super::colors::{bar_fg, date_fg, subheader_fg, text_fg};
use super::formatting::pad_right;
use crate::constants::layout::{OVERVIEW_MAX_COLUMNS, OVERVIEW_NAME_WIDTH};
use crate::error::AppError;
use crate::pipeline::{GanttTask, TimeScale, TimelineColumn, task_span, timeline, timeline_range};
use crate::season::season_bounds;

/// Character cells per timeline column.
fn cell_width(scale: TimeScale) -> usize {
    match scale {
        TimeScale::Day => 3,
        TimeScale::Week | TimeScale::Month => 4,
    }
}

/// Header row of column labels.
fn label_row(columns: &[TimelineColumn], width: usize) -> String {
    columns.iter().map(|c| pad_right(&c.label, width)).collect()
}

/// Bar of one task: filled cells for the columns it covers.
pub fn bar_cells(span: Option<(usize, usize)>, column_count: usize, width: usize) -> String {
    let filled = format!("{} ", "█".repeat(width.saturating_sub(1)));
    let empty = format!("·{}", " ".repeat(width.saturating_sub(1)));
    (0..column_count)
        .map(|i| match span {
            Some((first, last)) if i >= first && i <= last => filled.as_str(),
            _ => empty.as_str(),
        })
        .collect()
}

/// Renders the overview: one bar per task over a timeline spanning the season.
pub fn render_overview<W: Write>(
    renderer: &mut Renderer<W>,
    season: &str,
    tasks: &[GanttTask],
    scale: TimeScale,
) -> Result<(), AppError> {
    renderer.header(&format!("SÄSONGSÖVERSIKT {season}"))?;

    let Some((from, to)) = timeline_range(tasks, season_bounds(season)) else {
        renderer.blank()?;
        renderer.line(0, &[(text_fg(), "Inga händelser att visa.")])?;
        return renderer.flush();
    };

    let width = cell_width(scale);
    let max_columns = OVERVIEW_MAX_COLUMNS / width;
    let columns = timeline(from, to, scale, max_columns);

    renderer.blank()?;
    renderer.line(
        0,
        &[
            (subheader_fg(), &pad_right("", OVERVIEW_NAME_WIDTH + 1)),
            (date_fg(), &label_row(&columns, width)),
        ],
    )?;

    for task in tasks {
        let span = task_span(task, &columns);
        renderer.line(
            0,
            &[
                (text_fg(), &pad_right(&task.name, OVERVIEW_NAME_WIDTH)),
                (text_fg(), " "),
                (bar_fg(), &bar_cells(span, columns.len(), width)),
            ],
        )?;
    }

    if tasks.is_empty() {
        renderer.line(0, &[(text_fg(), "Inga händelser att visa.")])?;
    }
    renderer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::render_plain;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_bar_cells() {
        assert_eq!(bar_cells(Some((1, 2)), 4, 2), "· █ █ · ");
        assert_eq!(bar_cells(None, 2, 3), "·  ·  ");
    }

    #[test]
    fn test_render_month_overview() {
        let tasks = vec![GanttTask {
            name: "Vinterläger".to_string(),
            start: date(2025, 2, 10),
            end: date(2025, 3, 2),
            event_type: Some("Läger".to_string()),
            place: Some("Åre".to_string()),
        }];
        let output = render_plain(|r| render_overview(r, "2024-2025", &tasks, TimeScale::Month));

        assert!(output.starts_with("SÄSONGSÖVERSIKT 2024-2025\n"));
        let labels = output.lines().find(|l| l.contains("jul")).unwrap();
        assert!(labels.trim_start().starts_with("jul"));
        assert!(labels.contains("jun"));

        let bar = output.lines().find(|l| l.contains("Vinterläger")).unwrap();
        // Jul..Jan empty, Feb and Mar filled, Apr..Jun empty
        assert_eq!(bar.matches("███").count(), 2);
        assert_eq!(bar.matches('·').count(), 10);
    }

    #[test]
    fn test_render_overview_without_tasks_or_bounds() {
        let output = render_plain(|r| render_overview(r, "Okänd", &[], TimeScale::Week));
        assert!(output.contains("Inga händelser att visa."));
    }
}
