use crate::cli::{Args, ViewKind};
use chrono::NaiveDate;
use club_schedule::config::Config;
use club_schedule::data_fetcher::ScheduleSource;
use club_schedule::display::{
    Renderer, render_budget, render_options, render_overview, render_snapshot, render_weeks,
    write_json,
};
use club_schedule::error::AppError;
use club_schedule::pipeline::FilterSelection;
use club_schedule::season::{FixedClock, SeasonClock, SystemClock};
use club_schedule::view::{FilterOptions, ScheduleView};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::{Write, stdout};
use tracing::{info, warn};

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-events-url, --set-budget-url,
/// --set-log-file, --clear-log-file).
///
/// Starts from the current configuration, or the defaults when it cannot be
/// loaded, and saves the result.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(events_url) = &args.new_events_url {
        config.events_url = events_url.trim().to_string();
    }

    if let Some(budget_url) = &args.new_budget_url {
        config.budget_url = budget_url.trim().to_string();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Clock of this run: the system clock, or a fixed day from `--today`.
pub fn clock_from_args(args: &Args) -> Result<Box<dyn SeasonClock>, AppError> {
    match args.today.as_deref() {
        Some(text) => {
            let date = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|e| {
                AppError::datetime_parse_error(format!(
                    "Invalid --today '{text}', expected YYYY-MM-DD: {e}"
                ))
            })?;
            Ok(Box::new(FixedClock::at_date(date)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Sheet location for the requested view: `--source`, else the configured
/// budget or events sheet.
pub fn source_location<'a>(args: &'a Args, config: &'a Config) -> &'a str {
    match (&args.source, args.view) {
        (Some(source), _) => source.as_str(),
        (None, ViewKind::Budget) => config.budget_url.as_str(),
        (None, _) => config.events_url.as_str(),
    }
}

/// Applies the CLI filters through the view's cascade: season, then school,
/// then types, then place.
pub fn apply_filters(view: &mut ScheduleView, args: &Args) {
    if args.all_seasons {
        view.set_season(None);
    } else if let Some(season) = &args.season {
        if !view.options().seasons.contains(season) {
            warn!("Season {season} does not occur in the sheet");
        }
        view.set_season(Some(season.clone()));
    }

    if let Some(school) = args.school {
        view.set_school(Some(school.as_str().to_string()));
    }

    let types: BTreeSet<&str> = args.event_types.iter().map(String::as_str).collect();
    for event_type in types {
        view.toggle_type(event_type);
    }

    if args.view != ViewKind::Overview
        && let Some(place) = args.places.first()
    {
        view.set_place(Some(place.clone()));
    }
}

#[derive(Serialize)]
struct OptionsOutput<'a> {
    options: &'a FilterOptions,
    selection: &'a FilterSelection,
}

fn missing_season(view: &str) -> AppError {
    AppError::render_error(format!(
        "the {view} view needs a season, pick one with --season"
    ))
}

/// Renders the requested view of `view` to `out`.
pub fn render_view<W: Write>(
    out: W,
    args: &Args,
    view: &ScheduleView,
    clock: &dyn SeasonClock,
) -> Result<(), AppError> {
    let mut renderer = Renderer::new(out, args.plain);
    let season = view.selection().season.as_deref();

    match args.view {
        ViewKind::Events => {
            let snapshot = view.snapshot(clock);
            if args.json {
                write_json(&mut renderer.into_inner(), &snapshot)
            } else {
                render_snapshot(&mut renderer, &snapshot)
            }
        }
        ViewKind::Weeks => {
            let weekly = view.weekly(clock);
            if args.json {
                write_json(&mut renderer.into_inner(), &weekly)
            } else {
                render_weeks(&mut renderer, season, &weekly)
            }
        }
        ViewKind::Budget => {
            let (Some(season), Some(summary)) = (season, view.budget()) else {
                return Err(missing_season("budget"));
            };
            if args.json {
                write_json(&mut renderer.into_inner(), &summary)
            } else {
                render_budget(&mut renderer, season, &summary)
            }
        }
        ViewKind::Overview => {
            let places: BTreeSet<String> = args.places.iter().cloned().collect();
            let (Some(season), Some(tasks)) = (season, view.overview(&places)) else {
                return Err(missing_season("overview"));
            };
            if args.json {
                write_json(&mut renderer.into_inner(), &tasks)
            } else {
                render_overview(&mut renderer, season, &tasks, args.scale.into())
            }
        }
        ViewKind::Options => {
            if args.json {
                let output = OptionsOutput {
                    options: view.options(),
                    selection: view.selection(),
                };
                write_json(&mut renderer.into_inner(), &output)
            } else {
                render_options(&mut renderer, view.options(), view.selection())
            }
        }
    }
}

/// Fetches the sheet once, applies the filters and prints the requested view.
pub async fn handle_view_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let clock = clock_from_args(args)?;
    let source = ScheduleSource::from_location(source_location(args, config));

    let records = source.load(config.http_timeout_seconds).await?;
    info!("Loaded {} records from {source}", records.len());

    let mut view = ScheduleView::new(records, clock.as_ref());
    apply_filters(&mut view, args);

    render_view(stdout().lock(), args, &view, clock.as_ref())
}
