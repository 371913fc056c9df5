//! Filter values on offer for the current selection

use std::io::Write;

use super::Renderer;
use super::colors::{section_fg, subheader_fg, text_fg};
use crate::error::AppError;
use crate::pipeline::FilterSelection;
use crate::view::FilterOptions;

fn render_list<W: Write>(
    renderer: &mut Renderer<W>,
    title: &str,
    values: &[String],
    is_selected: impl Fn(&str) -> bool,
) -> Result<(), AppError> {
    renderer.blank()?;
    renderer.line(0, &[(section_fg(), title)])?;
    if values.is_empty() {
        renderer.line(2, &[(text_fg(), "(inga)")])?;
    }
    for value in values {
        let marker = if is_selected(value) { "[x] " } else { "[ ] " };
        renderer.line(2, &[(subheader_fg(), marker), (text_fg(), value)])?;
    }
    Ok(())
}

/// Lists the seasons, types and places that can be selected, marking the
/// current selection.
pub fn render_options<W: Write>(
    renderer: &mut Renderer<W>,
    options: &FilterOptions,
    selection: &FilterSelection,
) -> Result<(), AppError> {
    renderer.header("FILTERVAL")?;

    render_list(renderer, "Säsong", &options.seasons, |s| {
        selection.season.as_deref() == Some(s)
    })?;
    render_list(renderer, "Typ av händelse", &options.event_types, |t| {
        selection.event_types.contains(t)
    })?;
    render_list(renderer, "Plats", &options.places, |p| {
        selection.place.as_deref() == Some(p)
    })?;

    let school = match selection.free_from_school.as_deref() {
        Some(value) => value.to_string(),
        None => "alla".to_string(),
    };
    renderer.blank()?;
    renderer.line(
        0,
        &[(section_fg(), "Ledig från skolan: "), (text_fg(), &school)],
    )?;
    renderer.flush()
}
