//! Month-grouped event list with detail cards

use reqwest::Url;
use serde::Serialize;
use std::io::Write;

use super::Renderer;
use super::colors::{date_fg, link_fg, section_fg, subheader_fg, text_fg};
use super::formatting::event_count;
use crate::constants::labels::PAST_EVENTS;
use crate::constants::layout::DETAIL_INDENT;
use crate::data_fetcher::models::{EventRecord, http_link};
use crate::error::AppError;
use crate::pipeline::MonthGroup;
use crate::pipeline::dates::format_date_range;
use crate::view::ScheduleSnapshot;

/// One line of a card section. Lines without a label are free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLine {
    pub label: Option<&'static str>,
    pub value: String,
    pub is_link: bool,
}

impl CardLine {
    fn labeled(label: &'static str, value: &str) -> Self {
        CardLine {
            label: Some(label),
            value: value.to_string(),
            is_link: false,
        }
    }

    fn text(value: &str) -> Self {
        CardLine {
            label: None,
            value: value.to_string(),
            is_link: false,
        }
    }

    fn link(label: &'static str, url: &str) -> Self {
        CardLine {
            label: Some(label),
            value: url.to_string(),
            is_link: true,
        }
    }
}

/// A titled block of an event card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSection {
    pub title: &'static str,
    pub lines: Vec<CardLine>,
}

/// Date text shown on a card: the formatted range, or whichever end exists.
pub fn event_period(record: &EventRecord) -> String {
    match (record.date_from.as_deref(), record.date_to.as_deref()) {
        (Some(from), Some(to)) => format_date_range(from, to),
        (Some(single), None) | (None, Some(single)) => single.to_string(),
        (None, None) => String::new(),
    }
}

fn push_labeled(lines: &mut Vec<CardLine>, label: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        lines.push(CardLine::labeled(label, value));
    }
}

fn push_link(lines: &mut Vec<CardLine>, label: &'static str, value: Option<&str>) {
    if let Some(url) = http_link(value) {
        lines.push(CardLine::link(label, url));
    }
}

/// Host name of a link without a leading `www.`, e.g. `umeacup.se`.
fn link_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(host.trim_start_matches("www.").to_string())
}

fn map_link(address: &str) -> Option<String> {
    Url::parse_with_params(
        "https://www.google.com/maps/search/",
        &[("api", "1"), ("query", address)],
    )
    .ok()
    .map(String::from)
}

/// Detail sections of a card. Sections without any populated cell are left out,
/// except the basic info which always has at least the period.
pub fn card_sections(record: &EventRecord) -> Vec<CardSection> {
    let mut sections = Vec::new();

    let mut basic = Vec::new();
    push_labeled(&mut basic, "Typ", record.event_type.as_deref());
    push_labeled(&mut basic, "Plats", record.place.as_deref());
    let period = event_period(record);
    if !period.is_empty() {
        basic.push(CardLine::labeled("Period", &period));
    }
    if let Some(info) = record.other_info.as_deref() {
        basic.push(CardLine::text(info));
    }
    sections.push(CardSection {
        title: "Grundläggande info",
        lines: basic,
    });

    let mut leave = Vec::new();
    if record.is_free_from_school() {
        leave.push(CardLine::labeled("Ledig från skolan", "Ja"));
    } else if record.is_not_free_from_school() {
        leave.push(CardLine::labeled("Ledig från skolan", "Nej"));
    }
    if let Some(notes) = record.leave_notes.as_deref() {
        leave.push(CardLine::text(notes));
    }
    if record.free_from_school.is_some() || record.leave_notes.is_some() {
        sections.push(CardSection {
            title: "Ledig från skolan",
            lines: leave,
        });
    }

    let mut costs = Vec::new();
    push_labeled(&mut costs, "Kostnad", record.cost.as_deref());
    push_labeled(&mut costs, "Sista betalningsdag", record.payment_deadline.as_deref());
    push_labeled(&mut costs, "Betalningsmottagare", record.payee.as_deref());
    if !costs.is_empty() {
        sections.push(CardSection {
            title: "Kostnader",
            lines: costs,
        });
    }

    let mut trip = Vec::new();
    push_labeled(&mut trip, "Samling Härnösand", record.meet_home.as_deref());
    push_labeled(&mut trip, "Samling på plats", record.meet_on_site.as_deref());
    if let Some(route) = record.route.as_deref() {
        trip.push(CardLine::text(route));
    }
    push_labeled(&mut trip, "Färdsätt", record.transport.as_deref());
    if !trip.is_empty() {
        sections.push(CardSection {
            title: "Resan",
            lines: trip,
        });
    }

    let mut lodging = Vec::new();
    push_labeled(&mut lodging, "Typ av boende", record.lodging_type.as_deref());
    push_labeled(&mut lodging, "Namn på boende", record.lodging_name.as_deref());
    push_labeled(&mut lodging, "Tillgång till boende", record.lodging_access.as_deref());
    if let Some(address) = record.lodging_address.as_deref() {
        lodging.push(CardLine::labeled("Adress till boende", address));
        if let Some(url) = map_link(address) {
            lodging.push(CardLine::link("Karta", &url));
        }
    }
    if !lodging.is_empty() {
        sections.push(CardSection {
            title: "Boende",
            lines: lodging,
        });
    }

    let mut links = Vec::new();
    if let Some(url) = http_link(record.website.as_deref()) {
        let label = "Hemsida";
        links.push(CardLine {
            label: Some(label),
            value: match link_host(url) {
                Some(host) => format!("{host} ({url})"),
                None => url.to_string(),
            },
            is_link: true,
        });
    }
    push_link(&mut links, "Bilder", record.photos.as_deref());
    push_link(&mut links, "Boendets hemsida", record.lodging_website.as_deref());
    if !links.is_empty() {
        sections.push(CardSection {
            title: "Länkar",
            lines: links,
        });
    }

    sections
}

fn render_card<W: Write>(renderer: &mut Renderer<W>, record: &EventRecord) -> Result<(), AppError> {
    let period = event_period(record);
    renderer.line(
        DETAIL_INDENT / 2,
        &[(date_fg(), &format!("{period:<24}")), (text_fg(), record.display_name())],
    )?;

    for section in card_sections(record) {
        if section.lines.is_empty() {
            continue;
        }
        renderer.line(DETAIL_INDENT, &[(section_fg(), section.title)])?;
        for line in &section.lines {
            let value_color = if line.is_link { link_fg() } else { text_fg() };
            match line.label {
                Some(label) => renderer.line(
                    DETAIL_INDENT + 2,
                    &[(subheader_fg(), &format!("{label}: ")), (value_color, &line.value)],
                )?,
                None => renderer.line(DETAIL_INDENT + 2, &[(value_color, &line.value)])?,
            }
        }
    }
    Ok(())
}

fn render_months<W: Write>(renderer: &mut Renderer<W>, months: &[MonthGroup]) -> Result<(), AppError> {
    for group in months {
        renderer.blank()?;
        renderer.subheader(&format!("{}  ({})", group.title(), event_count(group.events.len())))?;
        for record in &group.events {
            render_card(renderer, record)?;
        }
    }
    Ok(())
}

/// Renders the events view: upcoming months, then past events for the current
/// season, or every season when none is selected.
pub fn render_snapshot<W: Write>(
    renderer: &mut Renderer<W>,
    snapshot: &ScheduleSnapshot,
) -> Result<(), AppError> {
    match snapshot {
        ScheduleSnapshot::Season {
            season,
            is_current,
            listing,
            ..
        } => {
            renderer.header(&format!("HÄNDELSER {season}"))?;
            if listing.upcoming.is_empty() {
                renderer.blank()?;
                renderer.line(0, &[(text_fg(), "Inga kommande händelser.")])?;
            }
            render_months(renderer, &listing.upcoming)?;

            if *is_current && !listing.past.is_empty() {
                let count: usize = listing.past.iter().map(|g| g.events.len()).sum();
                renderer.blank()?;
                renderer.header(&format!("{PAST_EVENTS} ({count})"))?;
                render_months(renderer, &listing.past)?;
            }
        }
        ScheduleSnapshot::AllSeasons { seasons } => {
            renderer.header("HÄNDELSER ALLA SÄSONGER")?;
            for group in seasons {
                renderer.blank()?;
                renderer.header(&format!("Säsong {}", group.season))?;
                render_months(renderer, &group.months)?;
            }
        }
    }
    renderer.flush()
}
