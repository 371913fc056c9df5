//! Terminal rendering of the schedule views
//!
//! Every view writes to any [`std::io::Write`] through a [`Renderer`], which
//! applies the teletext palette with crossterm or, in plain mode, writes bare
//! text. `--json` output bypasses the renderer and serializes the same view
//! structures with serde_json.

pub mod budget;
pub mod colors;
pub mod events;
pub mod formatting;
pub mod options;
pub mod overview;
pub mod weeks;

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use serde::Serialize;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

use crate::constants::layout::CONTENT_MARGIN;
use crate::error::AppError;
use colors::{header_bg, header_fg, subheader_fg};

pub use budget::render_budget;
pub use events::{CardLine, CardSection, card_sections, render_snapshot};
pub use formatting::format_money;
pub use options::render_options;
pub use overview::render_overview;
pub use weeks::render_weeks;

/// Width of the header bar.
const HEADER_WIDTH: usize = 60;

/// Line-oriented writer with optional colors.
pub struct Renderer<W: Write> {
    out: W,
    plain: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, plain: bool) -> Self {
        Renderer { out, plain }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes a full-width header bar, e.g. `HÄNDELSER 2024-2025`.
    pub fn header(&mut self, title: &str) -> Result<(), AppError> {
        let pad = HEADER_WIDTH.saturating_sub(title.width() + 2);
        let bar = format!(" {title}{} ", " ".repeat(pad));
        if self.plain {
            writeln!(self.out, "{title}")?;
            writeln!(self.out, "{}", "=".repeat(title.width()))?;
        } else {
            queue!(
                self.out,
                SetBackgroundColor(header_bg()),
                SetForegroundColor(header_fg()),
                Print(bar),
                ResetColor,
                Print("\n")
            )?;
        }
        Ok(())
    }

    /// Writes a subheading at the content margin.
    pub fn subheader(&mut self, title: &str) -> Result<(), AppError> {
        self.line(0, &[(subheader_fg(), title)])
    }

    /// Writes one line made of colored segments, indented past the content margin.
    pub fn line(&mut self, indent: usize, segments: &[(Color, &str)]) -> Result<(), AppError> {
        write!(self.out, "{}", " ".repeat(CONTENT_MARGIN + indent))?;
        for (color, text) in segments {
            if self.plain {
                write!(self.out, "{text}")?;
            } else {
                queue!(self.out, SetForegroundColor(*color), Print(text), ResetColor)?;
            }
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<(), AppError> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), AppError> {
        self.out.flush()?;
        Ok(())
    }
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn render_plain<F>(render: F) -> String
where
    F: FnOnce(&mut Renderer<Vec<u8>>) -> Result<(), AppError>,
{
    let mut renderer = Renderer::new(Vec::new(), true);
    render(&mut renderer).unwrap();
    String::from_utf8(renderer.into_inner()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use colors::text_fg;

    #[test]
    fn test_plain_mode_has_no_escape_codes() {
        let output = render_plain(|r| {
            r.header("HÄNDELSER")?;
            r.line(2, &[(text_fg(), "Höstcup")])
        });
        assert_eq!(output, "HÄNDELSER\n=========\n    Höstcup\n");
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_colored_mode_emits_escape_codes() {
        let mut renderer = Renderer::new(Vec::new(), false);
        renderer.subheader("2024 – september").unwrap();
        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(output.contains("\x1b["));
        assert!(output.contains("2024 – september"));
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&mut out, &vec!["2024-2025"]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("]\n"));
        let parsed: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec!["2024-2025"]);
    }
}
