//! Text formatting helpers shared by the renderers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::constants::labels::CURRENCY;

/// Group separator used by Swedish number formatting (no-break space).
const GROUP_SEPARATOR: char = '\u{a0}';

/// Formats an amount the Swedish way, e.g. `1 234,5 kr`.
///
/// Thousands are grouped with a no-break space, the decimal separator is a
/// comma and at most three decimals are kept, without trailing zeros.
pub fn format_money(amount: f64) -> String {
    format!("{} {CURRENCY}", format_number(amount))
}

/// Number part of [`format_money`].
pub fn format_number(amount: f64) -> String {
    let rounded = (amount * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;
    let text = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    let mut result = String::new();
    if negative {
        result.push('-');
    }
    result.push_str(&grouped);
    if !frac_part.is_empty() {
        result.push(',');
        result.push_str(frac_part);
    }
    result
}

/// Cuts `text` to at most `width` terminal columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        result.push(ch);
        used += w;
    }
    result.push('…');
    result
}

/// Left-aligns `text` in a field of `width` columns, truncating if needed.
pub fn pad_right(text: &str, width: usize) -> String {
    let text = truncate_to_width(text, width);
    let pad = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(pad))
}

/// Right-aligns `text` in a field of `width` columns.
pub fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{text}", " ".repeat(pad))
}

/// `1 händelse` / `3 händelser`
pub fn event_count(count: usize) -> String {
    if count == 1 {
        "1 händelse".to_string()
    } else {
        format!("{count} händelser")
    }
}
