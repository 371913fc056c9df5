use crossterm::style::Color;

// Teletext palette
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn date_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn week_fg() -> Color {
    Color::AnsiValue(201)
} // Bright magenta
pub fn section_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn money_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn link_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn bar_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
