use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};
use club_schedule::pipeline::TimeScale;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Which view to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewKind {
    /// Events by month, past events last
    #[default]
    Events,
    /// Upcoming events by month and ISO week
    Weeks,
    /// Cost per month and season total
    Budget,
    /// Season timeline
    Overview,
    /// Filter values on offer
    Options,
}

/// Free-from-school filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum School {
    Ja,
    Nej,
}

impl School {
    pub fn as_str(self) -> &'static str {
        match self {
            School::Ja => "ja",
            School::Nej => "nej",
        }
    }
}

/// Column width of the overview timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Scale {
    Day,
    Week,
    #[default]
    Month,
}

impl From<Scale> for TimeScale {
    fn from(scale: Scale) -> Self {
        match scale {
            Scale::Day => TimeScale::Day,
            Scale::Week => TimeScale::Week,
            Scale::Month => TimeScale::Month,
        }
    }
}

/// Returns true when the run only reads or updates configuration.
pub fn is_config_command(args: &Args) -> bool {
    args.list_config
        || args.new_events_url.is_some()
        || args.new_budget_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Club event schedule viewer
///
/// Fetches the club's published events sheet once and prints the selected
/// view: the season's events by month, a week view, the budget, a season
/// overview or the filter values on offer.
///
/// The current season (July to June) is preselected when the sheet has it.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// View to render.
    #[arg(long = "view", value_enum, default_value_t = ViewKind::Events, help_heading = "Display Options")]
    pub view: ViewKind,

    /// Season to show, e.g. 2024-2025. Defaults to the current season when the sheet has it.
    #[arg(long = "season", short = 's', help_heading = "Filters", conflicts_with = "all_seasons")]
    pub season: Option<String>,

    /// Show every season instead of one.
    #[arg(long = "all-seasons", short = 'a', help_heading = "Filters")]
    pub all_seasons: bool,

    /// Event type to include. Repeat to include several.
    #[arg(long = "type", short = 't', help_heading = "Filters")]
    pub event_types: Vec<String>,

    /// Place to include. Repeatable in the overview, elsewhere only the first is used.
    #[arg(long = "place", short = 'p', help_heading = "Filters")]
    pub places: Vec<String>,

    /// Only events with (ja) or without (nej) leave from school.
    #[arg(long = "school", value_enum, help_heading = "Filters")]
    pub school: Option<School>,

    /// Timeline scale of the overview.
    #[arg(long = "scale", value_enum, default_value_t = Scale::Month, help_heading = "Display Options")]
    pub scale: Scale,

    /// Read the sheet from this URL or CSV file instead of the configured one.
    #[arg(long = "source", help_heading = "Display Options")]
    pub source: Option<String>,

    /// Treat this date (YYYY-MM-DD) as today.
    #[arg(long = "today", help_heading = "Display Options")]
    pub today: Option<String>,

    /// Print the view as JSON.
    #[arg(long = "json", help_heading = "Display Options", conflicts_with = "plain")]
    pub json: bool,

    /// Print without colors.
    #[arg(long = "plain", help_heading = "Display Options")]
    pub plain: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Set the events sheet URL (or CSV file) in config.
    #[arg(long = "set-events-url", value_name = "URL", help_heading = "Configuration")]
    pub new_events_url: Option<String>,

    /// Set the budget sheet URL (or CSV file) in config.
    #[arg(long = "set-budget-url", value_name = "URL", help_heading = "Configuration")]
    pub new_budget_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Also write logs to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
