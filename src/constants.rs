//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and default configuration values
//! so the rest of the codebase can refer to them by name.

/// Published events sheet (CSV export)
pub const DEFAULT_EVENTS_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRjWqqqO7FHa-re2G6iIemdPD12hUJK15z2InQoSUIhZ08Szlg_tO8muapx6cAGVYF6egrltGC60tuE/pub?output=csv";

/// Published budget sheet (CSV export)
pub const DEFAULT_BUDGET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQwy0b0RMcUXo3xguOtukMryHNlYnebQdskaIWHXr3POx7fg9NfUHsMTGjOlDnkOJZybrWZ7r36NfB1/pub?output=csv";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Name used for the config directory and the log file
pub const APP_DIR_NAME: &str = "club_schedule";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "club_schedule.log";

/// Environment variable overrides for configuration values
pub mod env_vars {
    pub const EVENTS_URL: &str = "CLUB_SCHEDULE_EVENTS_URL";
    pub const BUDGET_URL: &str = "CLUB_SCHEDULE_BUDGET_URL";
    pub const LOG_FILE: &str = "CLUB_SCHEDULE_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "CLUB_SCHEDULE_HTTP_TIMEOUT";
}

/// Labels shown in the rendered views
pub mod labels {
    /// Season label used when a record carries no season
    pub const UNKNOWN_SEASON: &str = "Okänd";

    /// Month heading used for records without a month number
    pub const UNKNOWN_MONTH: &str = "Okänd månad";

    /// Heading of the collapsed past-events section
    pub const PAST_EVENTS: &str = "Tidigare händelser";

    /// Currency suffix used by the budget sheet
    pub const CURRENCY: &str = "kr";
}

/// Layout constants for the text renderer
pub mod layout {
    /// Left margin for all rendered content
    pub const CONTENT_MARGIN: usize = 2;

    /// Indentation of detail lines under an event card
    pub const DETAIL_INDENT: usize = 4;

    /// Width of the event name column in the season overview
    pub const OVERVIEW_NAME_WIDTH: usize = 28;

    /// Maximum number of timeline columns in the season overview
    pub const OVERVIEW_MAX_COLUMNS: usize = 90;

    /// Width of the event name column in the budget table
    pub const BUDGET_NAME_WIDTH: usize = 32;

    /// Width of the cost column in the budget table
    pub const BUDGET_COST_WIDTH: usize = 14;
}
