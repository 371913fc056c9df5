//! Club event schedule library
//!
//! This library fetches a sports club's published event sheet (CSV) and
//! derives the views of its schedule: events by month, split into upcoming
//! and past, ISO-week groups, per-month costs and a season overview.
//!
//! # Examples
//!
//! ```rust,no_run
//! use club_schedule::data_fetcher::ScheduleSource;
//! use club_schedule::display::{Renderer, render_snapshot};
//! use club_schedule::error::AppError;
//! use club_schedule::season::SystemClock;
//! use club_schedule::view::ScheduleView;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let source = ScheduleSource::from_location("events.csv");
//!     let records = source.load(30).await?;
//!
//!     let clock = SystemClock;
//!     let mut view = ScheduleView::new(records, &clock);
//!     view.toggle_type("Cup");
//!
//!     let mut renderer = Renderer::new(std::io::stdout(), false);
//!     render_snapshot(&mut renderer, &view.snapshot(&clock))?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod display;
pub mod error;
pub mod pipeline;
pub mod season;
pub mod testing_utils;
pub mod view;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{EventRecord, ScheduleSource, parse_events};
pub use error::AppError;
pub use season::{FixedClock, SeasonClock, SystemClock, current_season, effective_today};
pub use view::{ScheduleSnapshot, ScheduleView};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
