pub mod api;
pub mod csv_parser;
pub mod models;
pub mod source;

pub use csv_parser::parse_events;
pub use models::EventRecord;
pub use source::ScheduleSource;
