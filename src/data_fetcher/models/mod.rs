pub mod event;

pub use event::{EventRecord, columns, http_link};
