//! Loading of a sheet from its published URL or from a local CSV export

use std::fmt;
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::data_fetcher::api::{create_http_client_with_timeout, fetch_text};
use crate::data_fetcher::csv_parser::parse_events;
use crate::data_fetcher::models::EventRecord;
use crate::error::AppError;

/// Location of a sheet's CSV text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleSource {
    /// Published sheet reachable over HTTP(S)
    Url(String),
    /// CSV export on the local file system
    File(PathBuf),
}

impl ScheduleSource {
    /// Interprets `location` as a URL when it has an http(s) scheme,
    /// otherwise as a file path.
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            ScheduleSource::Url(location.to_string())
        } else {
            ScheduleSource::File(PathBuf::from(location))
        }
    }

    /// Fetches and parses the sheet.
    ///
    /// This is the only asynchronous step of a run: it resolves once with the
    /// full record list or fails once with the error.
    #[instrument(skip(self), fields(source = %self))]
    pub async fn load(&self, http_timeout_seconds: u64) -> Result<Vec<EventRecord>, AppError> {
        let text = match self {
            ScheduleSource::Url(url) => {
                let client = create_http_client_with_timeout(http_timeout_seconds)?;
                fetch_text(&client, url).await?
            }
            ScheduleSource::File(path) => {
                info!("Reading CSV from file: {}", path.display());
                tokio::fs::read_to_string(path).await?
            }
        };

        parse_events(&text, &self.to_string())
    }
}

impl fmt::Display for ScheduleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleSource::Url(url) => write!(f, "{url}"),
            ScheduleSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_location() {
        assert_eq!(
            ScheduleSource::from_location("https://docs.example.com/pub?output=csv"),
            ScheduleSource::Url("https://docs.example.com/pub?output=csv".to_string())
        );
        assert_eq!(
            ScheduleSource::from_location(" ./events.csv "),
            ScheduleSource::File(PathBuf::from("./events.csv"))
        );
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("events.csv");
        tokio::fs::write(&path, "Namn på händelse,Plats\nCup,Umeå\n")
            .await
            .unwrap();

        let source = ScheduleSource::File(path);
        let records = source.load(5).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].place.as_deref(), Some("Umeå"));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let temp_dir = tempdir().unwrap();
        let source = ScheduleSource::File(temp_dir.path().join("missing.csv"));
        let err = source.load(5).await.unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
