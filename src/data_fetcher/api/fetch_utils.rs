//! Single-shot HTTP text fetching with status-specific error handling

use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches the body of `url` as text.
///
/// The request is made exactly once. A failure is terminal for the run and is
/// returned to the caller; there is no retry and no backoff.
///
/// # Errors
/// * `AppError::NetworkTimeout` / `AppError::NetworkConnection` - transport failures
/// * `AppError::SourceNotFound` - HTTP 404
/// * `AppError::HttpStatus` - any other non-success status
/// * `AppError::EmptySource` - a successful response with an empty body
#[instrument(skip(client))]
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::Fetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::source_not_found(url),
            _ => AppError::http_status(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::Fetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(256).collect();
    debug!("Response text (first 256 chars): {preview}");

    if response_text.trim().is_empty() {
        return Err(AppError::empty_source(url));
    }

    Ok(response_text)
}
