pub mod fetch_utils;
pub mod http_client;

// Re-export HTTP client utilities
pub use fetch_utils::fetch_text;
pub use http_client::create_http_client_with_timeout;
