use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Sheet locations cannot be empty
/// - A sheet location is either an http(s) URL or an existing file
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    events_url: &str,
    budget_url: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    validate_sheet_location("events_url", events_url)?;
    validate_sheet_location("budget_url", budget_url)?;

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_sheet_location(field: &str, location: &str) -> Result<(), AppError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(AppError::config_error(format!("{field} cannot be empty")));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        return Ok(());
    }

    if Path::new(location).is_file() {
        Ok(())
    } else {
        Err(AppError::config_error(format!(
            "{field} must be an http(s) URL or an existing CSV file, got '{location}'"
        )))
    }
}
