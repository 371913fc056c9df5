// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_command};
use club_schedule::config::Config;
use club_schedule::error::AppError;
use commands::{handle_config_update_command, handle_list_config_command, handle_view_command};
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // An unreadable config must not block fixing it through the config flags
    let config = if is_config_command(&args) {
        Config::load().await.ok()
    } else {
        Some(Config::load().await?)
    };

    let (log_file_path, _guard) = setup_logging(&args, config.as_ref()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_command(&args) {
        return handle_config_update_command(&args).await;
    }

    let config = config.unwrap_or_default();
    if let Err(e) = handle_view_command(&args, &config).await {
        tracing::error!("Run failed: {e}");
        return Err(e);
    }

    Ok(())
}
