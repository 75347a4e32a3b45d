use color_eyre::Result;
use tracing::{Level, debug};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config;

lazy_static::lazy_static! {
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", config::PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

/// `RUST_LOG` first, then `BRACKETS_LOGLEVEL`, then `info`.
fn env_filter() -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(Level::INFO.into());
    builder
        .try_from_env()
        .or_else(|_| builder.with_env_var(LOG_ENV.clone()).from_env())
        .unwrap_or_else(|_| {
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy()
        })
}

/// Sends logs to `brackets.log` in the data directory.
///
/// # Errors
///
/// Will return an error if the log file can't be created or a subscriber is already set.
pub fn init() -> Result<()> {
    let directory = config::get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = std::fs::File::create(&log_path)?;

    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter());

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;

    debug!("Logging to {log_path:?}");
    Ok(())
}
