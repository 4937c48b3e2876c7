use std::fs::OpenOptions;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::constants;

/// Logging for the TUI. The alternate screen owns the terminal, so output
/// goes to a file instead, enabled via the `PINUP_LOG_FILE` env var. Without
/// it this is a no-op.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var(constants::LOG_FILE_ENV) else {
        return;
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .expect("Failed to open log file");

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(env_filter());

    tracing_subscriber::registry().with(file_layer).init();
}

/// Plain stderr logging for headless use (the CLI).
pub fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
