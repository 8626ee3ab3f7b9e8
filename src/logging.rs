use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file, used when neither the CLI nor
/// the config file sets one.
pub const LOG_ENV_VAR: &str = "VITRINA_LOG";

/// Initialize tracing into `path`.
///
/// Stdout belongs to the TUI, so nothing is logged unless a file is given.
/// The level comes from `RUST_LOG` (default `info`).
pub fn init_tracing(path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to open log file {}: {}", path.display(), err);
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
