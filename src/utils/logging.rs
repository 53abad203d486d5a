//! Tracing setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Initialize tracing into the configured log file.
///
/// The terminal belongs to the UI, so nothing is logged unless a log file is
/// given. `RUST_LOG` overrides the level chosen by `--verbose`.
pub fn init_tracing(config: &Config) {
    let Some(path) = config.log_file.as_ref() else {
        return;
    };

    let file = match std::fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: failed to open log file {}: {}", path.display(), e);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("task_timer={}", config.log_level())));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
