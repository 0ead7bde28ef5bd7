//! Subscriber setup for the gateway process

use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Rotation for the log file. Unknown names keep a single file.
fn rotation(name: &str) -> Rotation {
    match name.to_ascii_lowercase().as_str() {
        "minutely" => Rotation::MINUTELY,
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    }
}

/// Filter used when `RUST_LOG` is unset.
///
/// sqlx logs every statement at info and lettre logs each SMTP exchange;
/// both stay at warn unless `RUST_LOG` asks for more.
fn default_directives(level: &str) -> String {
    format!("{level},sqlx=warn,lettre=warn")
}

/// Install the global subscriber.
///
/// Text mode writes to the rolling file and a colored stdout. JSON mode
/// writes the same JSON lines to both, for log shippers reading either.
/// Keep the returned guard alive until exit or buffered file output is lost.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let appender = RollingFileAppender::new(
        rotation(&config.rotation),
        &config.log_dir,
        &config.log_file,
    );
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_current_span(false)
            .with_writer(file_writer);
        let stdout_layer = fmt::layer().json().with_current_span(false);
        registry.with(file_layer).with(stdout_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(file_writer)
            .with_ansi(false);
        let stdout_layer = fmt::layer().with_target(false);
        registry.with(file_layer).with(stdout_layer).init();
    }

    guard
}
