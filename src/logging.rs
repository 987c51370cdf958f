//! Logging configuration and initialization.
//!
//! Provides file-based logging with rotation and optional stderr output.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Filter used for stderr when `RUST_LOG` is not set
const DEFAULT_STDERR_FILTER: &str = "pkgdoc=info";

/// Guard that must be held for the lifetime of the application.
/// When dropped, flushes any pending log writes.
#[must_use = "Dropping this guard will stop logging - keep it alive for the program's lifetime"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
    _stderr_guard: Option<WorkerGuard>,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize the logging subsystem based on configuration.
///
/// Relative log directories are resolved against `root`. Returns a guard that
/// must be kept alive for the duration of the program.
pub fn init_logging(config: &LoggingConfig, root: &Path) -> Result<LoggingGuard> {
    let mut layers: Vec<BoxedLayer> = Vec::new();
    let mut file_guard = None;
    let mut stderr_guard = None;

    if config.enabled {
        let log_dir = resolve_log_dir(&config.directory, root);
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let file_appender = RollingFileAppender::new(
            parse_rotation(&config.rotation),
            &log_dir,
            &config.file_prefix,
        );
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        file_guard = Some(guard);

        layers.push(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(parse_level(&config.level))
                .boxed(),
        );
    }

    if config.stderr {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_STDERR_FILTER));
        let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
        stderr_guard = Some(guard);

        layers.push(
            fmt::layer()
                .with_writer(writer)
                .with_target(false)
                .with_filter(filter)
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("Failed to initialize logging subscriber")?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
        _stderr_guard: stderr_guard,
    })
}

fn resolve_log_dir(directory: &Path, root: &Path) -> PathBuf {
    if directory.is_absolute() {
        directory.to_path_buf()
    } else {
        root.join(directory)
    }
}

fn parse_level(level: &str) -> EnvFilter {
    let level_lower = level.to_lowercase();
    let level_str = match level_lower.as_str() {
        "trace" => "pkgdoc=trace",
        "debug" => "pkgdoc=debug",
        "info" => "pkgdoc=info",
        "warn" => "pkgdoc=warn",
        "error" => "pkgdoc=error",
        _ => {
            eprintln!(
                "Warning: Unknown log level '{}', defaulting to 'info'",
                level
            );
            "pkgdoc=info"
        }
    };
    EnvFilter::new(level_str)
}

fn parse_rotation(rotation: &str) -> Rotation {
    match rotation.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        "minutely" => Rotation::MINUTELY,
        "never" => Rotation::NEVER,
        _ => {
            eprintln!(
                "Warning: Unknown rotation strategy '{}', defaulting to 'daily'",
                rotation
            );
            Rotation::DAILY
        }
    }
}
