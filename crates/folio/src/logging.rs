//! File logging.
//!
//! The terminal belongs to the UI, so log output goes to
//! `<data dir>/folio/logs/folio.log` through a non-blocking writer.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{WrapErr, eyre};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log filter.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Keeps the background log writer alive; logs are flushed on drop.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    path: PathBuf,
}

impl LoggingGuard {
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

/// Directory log files are written to.
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "folio").map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Install the global subscriber. `default_filter` applies when
/// [`LOG_ENV`] is unset or invalid.
///
/// Logging is best effort: on failure a warning goes to stderr and the app
/// runs without a log file.
pub fn init(default_filter: &str) -> Option<LoggingGuard> {
    let dir = log_dir()?;
    match init_in(&dir, default_filter) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("folio: file logging disabled: {err:#}");
            None
        }
    }
}

fn init_in(dir: &Path, default_filter: &str) -> color_eyre::Result<LoggingGuard> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("folio.log")
        .build(dir)
        .wrap_err("failed to open log file")?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(true)
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))?;

    Ok(LoggingGuard {
        _guard: guard,
        path: dir.join("folio.log"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unusable_log_dir_is_an_error() {
        let file = std::env::temp_dir().join(format!("folio-log-test-{}", std::process::id()));
        fs::write(&file, "not a directory").unwrap();

        let result = init_in(&file.join("logs"), "info");
        fs::remove_file(&file).unwrap();

        assert!(result.is_err());
    }
}
