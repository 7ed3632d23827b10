//! Tracing subscriber setup used by the proxy.

use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use tracing_appender::{
    non_blocking,
    non_blocking::NonBlocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{fmt, time::ChronoLocal, writer::MakeWriterExt},
};

use crate::error::AppError;

const DEFAULT_FILTER: &str = "info";
const LOG_FILE_PREFIX: &str = "rank-proxy.log";

/// Guard to ensure buffered logs are flushed on shutdown.
static LOG_GUARD: OnceLock<non_blocking::WorkerGuard> = OnceLock::new();

/// Logging settings, read together with the rest of [`crate::config::Config`]
/// so values coming from `.env` apply here too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// `RUST_LOG` directive, `info` when unset or invalid.
    pub filter: Option<String>,
    /// `LOG_DIR`: also write daily rolling files there.
    pub dir: Option<PathBuf>,
    /// `LOG_MAX_FILES`: rolling files kept in `dir`.
    pub max_files: Option<usize>,
}

impl LogConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            filter: lookup("RUST_LOG").filter(|v| !v.trim().is_empty()),
            dir: lookup("LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            max_files: lookup("LOG_MAX_FILES").and_then(|v| v.parse().ok()),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        self.filter
            .as_deref()
            .and_then(|directive| EnvFilter::try_new(directive).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    }
}

pub fn init(config: &LogConfig) -> Result<(), AppError> {
    let builder = fmt()
        .with_env_filter(config.env_filter())
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_ansi(true)
        .with_level(true);

    let installed = match &config.dir {
        Some(dir) => {
            let stdout = std::io::stdout.with_max_level(tracing::Level::INFO);
            let writer = stdout.and(file_writer(dir, config.max_files)?);

            builder.with_writer(writer).try_init()
        }
        None => builder.try_init(),
    };
    installed.map_err(|e| AppError::Logging(e.to_string()))?;

    match &config.dir {
        Some(dir) => tracing::info!("logger initialized, files in {}", dir.display()),
        None => tracing::info!("logger initialized"),
    }
    Ok(())
}

fn file_writer(dir: &Path, max_files: Option<usize>) -> Result<NonBlocking, AppError> {
    let mut file_builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX);

    if let Some(n) = max_files {
        file_builder = file_builder.max_log_files(n);
    }

    let file_appender = file_builder.build(dir).map_err(|e| {
        AppError::Logging(format!(
            "failed to create log file in {}: {}",
            dir.display(),
            e
        ))
    })?;

    let (file_writer, guard) = non_blocking(file_appender);
    let _ = LOG_GUARD.set(guard);

    Ok(file_writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_are_read_from_lookup() {
        let config = LogConfig::from_lookup(|key| match key {
            "RUST_LOG" => Some("rank_proxy=debug".into()),
            "LOG_DIR" => Some("/var/log/rank-proxy".into()),
            "LOG_MAX_FILES" => Some("7".into()),
            _ => None,
        });

        assert_eq!(
            config,
            LogConfig {
                filter: Some("rank_proxy=debug".into()),
                dir: Some(PathBuf::from("/var/log/rank-proxy")),
                max_files: Some(7),
            }
        );
    }

    #[test]
    fn blank_or_invalid_values_are_ignored() {
        let config = LogConfig::from_lookup(|key| match key {
            "RUST_LOG" => Some(" ".into()),
            "LOG_DIR" => Some("".into()),
            "LOG_MAX_FILES" => Some("many".into()),
            _ => None,
        });

        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn bad_filter_falls_back_to_info() {
        let config = LogConfig {
            filter: Some("rank_proxy=loud".into()),
            ..LogConfig::default()
        };

        assert_eq!(
            config.env_filter().max_level_hint(),
            Some(tracing::level_filters::LevelFilter::INFO)
        );
    }
}
