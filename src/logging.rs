// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Recap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Log file setup.
//!
//! The TUI owns the terminal, so events only go to the file named by `RECAP_LOG_FILE`. Without it
//! no subscriber is installed and `tracing` macros are no-ops.

use std::{
    env,
    error::Error,
    fmt,
    fs::{File, OpenOptions},
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_ENV: &str = "RECAP_LOG_FILE";
pub const LOG_FILTER_ENV: &str = "RECAP_LOG";
pub const DEFAULT_FILTER: &str = "recap=info";

/// Installs the global subscriber when `RECAP_LOG_FILE` is set.
///
/// Returns the log path in use, if any.
pub fn init_from_env() -> Result<Option<PathBuf>, LoggingError> {
    let Some(path) = env::var_os(LOG_FILE_ENV).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    let path = PathBuf::from(path);
    init_to_file(&path)?;
    Ok(Some(path))
}

pub fn init_to_file(path: &Path) -> Result<(), LoggingError> {
    let file = open_log_file(path)?;
    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .map_err(|err| LoggingError::Init(err.to_string()))?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "recap starting");
    Ok(())
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Io { path: path.to_owned(), source })
}

#[derive(Debug)]
pub enum LoggingError {
    Io { path: PathBuf, source: io::Error },
    /// A global subscriber was already installed.
    Init(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to open log file {}: {source}", path.display())
            }
            Self::Init(reason) => write!(f, "failed to install log subscriber: {reason}"),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Init(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{open_log_file, LoggingError};

    #[test]
    fn open_log_file_reports_path_on_failure() {
        let path = std::env::temp_dir().join("recap-no-such-dir").join("nested").join("log.txt");
        let err = open_log_file(&path).unwrap_err();
        assert!(matches!(err, LoggingError::Io { .. }));
        assert!(err.to_string().contains("log.txt"));
    }

    #[test]
    fn open_log_file_appends() {
        let path = std::env::temp_dir().join(format!("recap-log-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);
        open_log_file(&path).expect("first open");
        open_log_file(&path).expect("second open");
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
