use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Errors that end the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to initialize logging: {0}")]
    Logger(#[from] SetLoggerError),
}
