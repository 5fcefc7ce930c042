//! Error types for flipcards

use thiserror::Error;

/// Errors that can surface while loading a deck
#[derive(Error, Debug)]
pub enum FlipcardsError {
    /// The selected file is neither named `*.csv` nor declared as `text/csv`
    #[error("Unsupported file type: {0} (expected a .csv file)")]
    UnsupportedFileType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    /// The log file could not be opened or the logger was already installed
    #[error("Logger error: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, FlipcardsError>;
