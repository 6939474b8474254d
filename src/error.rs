//! Error types for the IBAS API

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV file not found: {}", .0.display())]
    CsvNotFound(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn csv_not_found(path: impl Into<PathBuf>) -> Self {
        Error::CsvNotFound(path.into())
    }
}
