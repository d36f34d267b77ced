//! Error types for dataset loading and chart export.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the election dataset. All of them are fatal to startup.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("couldn't read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing the `{0}` column")]
    MissingColumn(&'static str),

    #[error("line {line}: invalid year `{value}`")]
    InvalidYear { line: u64, value: String },

    #[error("line {line}: invalid vote count `{value}`")]
    InvalidVotes { line: u64, value: String },

    #[error("line {line}: unknown party `{value}`")]
    UnknownParty { line: u64, value: String },
}

/// Failures while exporting the current chart.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("couldn't serialize chart: {0}")]
    Json(#[from] serde_json::Error),

    #[error("couldn't write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("couldn't rasterize chart: {0}")]
    Render(String),

    #[error("unable to determine export directory")]
    NoExportDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}
