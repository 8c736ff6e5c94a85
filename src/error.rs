use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Load errors (fatal, halt startup)
// ---------------------------------------------------------------------------

/// Errors raised while reading the dataset file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row could not be read.
    #[error("failed to parse CSV header in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path} has no columns; expected a leading row-index column")]
    MissingIndexColumn { path: PathBuf },

    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A data row could not be decoded into a typed record.
    #[error("malformed row {row} in {path}: {source}")]
    Malformed {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("{path} contains a header but no data rows")]
    NoRecords { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Empty filter result (recoverable, user-visible)
// ---------------------------------------------------------------------------

/// The current filter criteria matched zero records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No data available based on the current filter settings!")]
pub struct EmptyResult;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_display() {
        let err = LoadError::MissingColumn {
            column: "Gender".to_string(),
            path: PathBuf::from("health.csv"),
        };
        assert_eq!(
            err.to_string(),
            "required column 'Gender' not found in health.csv"
        );
    }

    #[test]
    fn empty_result_display() {
        assert_eq!(
            EmptyResult.to_string(),
            "No data available based on the current filter settings!"
        );
    }
}
