use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a processing run.
///
/// None of these are recovered from inside the library: a run either produces
/// the whole output table or one of these errors, never partial output.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// A filter line does not look like `<column><operator><literal>`.
    #[error("Invalid filter: '{line}'")]
    InvalidFilter { line: String },

    /// The operator token matched the pattern but is not a supported comparison.
    #[error("Invalid operator '{operator}' in filter for header '{column}'")]
    InvalidOperator { operator: String, column: String },

    /// A selected column is not part of the input header.
    #[error("Header '{column}' not found in CSV headers")]
    UnknownColumn { column: String },

    /// A filter refers to a column that is not part of the input header.
    #[error("Filter header '{column}' not found in CSV headers")]
    UnknownFilterColumn { column: String },

    /// The input has no header row.
    #[error("CSV input is empty")]
    EmptyInput,

    /// A data row does not have one cell per header column.
    #[error("CSV row {row}: expected {expected} cells, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ProcessError>;
