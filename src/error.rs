use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type used across loading, filtering and the interactive shell.
pub type BikeshareResult<T> = Result<T, BikeshareError>;

/// Error type returned by the library.
///
/// Loader failures (I/O, CSV, schema) are fatal for a report; filter and config errors
/// describe values that do not match the configured menus.
#[derive(Debug, Error)]
pub enum BikeshareError {
    /// Underlying I/O error without a known path (e.g. console read/write).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A source file could not be opened.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV syntax error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration file could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The source file does not carry the required trip columns.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A numeric cell could not be parsed.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// The requested city is not part of the configured city set.
    #[error("unknown city '{0}'")]
    UnknownCity(String),

    /// The requested month is neither "all" nor a configured month name.
    #[error("unknown month '{0}'")]
    UnknownMonth(String),

    /// The requested day is neither "all" nor a configured day name.
    #[error("unknown day '{0}'")]
    UnknownDay(String),

    /// The configuration is structurally invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Standard input was closed while a prompt was waiting for an answer.
    #[error("input closed while waiting for {0}")]
    InputClosed(&'static str),
}
