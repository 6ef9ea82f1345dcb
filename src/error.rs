use std::io;

use thiserror::Error;

/// Everything that can go wrong while converting a single file.
///
/// The driver wraps these in `anyhow` context naming the offending file;
/// the variants keep the underlying cause inspectable (e.g. an `Io` with
/// kind `NotFound` vs `PermissionDenied`).
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed CSV table: {0}")]
    Parse(#[from] csv::Error),

    #[error("input has no header row")]
    EmptyTable,

    /// A selected cell could not be coerced to a sample value.
    /// Fails the whole file; no sentinel substitution.
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    NonNumeric {
        row: usize,
        column: String,
        value: String,
    },

    #[error("WAV output error: {0}")]
    Wav(#[from] hound::Error),
}
