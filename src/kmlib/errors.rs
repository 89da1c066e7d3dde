use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a clustering run.
///
/// There is no retry policy anywhere: every variant is terminal for the run
/// and surfaces as a message plus a non-zero exit. A malformed record in the
/// middle of the input is deliberately NOT an error; ingestion just stops
/// reading further records.
#[derive(Debug, Error)]
pub enum Error {
    /// The input source could not be opened or read.
    #[error("unable to read points from {path}: {source}")]
    DataUnavailable {
        /// Path that failed to open.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The cluster count supplied on stdin was not an integer.
    #[error("invalid cluster count {input:?}")]
    InvalidClusterCount {
        /// What the user actually typed.
        input: String,
    },

    /// The result sink could not be opened or written.
    #[error("unable to write results to {path}: {source}")]
    OutputUnavailable {
        /// Path that failed to open or write.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
