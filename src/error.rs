//! Error types for the resume build pipeline

use thiserror::Error;

/// Result type alias for build operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the resume
///
/// Every failure is fatal to the run: nothing is retried and no partial
/// output is written. The three variants correspond to the three pipeline
/// stages (load, render, export).
#[derive(Error, Debug)]
pub enum Error {
    /// Input file missing, unreadable, or not a valid profile record
    #[error("Failed to parse profile: {0}")]
    Parse(String),

    /// A field could not be interpolated into the document markup
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Browser launch, content load, or output write failed
    #[error("Export failed: {0}")]
    Export(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

#[cfg(feature = "cdp")]
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Export(err.to_string())
    }
}
