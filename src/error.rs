//! Error types for vision-hocr library.

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for vision-hocr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning recognition results into hOCR.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The recognition service failed or rejected the request.
    #[error("Recognition service error: {0}")]
    Recognition(String),

    /// The recognition call exceeded its time budget.
    #[error("Recognition timed out after {0:?}")]
    Timeout(Duration),

    /// The recognition response does not have the expected shape.
    #[error("Malformed recognition response: {0}")]
    MalformedResponse(String),

    /// The input image cannot be opened or measured.
    #[error("Cannot access image {}: {reason}", path.display())]
    ImageAccess {
        /// Path of the image
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// The data is not a recognized image format.
    #[error("Unknown file format: not a supported image")]
    UnknownFormat,

    /// Error during rendering (hOCR, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A caller supplied an unusable argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this failure should degrade to the fallback page instead of
    /// aborting page processing.
    ///
    /// Only failures of the recognition step qualify. Everything else,
    /// including [`Error::ImageAccess`], is fatal for the page.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Recognition(_) | Error::Timeout(_) | Error::MalformedResponse(_)
        )
    }
}
