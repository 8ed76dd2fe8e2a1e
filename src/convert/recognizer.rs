//! The seam between page processing and the recognition service.

use crate::error::{Error, Result};
use crate::response::RecognitionResponse;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// What a recognizer is asked to do for one page.
#[derive(Debug, Clone, Copy)]
pub struct RecognitionRequest<'a> {
    /// Page image to recognize
    pub image: &'a Path,

    /// 1-based page number, for diagnostics
    pub page_number: u32,

    /// Normalized language hints; empty means no hint
    pub language_hints: &'a [String],

    /// Time budget for the call, enforced by the recognizer
    pub timeout: Option<Duration>,
}

/// A text recognition backend.
///
/// Implementations are shared by every page processed in parallel, so they
/// must be `Send + Sync`. Service failures should be reported as
/// [`Error::Recognition`] or [`Error::Timeout`] so the caller can fall back.
pub trait Recognizer: Send + Sync {
    /// Get the name of this recognizer.
    fn name(&self) -> &str;

    /// Recognize the text of one page image.
    fn recognize(&self, request: &RecognitionRequest<'_>) -> Result<RecognitionResponse>;
}

/// Recognizer that replays saved recognition responses.
///
/// The response for `scan/page-0001.png` is read from `scan/page-0001.json`,
/// or from `<dir>/page-0001.json` when a response directory is set.
#[derive(Debug, Clone, Default)]
pub struct JsonResponseRecognizer {
    dir: Option<PathBuf>,
}

impl JsonResponseRecognizer {
    /// Read responses stored next to each image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read responses from `dir`.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Path of the saved response for `image`.
    pub fn response_path(&self, image: &Path) -> PathBuf {
        match &self.dir {
            Some(dir) => {
                let mut name = image.file_stem().unwrap_or(image.as_os_str()).to_os_string();
                name.push(".json");
                dir.join(name)
            }
            None => image.with_extension("json"),
        }
    }
}

impl Recognizer for JsonResponseRecognizer {
    fn name(&self) -> &str {
        "json"
    }

    fn recognize(&self, request: &RecognitionRequest<'_>) -> Result<RecognitionResponse> {
        let path = self.response_path(request.image);
        log::debug!(
            "Loading saved response for page {} from {}",
            request.page_number,
            path.display()
        );
        let json = fs::read_to_string(&path).map_err(|e| {
            Error::Recognition(format!("cannot read response {}: {}", path.display(), e))
        })?;
        RecognitionResponse::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_path_next_to_image() {
        let recognizer = JsonResponseRecognizer::new();
        assert_eq!(
            recognizer.response_path(Path::new("scan/page-0001.png")),
            PathBuf::from("scan/page-0001.json")
        );
    }

    #[test]
    fn test_response_path_in_dir() {
        let recognizer = JsonResponseRecognizer::with_dir("responses");
        assert_eq!(
            recognizer.response_path(Path::new("scan/page-0001.png")),
            PathBuf::from("responses/page-0001.json")
        );
    }

    #[test]
    fn test_missing_response_is_recognition_error() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("page.png");
        let recognizer = JsonResponseRecognizer::new();
        let request = RecognitionRequest {
            image: &image,
            page_number: 1,
            language_hints: &[],
            timeout: None,
        };

        let result = recognizer.recognize(&request);
        assert!(matches!(result, Err(Error::Recognition(_))));
        assert!(result.unwrap_err().is_recoverable());
    }

    #[test]
    fn test_garbage_response_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("page.png");
        fs::write(dir.path().join("page.json"), "not json").unwrap();
        let request = RecognitionRequest {
            image: &image,
            page_number: 1,
            language_hints: &[],
            timeout: None,
        };

        let result = JsonResponseRecognizer::new().recognize(&request);
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }
}
