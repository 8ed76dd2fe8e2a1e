//! Per-page OCR processing: recognize, build, render, write.
//!
//! [`PageOcr`] is the entry point. It borrows a [`Recognizer`] owned by the
//! caller, turns its response into hOCR markup and a transcript, and falls
//! back to an empty page of the image's size when recognition fails or the
//! page is skipped.
//!
//! # Example
//!
//! ```no_run
//! use vision_hocr::convert::{JsonResponseRecognizer, PageOcr, PageRequest};
//!
//! fn main() -> vision_hocr::Result<()> {
//!     let recognizer = JsonResponseRecognizer::new();
//!     let ocr = PageOcr::new(&recognizer);
//!
//!     let request = PageRequest::new("scan/page-0001.png", 1).with_languages(["eng"]);
//!     let output = ocr.process_page(&request)?;
//!     println!("{}: {}", output.page_number, output.outcome);
//!     Ok(())
//! }
//! ```

mod fallback;
mod recognizer;

pub use fallback::{fallback_document, generate_fallback, SKIPPED_PAGE_TRANSCRIPT};
pub use recognizer::{JsonResponseRecognizer, RecognitionRequest, Recognizer};

use crate::error::{Error, Result};
use crate::model::{Document, TreeStats, UNKNOWN_LANGUAGE};
use crate::parser::{normalize_languages, RecognizedPage, TreeBuilder};
use crate::render::{HocrOptions, HocrRenderer};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One page to process.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Input page image
    pub image: PathBuf,

    /// 1-based page number
    pub page_number: u32,

    /// Caller language hints, normalized before use
    pub languages: Vec<String>,

    /// Time budget handed to the recognizer
    pub timeout: Option<Duration>,

    /// Where the hOCR markup is written
    pub output_hocr: PathBuf,

    /// Where the transcript is written
    pub output_text: PathBuf,

    /// Produce fallback output without recognition
    pub skip: bool,
}

impl PageRequest {
    /// Create a request writing `<image>.hocr` and `<image>.txt` next to the
    /// image.
    pub fn new(image: impl Into<PathBuf>, page_number: u32) -> Self {
        let image = image.into();
        Self {
            output_hocr: image.with_extension("hocr"),
            output_text: image.with_extension("txt"),
            image,
            page_number,
            languages: Vec::new(),
            timeout: None,
            skip: false,
        }
    }

    /// Set language hints.
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Set the recognition time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set both output paths.
    pub fn with_outputs(mut self, hocr: impl Into<PathBuf>, text: impl Into<PathBuf>) -> Self {
        self.output_hocr = hocr.into();
        self.output_text = text.into();
        self
    }

    /// Write both outputs into `dir`, named after the image.
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let stem = self.image.file_stem().unwrap_or(self.image.as_os_str());
        let mut hocr = stem.to_os_string();
        hocr.push(".hocr");
        let mut text = stem.to_os_string();
        text.push(".txt");
        self.output_hocr = dir.join(hocr);
        self.output_text = dir.join(text);
        self
    }

    /// Mark the page as skipped.
    pub fn skipped(mut self) -> Self {
        self.skip = true;
        self
    }
}

/// How a page's output was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// From a recognition response
    Recognized,

    /// Recognition failed; fallback output was produced
    Fallback {
        /// The recoverable failure
        reason: String,
    },

    /// The page was skipped on request
    Skipped,
}

impl PageOutcome {
    /// Whether the output is the empty fallback page.
    pub fn is_fallback(&self) -> bool {
        !matches!(self, PageOutcome::Recognized)
    }
}

impl std::fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageOutcome::Recognized => write!(f, "recognized"),
            PageOutcome::Fallback { reason } => write!(f, "fallback ({})", reason),
            PageOutcome::Skipped => write!(f, "skipped"),
        }
    }
}

/// Rendered output of one page.
#[derive(Debug, Clone)]
pub struct PageOutput {
    /// 1-based page number
    pub page_number: u32,

    /// hOCR markup
    pub hocr: String,

    /// Plain-text transcript
    pub transcript: String,

    /// How the output was produced
    pub outcome: PageOutcome,

    /// Element counts of the rendered tree
    pub stats: TreeStats,
}

/// Per-page OCR processor.
///
/// Holds no per-page state: one instance can process any number of pages,
/// concurrently through [`PageOcr::process_pages`].
#[derive(Clone)]
pub struct PageOcr<'r> {
    recognizer: &'r dyn Recognizer,
    options: HocrOptions,
}

impl<'r> PageOcr<'r> {
    /// Create a processor using `recognizer` and default render options.
    pub fn new(recognizer: &'r dyn Recognizer) -> Self {
        Self {
            recognizer,
            options: HocrOptions::default(),
        }
    }

    /// Set render options.
    pub fn with_options(mut self, options: HocrOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the render options.
    pub fn options(&self) -> &HocrOptions {
        &self.options
    }

    /// Produce the markup and transcript of a page without writing them.
    ///
    /// Recoverable recognition failures yield fallback output; image access,
    /// invalid arguments and other errors are returned.
    pub fn render_page(&self, request: &PageRequest) -> Result<PageOutput> {
        validate(request)?;
        let hints = normalize_languages(&request.languages);
        let language = hints
            .first()
            .map(String::as_str)
            .unwrap_or(UNKNOWN_LANGUAGE);

        if request.skip {
            log::debug!("Skipping recognition of page {}", request.page_number);
            return self.fallback(request, language, PageOutcome::Skipped);
        }

        match self.recognize(request, &hints, language) {
            Ok(page) => Ok(self.output(
                request,
                &page.document,
                page.transcript,
                PageOutcome::Recognized,
            )),
            Err(e) if e.is_recoverable() => {
                match &e {
                    Error::Timeout(budget) => log::warn!(
                        "Recognition of page {} took too long (budget {:?}), using empty page",
                        request.page_number,
                        budget
                    ),
                    _ => log::warn!(
                        "Failed to produce OCR results for page {} ({}). Ignore if the page is empty",
                        request.page_number,
                        e
                    ),
                }
                self.fallback(
                    request,
                    language,
                    PageOutcome::Fallback {
                        reason: e.to_string(),
                    },
                )
            }
            Err(e) => Err(e),
        }
    }

    /// Process a page and write its markup and transcript.
    pub fn process_page(&self, request: &PageRequest) -> Result<PageOutput> {
        let output = self.render_page(request)?;
        write_outputs(request, &output)?;
        Ok(output)
    }

    /// Write fallback output for a page without calling the recognizer.
    pub fn skip_page(&self, request: &PageRequest) -> Result<PageOutput> {
        if request.skip {
            return self.process_page(request);
        }
        self.process_page(&request.clone().skipped())
    }

    /// Process pages in parallel. Results are in request order.
    pub fn process_pages(&self, requests: &[PageRequest]) -> Vec<Result<PageOutput>> {
        self.process_pages_with(requests, |_| {})
    }

    /// Process pages in parallel, calling `on_done` as each page finishes.
    pub fn process_pages_with<F>(
        &self,
        requests: &[PageRequest],
        on_done: F,
    ) -> Vec<Result<PageOutput>>
    where
        F: Fn(&Result<PageOutput>) + Sync,
    {
        requests
            .par_iter()
            .map(|request| {
                let result = self.process_page(request);
                on_done(&result);
                result
            })
            .collect()
    }

    fn recognize(
        &self,
        request: &PageRequest,
        hints: &[String],
        language: &str,
    ) -> Result<RecognizedPage> {
        log::debug!(
            "Recognizing page {} with {} (hints: {:?})",
            request.page_number,
            self.recognizer.name(),
            hints
        );
        let response = self
            .recognizer
            .recognize(&RecognitionRequest {
                image: &request.image,
                page_number: request.page_number,
                language_hints: hints,
                timeout: request.timeout,
            })?
            .into_checked()?;

        TreeBuilder::new(request.page_number)
            .with_language(language)
            .with_title(fallback::image_title(&request.image))
            .build(&response)
    }

    fn fallback(
        &self,
        request: &PageRequest,
        language: &str,
        outcome: PageOutcome,
    ) -> Result<PageOutput> {
        let document =
            fallback::fallback_for_image(&request.image, request.page_number, language)?;
        Ok(self.output(
            request,
            &document,
            SKIPPED_PAGE_TRANSCRIPT.to_string(),
            outcome,
        ))
    }

    fn output(
        &self,
        request: &PageRequest,
        document: &Document,
        transcript: String,
        outcome: PageOutcome,
    ) -> PageOutput {
        PageOutput {
            page_number: request.page_number,
            hocr: HocrRenderer::new(self.options.clone()).render(document),
            transcript,
            outcome,
            stats: document.stats(),
        }
    }
}

impl std::fmt::Debug for PageOcr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageOcr")
            .field("recognizer", &self.recognizer.name())
            .field("options", &self.options)
            .finish()
    }
}

fn validate(request: &PageRequest) -> Result<()> {
    if request.page_number == 0 {
        return Err(Error::InvalidArgument("page numbers start at 1".to_string()));
    }
    if request.output_hocr == request.output_text {
        return Err(Error::InvalidArgument(format!(
            "markup and transcript would both be written to {}",
            request.output_hocr.display()
        )));
    }
    Ok(())
}

fn write_outputs(request: &PageRequest, output: &PageOutput) -> Result<()> {
    for path in [&request.output_hocr, &request.output_text] {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
    }

    // The markup only takes its final name once the transcript is on disk,
    // so a failed page never leaves a lone .hocr behind.
    let staged = staging_path(&request.output_hocr);
    fs::write(&staged, &output.hocr)?;
    let result = fs::write(&request.output_text, &output.transcript)
        .and_then(|()| fs::rename(&staged, &request.output_hocr));
    if let Err(e) = result {
        let _ = fs::remove_file(&staged);
        return Err(e.into());
    }
    Ok(())
}

/// `page-0001.hocr` is staged as `page-0001.hocr.part`.
fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_owned();
    staged.push(".part");
    PathBuf::from(staged)
}
