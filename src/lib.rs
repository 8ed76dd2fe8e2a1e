//! # vision-hocr
//!
//! Turns hierarchical OCR results from Google Cloud Vision into hOCR markup
//! and a plain-text transcript, one page at a time.
//!
//! This library builds a page tree (blocks, paragraphs, lines, words) from a
//! recognition response, splits lines on end-of-line breaks, aggregates
//! bounding boxes bottom-up and renders the tree as hOCR.
//!
//! ## Quick Start
//!
//! ```no_run
//! use vision_hocr::hocr_from_json;
//!
//! fn main() -> vision_hocr::Result<()> {
//!     let json = std::fs::read_to_string("page-0001.json")?;
//!     let (hocr, transcript) = hocr_from_json(&json, 1)?;
//!     std::fs::write("page-0001.hocr", hocr)?;
//!     std::fs::write("page-0001.txt", transcript)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **hOCR output**: `ocr_page`, `ocr_carea`, `ocr_par`, `ocr_line` and
//!   `ocrx_word` elements with per-page unique ids and bounding boxes
//! - **Fallback pages**: empty pages sized to the input image when
//!   recognition fails or is skipped
//! - **Language hints**: BCP 47, ISO 639-2 and Tesseract names normalized
//! - **Parallel processing**: Uses Rayon for independent pages

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod response;

// Re-export commonly used types
pub use convert::{
    JsonResponseRecognizer, PageOcr, PageOutcome, PageOutput, PageRequest, RecognitionRequest,
    Recognizer, SKIPPED_PAGE_TRANSCRIPT,
};
pub use detect::{detect_format_from_bytes, detect_format_from_path, image_dimensions, is_image};
pub use error::{Error, Result};
pub use model::{Block, Document, ElementKind, Line, Metadata, Page, Paragraph, Rect, Word};
pub use parser::{normalize_languages, TreeBuilder};
pub use render::{HocrOptions, JsonFormat};
pub use response::RecognitionResponse;

/// Build and render a recognition response as page `page_number`.
///
/// Returns the hOCR markup and the transcript. Unlike [`PageOcr`], this does
/// not fall back: an error status in the response or a malformed response is
/// returned as an error.
///
/// # Example
///
/// ```
/// use vision_hocr::{hocr_from_response, RecognitionResponse};
///
/// let response = RecognitionResponse::from_json(
///     r#"{"fullTextAnnotation": {"pages": [{"width": 80, "height": 60}], "text": ""}}"#,
/// )?;
/// let (hocr, transcript) = hocr_from_response(&response, 1)?;
/// assert!(hocr.contains("title='bbox 0 0 80 60'"));
/// assert!(transcript.is_empty());
/// # Ok::<(), vision_hocr::Error>(())
/// ```
pub fn hocr_from_response(
    response: &RecognitionResponse,
    page_number: u32,
) -> Result<(String, String)> {
    if let Some(status) = response.error.as_ref().filter(|s| !s.is_ok()) {
        return Err(Error::Recognition(status.to_string()));
    }
    let page = parser::build_tree(response, page_number)?;
    let hocr = render::to_hocr(&page.document, &HocrOptions::default());
    Ok((hocr, page.transcript))
}

/// Parse a JSON recognition response and render it as page `page_number`.
pub fn hocr_from_json(json: &str, page_number: u32) -> Result<(String, String)> {
    let response = RecognitionResponse::from_json(json)?;
    hocr_from_response(&response, page_number)
}

/// Parse a JSON recognition response into a page tree.
pub fn parse_response(json: &str, page_number: u32) -> Result<Document> {
    let response = RecognitionResponse::from_json(json)?.into_checked()?;
    Ok(parser::build_tree(&response, page_number)?.document)
}

/// Dump the page tree of a JSON recognition response as JSON.
///
/// # Example
///
/// ```no_run
/// use vision_hocr::{to_json, JsonFormat};
///
/// let response = std::fs::read_to_string("page-0001.json").unwrap();
/// let tree = to_json(&response, 1, JsonFormat::Pretty).unwrap();
/// println!("{}", tree);
/// ```
pub fn to_json(json: &str, page_number: u32, format: JsonFormat) -> Result<String> {
    let doc = parse_response(json, page_number)?;
    render::to_json(&doc, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = r#"{
        "fullTextAnnotation": {
            "pages": [{
                "width": 200, "height": 100,
                "blocks": [{"paragraphs": [{"words": [{
                    "boundingBox": {"vertices": [
                        {"x": 5, "y": 5}, {"x": 45, "y": 5}, {"x": 45, "y": 20}, {"x": 5, "y": 20}
                    ]},
                    "symbols": [{"text": "H"}, {"text": "i"}]
                }]}]}]
            }],
            "text": "Hi\n"
        }
    }"#;

    #[test]
    fn test_hocr_from_json() {
        let (hocr, transcript) = hocr_from_json(HELLO, 1).unwrap();
        assert!(hocr.contains("<span class='ocrx_word' id='word_1_1' title='bbox 5 5 45 20'>Hi</span>"));
        assert_eq!(transcript, "Hi\n");
    }

    #[test]
    fn test_error_status_is_recognition_error() {
        let json = r#"{"error": {"code": 8, "message": "Quota exceeded"}}"#;
        let result = hocr_from_json(json, 1);
        assert!(matches!(result, Err(Error::Recognition(ref m)) if m.contains("Quota exceeded")));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            hocr_from_json("{", 1),
            Err(Error::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_response("42", 1),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_response() {
        let doc = parse_response(HELLO, 5).unwrap();
        assert_eq!(doc.page.id, "page_5");
        assert_eq!(doc.plain_text(), "Hi");
    }

    #[test]
    fn test_to_json() {
        let json = to_json(HELLO, 1, JsonFormat::Compact).unwrap();
        assert!(json.contains("\"word_1_1\""));
        assert!(!json.contains('\n'));
    }
}
