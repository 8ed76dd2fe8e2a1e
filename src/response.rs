//! Recognition response types.
//!
//! These mirror the JSON a document text recognizer returns
//! (`AnnotateImageResponse` with a `fullTextAnnotation`): pages hold blocks,
//! blocks hold paragraphs, paragraphs hold words and words hold symbols.
//! Every geometric node carries a bounding polygon and symbols carry the
//! break detected after them.

use crate::error::{Error, Result};
use crate::model::{Rect, Vertex};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete response for one image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionResponse {
    /// Structured text result; absent when nothing was detected
    #[serde(default)]
    pub full_text_annotation: Option<TextAnnotation>,

    /// Error reported by the service for this image
    #[serde(default)]
    pub error: Option<Status>,
}

impl RecognitionResponse {
    /// Parse a response from JSON text.
    ///
    /// Parse failures are reported as [`Error::MalformedResponse`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::MalformedResponse(e.to_string()))
    }

    /// Load a saved response file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Turn an error status embedded in the response into an error.
    pub fn into_checked(self) -> Result<Self> {
        match self.error {
            Some(ref status) if !status.is_ok() => Err(Error::Recognition(status.to_string())),
            _ => Ok(self),
        }
    }

    /// The page transcript, empty when nothing was detected.
    pub fn text(&self) -> &str {
        self.full_text_annotation
            .as_ref()
            .map(|a| a.text.as_str())
            .unwrap_or("")
    }

    /// Pages of the structured result.
    pub fn pages(&self) -> &[Page] {
        self.full_text_annotation
            .as_ref()
            .map(|a| a.pages.as_slice())
            .unwrap_or(&[])
    }
}

/// Service status attached to a failed response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub code: i32,

    #[serde(default)]
    pub message: String,
}

impl Status {
    /// Status code 0 means success.
    pub fn is_ok(&self) -> bool {
        self.code == 0 && self.message.is_empty()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

/// Structured text of an image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextAnnotation {
    #[serde(default)]
    pub pages: Vec<Page>,

    /// Full recognized text
    #[serde(default)]
    pub text: String,
}

/// A recognized page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// Page width in pixels
    #[serde(default)]
    pub width: u32,

    /// Page height in pixels
    #[serde(default)]
    pub height: u32,

    #[serde(default)]
    pub blocks: Vec<Block>,

    #[serde(default)]
    pub property: Option<TextProperty>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(default)]
    pub bounding_box: Option<BoundingPoly>,

    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    #[serde(default)]
    pub property: Option<TextProperty>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    #[serde(default)]
    pub bounding_box: Option<BoundingPoly>,

    #[serde(default)]
    pub words: Vec<Word>,

    #[serde(default)]
    pub property: Option<TextProperty>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    #[serde(default)]
    pub bounding_box: Option<BoundingPoly>,

    #[serde(default)]
    pub symbols: Vec<Symbol>,

    #[serde(default)]
    pub property: Option<TextProperty>,
}

/// A single recognized character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    #[serde(default)]
    pub bounding_box: Option<BoundingPoly>,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub property: Option<TextProperty>,
}

impl Symbol {
    /// The break detected after this symbol, [`BreakKind::Unknown`] if none.
    pub fn break_kind(&self) -> BreakKind {
        self.property
            .as_ref()
            .and_then(|p| p.detected_break.as_ref())
            .map(|b| b.kind)
            .unwrap_or_default()
    }
}

/// Polygon around a recognized element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoundingPoly {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

impl BoundingPoly {
    /// Rectangle approximation, `None` for a degenerate polygon.
    pub fn to_rect(&self) -> Option<Rect> {
        Rect::from_polygon(&self.vertices)
    }
}

/// Extra information attached to a recognized element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProperty {
    #[serde(default)]
    pub detected_languages: Vec<DetectedLanguage>,

    #[serde(default)]
    pub detected_break: Option<DetectedBreak>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedLanguage {
    #[serde(default)]
    pub language_code: String,

    #[serde(default)]
    pub confidence: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedBreak {
    #[serde(rename = "type", default)]
    pub kind: BreakKind,

    /// Whether the break precedes the symbol rather than following it
    #[serde(default)]
    pub is_prefix: bool,
}

/// Break classification of a symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreakKind {
    /// No break detected
    #[default]
    Unknown,
    /// Regular space
    Space,
    /// Sure space (very wide)
    SureSpace,
    /// Line-wrapping break
    EolSureSpace,
    /// End-of-line hyphen not present in the text
    Hyphen,
    /// Line break ending a paragraph
    LineBreak,
}
