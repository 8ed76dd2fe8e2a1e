//! Element kinds of the hOCR tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five element kinds a page tree is made of, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Page,
    Block,
    Paragraph,
    Line,
    Word,
}

impl ElementKind {
    /// Prefix used in element ids (`par_1_4`).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            ElementKind::Page => "page",
            ElementKind::Block => "block",
            ElementKind::Paragraph => "par",
            ElementKind::Line => "line",
            ElementKind::Word => "word",
        }
    }

    /// hOCR class name of the element.
    pub fn hocr_class(&self) -> &'static str {
        match self {
            ElementKind::Page => "ocr_page",
            ElementKind::Block => "ocr_carea",
            ElementKind::Paragraph => "ocr_par",
            ElementKind::Line => "ocr_line",
            ElementKind::Word => "ocrx_word",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hocr_class())
    }
}
