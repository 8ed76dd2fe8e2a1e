//! Paragraph, line and word elements.

use super::Rect;
use serde::{Deserialize, Serialize};

/// A paragraph: an ordered list of lines.
///
/// Built paragraphs always hold at least one line, possibly empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// Element id (`par_<page>_<n>`)
    pub id: String,

    /// Bounding rectangle, aggregated from the lines once closed
    pub bbox: Option<Rect>,

    /// Lines in reading order
    pub lines: Vec<Line>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bbox: None,
            lines: Vec::new(),
        }
    }

    /// Append a finished line.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Finalize the bounding rectangle from the lines.
    ///
    /// When no line has a rectangle (every line is empty), `fallback` is
    /// used; this is the polygon the recognizer reported for the paragraph.
    pub fn close(mut self, fallback: Option<Rect>) -> Self {
        self.bbox = Rect::bounding(self.lines.iter().filter_map(|l| l.bbox)).or(fallback);
        self
    }

    /// Number of words across all lines.
    pub fn word_count(&self) -> usize {
        self.lines.iter().map(|l| l.words.len()).sum()
    }

    /// Lines joined by newlines.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(Line::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A line of words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    /// Element id (`line_<page>_<n>`)
    pub id: String,

    /// Bounding rectangle; `None` for a line without words
    pub bbox: Option<Rect>,

    /// Words in reading order
    pub words: Vec<Word>,
}

impl Line {
    /// Open a new empty line.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bbox: None,
            words: Vec::new(),
        }
    }

    /// Append a word.
    pub fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Finalize the bounding rectangle from the words.
    pub fn close(mut self) -> Self {
        self.bbox = Rect::bounding(self.words.iter().map(|w| w.bbox));
        self
    }

    /// Check if the line has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word texts joined by single spaces.
    pub fn plain_text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A recognized word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Element id (`word_<page>_<n>`)
    pub id: String,

    /// Bounding rectangle from the recognizer polygon
    pub bbox: Rect,

    /// Unescaped word text
    pub text: String,
}

impl Word {
    /// Create a word.
    pub fn new(id: impl Into<String>, bbox: Rect, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bbox,
            text: text.into(),
        }
    }
}
