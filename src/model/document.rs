//! Document-level types.

use super::{ElementKind, Page};
use serde::{Deserialize, Serialize};

/// Language tag used when no hint is known.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// One page of OCR output: the tree root plus page metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (language, title)
    pub metadata: Metadata,

    /// The page tree
    pub page: Page,
}

impl Document {
    /// Create a document around a page.
    pub fn new(page: Page) -> Self {
        Self {
            metadata: Metadata::default(),
            page,
        }
    }

    /// Create a document holding a single empty page.
    pub fn empty(page_number: u32, width: u32, height: u32) -> Self {
        Self::new(Page::new(page_number, width, height))
    }

    /// Set the language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.metadata.language = language.into();
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = title.into();
        self
    }

    /// Page number of the document's page.
    pub fn page_number(&self) -> u32 {
        self.page.number
    }

    /// Plain text assembled from the tree.
    ///
    /// This is not the transcript; the transcript comes verbatim from the
    /// recognizer.
    pub fn plain_text(&self) -> String {
        self.page.plain_text()
    }

    /// Element counts of the tree.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        for block in &self.page.blocks {
            stats.blocks += 1;
            for para in &block.paragraphs {
                stats.paragraphs += 1;
                for line in &para.lines {
                    stats.lines += 1;
                    if line.is_empty() {
                        stats.empty_lines += 1;
                    }
                    stats.words += line.words.len();
                }
            }
        }
        stats
    }

    /// Every element id with its kind, in document (emission) order.
    pub fn element_ids(&self) -> Vec<(ElementKind, &str)> {
        let mut ids = vec![(ElementKind::Page, self.page.id.as_str())];
        for block in &self.page.blocks {
            ids.push((ElementKind::Block, block.id.as_str()));
            for para in &block.paragraphs {
                ids.push((ElementKind::Paragraph, para.id.as_str()));
                for line in &para.lines {
                    ids.push((ElementKind::Line, line.id.as_str()));
                    for word in &line.words {
                        ids.push((ElementKind::Word, word.id.as_str()));
                    }
                }
            }
        }
        ids
    }
}

/// Page metadata carried into the markup header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Language tag (`unknown` when no hint was supplied)
    pub language: String,

    /// Document title
    pub title: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            language: UNKNOWN_LANGUAGE.to_string(),
            title: String::new(),
        }
    }
}

/// Element counts of a page tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    pub blocks: usize,
    pub paragraphs: usize,
    pub lines: usize,
    /// Lines without words (rendered without a bbox)
    pub empty_lines: usize,
    pub words: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Line, Paragraph, Rect, Word};

    fn sample() -> Document {
        let mut line = Line::new("line_1_1");
        line.push(Word::new("word_1_1", Rect::new(0, 0, 5, 5), "a"));
        line.push(Word::new("word_1_2", Rect::new(6, 0, 9, 5), "b"));
        let mut para = Paragraph::new("par_1_1");
        para.add_line(line.close());
        para.add_line(Line::new("line_1_2").close());
        let mut block = Block::new("block_1_1");
        block.add_paragraph(para.close(None));
        let mut page = Page::new(1, 10, 10);
        page.add_block(block.close(None));
        Document::new(page)
    }

    #[test]
    fn test_document_defaults() {
        let doc = Document::empty(4, 10, 20);
        assert_eq!(doc.metadata.language, "unknown");
        assert_eq!(doc.metadata.title, "");
        assert_eq!(doc.page_number(), 4);
        assert_eq!(doc.stats(), TreeStats::default());
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.blocks, 1);
        assert_eq!(stats.paragraphs, 1);
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.empty_lines, 1);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn test_element_ids_in_order() {
        let doc = sample();
        let ids: Vec<&str> = doc.element_ids().into_iter().map(|(_, id)| id).collect();
        assert_eq!(
            ids,
            ["page_1", "block_1_1", "par_1_1", "line_1_1", "word_1_1", "word_1_2", "line_1_2"]
        );
    }
}
