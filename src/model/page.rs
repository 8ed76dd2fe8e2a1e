//! Page-level types.

use super::{ids, Paragraph, Rect};
use serde::{Deserialize, Serialize};

/// The root element of a page tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Element id (`page_<number>`)
    pub id: String,

    /// Page width in pixels
    pub width: u32,

    /// Page height in pixels
    pub height: u32,

    /// Text blocks in reading order
    pub blocks: Vec<Block>,
}

impl Page {
    /// Create a new empty page with the given pixel dimensions.
    pub fn new(number: u32, width: u32, height: u32) -> Self {
        Self {
            number,
            id: ids::page_id(number),
            width,
            height,
            blocks: Vec::new(),
        }
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// The page rectangle, `0 0 width height`.
    pub fn bbox(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Bounding rectangle of the recognized content, if any.
    pub fn content_bbox(&self) -> Option<Rect> {
        Rect::bounding(self.blocks.iter().filter_map(|b| b.bbox))
    }

    /// Check if the page has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks on the page.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Get page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Text of the tree: words spaced, lines on their own row, blocks and
    /// paragraphs separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .flat_map(|b| b.paragraphs.iter())
            .map(Paragraph::plain_text)
            .filter(|t| !t.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// A text block (hOCR content area).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Element id (`block_<page>_<n>`)
    pub id: String,

    /// Bounding rectangle, aggregated from the paragraphs once closed
    pub bbox: Option<Rect>,

    /// Paragraphs in reading order
    pub paragraphs: Vec<Paragraph>,
}

impl Block {
    /// Create a new empty block.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bbox: None,
            paragraphs: Vec::new(),
        }
    }

    /// Add a paragraph to the block.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Finalize the bounding rectangle from the paragraphs, falling back to
    /// the recognizer polygon when no paragraph has one. The box stays `None`
    /// only when neither exists.
    pub fn close(mut self, fallback: Option<Rect>) -> Self {
        self.bbox = Rect::bounding(self.paragraphs.iter().filter_map(|p| p.bbox)).or(fallback);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Line, Word};

    #[test]
    fn test_page_new() {
        let page = Page::new(2, 1000, 1400);
        assert_eq!(page.id, "page_2");
        assert_eq!(page.bbox(), Rect::new(0, 0, 1000, 1400));
        assert_eq!(page.dimensions(), (1000, 1400));
        assert!(page.is_empty());
        assert_eq!(page.content_bbox(), None);
    }

    #[test]
    fn test_block_close_and_plain_text() {
        let mut line = Line::new("line_1_1");
        line.push(Word::new("word_1_1", Rect::new(5, 5, 20, 15), "Hi"));
        let mut para = Paragraph::new("par_1_1");
        para.add_line(line.close());
        let mut block = Block::new("block_1_1");
        block.add_paragraph(para.close(None));
        let block = block.close(None);

        assert_eq!(block.bbox, Some(Rect::new(5, 5, 20, 15)));
        assert_eq!(block.paragraphs[0].lines.len(), 1);

        let mut page = Page::new(1, 100, 100);
        page.add_block(block);
        assert_eq!(page.plain_text(), "Hi");
        assert_eq!(page.content_bbox(), Some(Rect::new(5, 5, 20, 15)));
    }
}
