//! Recognition response to page tree.

use crate::error::{Error, Result};
use crate::model::{
    Block, Document, ElementKind, IdAllocator, Page, Paragraph, Rect, Word, UNKNOWN_LANGUAGE,
};
use crate::response::{self, BoundingPoly, BreakKind, RecognitionResponse};

use super::LineSegmenter;

/// A built page tree together with the page transcript.
#[derive(Debug, Clone)]
pub struct RecognizedPage {
    /// The page tree
    pub document: Document,

    /// Full recognized text, verbatim from the response
    pub transcript: String,
}

/// Builds a [`Document`] from a recognition response in a single pass.
///
/// # Example
///
/// ```
/// use vision_hocr::parser::TreeBuilder;
/// use vision_hocr::response::RecognitionResponse;
///
/// let response = RecognitionResponse::from_json(
///     r#"{"fullTextAnnotation": {"pages": [{"width": 100, "height": 50}], "text": ""}}"#,
/// )?;
/// let page = TreeBuilder::new(1).build(&response)?;
/// assert!(page.document.page.is_empty());
/// # Ok::<(), vision_hocr::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    ids: IdAllocator,
    language: String,
    title: String,
}

impl TreeBuilder {
    /// Create a builder for page `page_number`.
    pub fn new(page_number: u32) -> Self {
        Self {
            ids: IdAllocator::new(page_number),
            language: UNKNOWN_LANGUAGE.to_string(),
            title: String::new(),
        }
    }

    /// Set the document language tag.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Build the tree for the first page of `response`.
    ///
    /// A page without blocks produces an empty page, not an error. A
    /// response without any page, or a word without a usable polygon, is
    /// reported as [`Error::MalformedResponse`].
    pub fn build(mut self, response: &RecognitionResponse) -> Result<RecognizedPage> {
        let pages = response.pages();
        let source = pages.first().ok_or_else(|| {
            Error::MalformedResponse("response contains no recognized page".into())
        })?;
        if pages.len() > 1 {
            log::debug!(
                "Response holds {} pages, using the first for page {}",
                pages.len(),
                self.ids.page_number()
            );
        }

        let mut page = Page::new(self.ids.page_number(), source.width, source.height);
        for block in &source.blocks {
            let block = self.build_block(block)?;
            page.add_block(block);
        }

        let document = Document::new(page)
            .with_language(self.language)
            .with_title(self.title);

        let stats = document.stats();
        log::debug!(
            "Built page {}: {} blocks, {} paragraphs, {} lines ({} empty), {} words",
            document.page_number(),
            stats.blocks,
            stats.paragraphs,
            stats.lines,
            stats.empty_lines,
            stats.words
        );

        Ok(RecognizedPage {
            document,
            transcript: response.text().to_string(),
        })
    }

    fn build_block(&mut self, source: &response::Block) -> Result<Block> {
        let mut block = Block::new(self.ids.next(ElementKind::Block));
        for paragraph in &source.paragraphs {
            let paragraph = self.build_paragraph(paragraph)?;
            block.add_paragraph(paragraph);
        }
        let block = block.close(polygon_rect(source.bounding_box.as_ref()));
        if block.bbox.is_none() {
            return Err(unboxed(&block.id));
        }
        Ok(block)
    }

    fn build_paragraph(&mut self, source: &response::Paragraph) -> Result<Paragraph> {
        let mut paragraph = Paragraph::new(self.ids.next(ElementKind::Paragraph));

        // The first line is opened before any word is seen, so even a
        // paragraph without words holds one (empty) line.
        let mut lines = LineSegmenter::open(&mut self.ids);
        for word in &source.words {
            let (word, ends_line) = self.build_word(word)?;
            lines.push(word);
            if ends_line {
                lines.cut(&mut self.ids);
            }
        }

        for line in lines.finish() {
            paragraph.add_line(line);
        }
        // Only lines may go without a box; a paragraph needs a word or a
        // polygon of its own.
        let paragraph = paragraph.close(polygon_rect(source.bounding_box.as_ref()));
        if paragraph.bbox.is_none() {
            return Err(unboxed(&paragraph.id));
        }
        Ok(paragraph)
    }

    /// Returns the word and whether an end-of-line break was seen in it.
    fn build_word(&mut self, source: &response::Word) -> Result<(Word, bool)> {
        let id = self.ids.next(ElementKind::Word);
        let bbox = polygon_rect(source.bounding_box.as_ref()).ok_or_else(|| {
            Error::MalformedResponse(format!("{} has no usable bounding polygon", id))
        })?;

        let mut text = String::new();
        let mut ends_line = false;
        for symbol in &source.symbols {
            text.push_str(&symbol.text);
            match symbol.break_kind() {
                BreakKind::Hyphen => text.push('-'),
                BreakKind::EolSureSpace => ends_line = true,
                // Spaces are not materialized; words are separate elements.
                BreakKind::Unknown
                | BreakKind::Space
                | BreakKind::SureSpace
                | BreakKind::LineBreak => {}
            }
        }

        Ok((Word::new(id, bbox, text), ends_line))
    }
}

fn polygon_rect(poly: Option<&BoundingPoly>) -> Option<Rect> {
    poly.and_then(BoundingPoly::to_rect)
}

fn unboxed(id: &str) -> Error {
    Error::MalformedResponse(format!(
        "{} has no boxed content and no usable bounding polygon",
        id
    ))
}

/// Build the tree for `response` as page `page_number` with default
/// metadata.
pub fn build_tree(response: &RecognitionResponse, page_number: u32) -> Result<RecognizedPage> {
    TreeBuilder::new(page_number).build(response)
}
