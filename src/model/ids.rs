//! Per-page element identifiers.

use super::ElementKind;

/// Hands out `<kind>_<page>_<counter>` ids, one counter per element kind.
///
/// Counters start at 1 and only move forward, so ids are unique within a
/// page and strictly increasing within each kind.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    page_number: u32,
    blocks: u32,
    paragraphs: u32,
    lines: u32,
    words: u32,
}

impl IdAllocator {
    /// Create an allocator for one page.
    pub fn new(page_number: u32) -> Self {
        Self {
            page_number,
            blocks: 0,
            paragraphs: 0,
            lines: 0,
            words: 0,
        }
    }

    /// The page this allocator belongs to.
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Id of the page element itself.
    pub fn page_id(&self) -> String {
        page_id(self.page_number)
    }

    /// Allocate the next id for `kind`.
    ///
    /// There is exactly one page per allocator, so asking for another page
    /// id returns the same value.
    pub fn next(&mut self, kind: ElementKind) -> String {
        let counter = match kind {
            ElementKind::Page => return self.page_id(),
            ElementKind::Block => &mut self.blocks,
            ElementKind::Paragraph => &mut self.paragraphs,
            ElementKind::Line => &mut self.lines,
            ElementKind::Word => &mut self.words,
        };
        *counter += 1;
        format!("{}_{}_{}", kind.id_prefix(), self.page_number, counter)
    }
}

/// Id of the page element for `page_number`.
pub fn page_id(page_number: u32) -> String {
    format!("{}_{}", ElementKind::Page.id_prefix(), page_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_per_kind() {
        let mut ids = IdAllocator::new(3);
        assert_eq!(ids.next(ElementKind::Block), "block_3_1");
        assert_eq!(ids.next(ElementKind::Paragraph), "par_3_1");
        assert_eq!(ids.next(ElementKind::Line), "line_3_1");
        assert_eq!(ids.next(ElementKind::Word), "word_3_1");
        assert_eq!(ids.next(ElementKind::Word), "word_3_2");
        assert_eq!(ids.next(ElementKind::Line), "line_3_2");
        assert_eq!(ids.next(ElementKind::Block), "block_3_2");
    }

    #[test]
    fn test_page_id() {
        let mut ids = IdAllocator::new(12);
        assert_eq!(ids.page_id(), "page_12");
        assert_eq!(ids.next(ElementKind::Page), "page_12");
        assert_eq!(ids.page_number(), 12);
    }
}
