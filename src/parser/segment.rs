//! Line segmentation inside a paragraph.
//!
//! Recognizers do not report lines, only per-symbol breaks. A paragraph is
//! split into lines by cutting after every word whose symbols carried an
//! end-of-line break.

use crate::model::{ElementKind, IdAllocator, Line, Word};

/// Accumulates the words of one paragraph into lines.
///
/// There is always exactly one open line. [`LineSegmenter::cut`] closes it
/// and opens the next; [`LineSegmenter::finish`] closes the last one, even
/// when it holds no words.
#[derive(Debug)]
pub struct LineSegmenter {
    current: Line,
    closed: Vec<Line>,
}

impl LineSegmenter {
    /// Open the first line of a paragraph.
    pub fn open(ids: &mut IdAllocator) -> Self {
        Self {
            current: Line::new(ids.next(ElementKind::Line)),
            closed: Vec::new(),
        }
    }

    /// Add a word to the open line.
    pub fn push(&mut self, word: Word) {
        self.current.push(word);
    }

    /// Close the open line and start a new one.
    pub fn cut(&mut self, ids: &mut IdAllocator) {
        let next = Line::new(ids.next(ElementKind::Line));
        let done = std::mem::replace(&mut self.current, next);
        self.closed.push(done.close());
    }

    /// The line currently receiving words.
    pub fn current(&self) -> &Line {
        &self.current
    }

    /// Number of lines closed so far.
    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }

    /// Close the open line and return every line of the paragraph.
    pub fn finish(self) -> Vec<Line> {
        let mut lines = self.closed;
        lines.push(self.current.close());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rect;

    fn word(ids: &mut IdAllocator, text: &str, x: i32) -> Word {
        Word::new(ids.next(ElementKind::Word), Rect::new(x, 0, x + 10, 10), text)
    }

    #[test]
    fn test_no_cut_single_line() {
        let mut ids = IdAllocator::new(1);
        let mut seg = LineSegmenter::open(&mut ids);
        let w1 = word(&mut ids, "a", 0);
        let w2 = word(&mut ids, "b", 20);
        seg.push(w1);
        seg.push(w2);

        let lines = seg.finish();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id, "line_1_1");
        assert_eq!(lines[0].words.len(), 2);
        assert_eq!(lines[0].bbox, Some(Rect::new(0, 0, 30, 10)));
    }

    #[test]
    fn test_cut_moves_later_words_to_new_line() {
        let mut ids = IdAllocator::new(1);
        let mut seg = LineSegmenter::open(&mut ids);
        let w1 = word(&mut ids, "a", 0);
        seg.push(w1);
        seg.cut(&mut ids);
        assert_eq!(seg.closed_count(), 1);
        assert_eq!(seg.current().id, "line_1_2");
        assert!(seg.current().is_empty());

        let w2 = word(&mut ids, "b", 20);
        seg.push(w2);
        let lines = seg.finish();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].words[0].text, "a");
        assert_eq!(lines[1].words[0].text, "b");
        assert_eq!(lines[1].bbox, Some(Rect::new(20, 0, 30, 10)));
    }

    #[test]
    fn test_finish_keeps_empty_line() {
        let mut ids = IdAllocator::new(1);
        let seg = LineSegmenter::open(&mut ids);
        let lines = seg.finish();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
        assert_eq!(lines[0].bbox, None);
    }

    #[test]
    fn test_trailing_cut_leaves_empty_last_line() {
        let mut ids = IdAllocator::new(1);
        let mut seg = LineSegmenter::open(&mut ids);
        let w1 = word(&mut ids, "end", 0);
        seg.push(w1);
        seg.cut(&mut ids);
        let lines = seg.finish();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].is_empty());
        assert_eq!(lines[1].bbox, None);
    }
}
