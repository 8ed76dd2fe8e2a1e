//! Recognition response parsing: tree building, line segmentation and
//! language hint normalization.

mod builder;
mod language;
mod segment;

pub use builder::{build_tree, RecognizedPage, TreeBuilder};
pub use language::{normalize_language, normalize_languages, COLLAPSED_LANGUAGES};
pub use segment::LineSegmenter;
