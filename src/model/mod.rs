//! Document model types for the hOCR page tree.
//!
//! This module defines the intermediate representation that bridges a
//! recognition response and the rendered markup: a page holding blocks,
//! paragraphs, lines and words, each with an id and a pixel rectangle.

mod document;
mod geometry;
pub mod ids;
mod kind;
mod page;
mod paragraph;

pub use document::{Document, Metadata, TreeStats, UNKNOWN_LANGUAGE};
pub use geometry::{Rect, Vertex};
pub use ids::IdAllocator;
pub use kind::ElementKind;
pub use page::{Block, Page};
pub use paragraph::{Line, Paragraph, Word};
