//! Rendering module for converting page trees to output formats.

mod hocr;
mod json;
mod options;

pub use hocr::{to_hocr, HocrRenderer, Node, BASELINE_PLACEHOLDER, CAPABILITIES};
pub use json::{to_json, JsonFormat};
pub use options::{HocrOptions, DEFAULT_OCR_SYSTEM};
