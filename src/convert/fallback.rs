//! Output for pages without usable recognition results.

use crate::detect::image_dimensions;
use crate::error::Result;
use crate::model::Document;
use crate::render::{HocrOptions, HocrRenderer};
use std::path::Path;

/// Transcript written for pages without recognition results.
pub const SKIPPED_PAGE_TRANSCRIPT: &str = "[skipped page]";

/// A single empty page of the given pixel size.
pub fn fallback_document(page_number: u32, width: u32, height: u32, language: &str) -> Document {
    Document::empty(page_number, width, height).with_language(language)
}

/// Fallback markup and transcript for `image`.
///
/// The page size is read from the image itself. An image that cannot be
/// measured fails with [`crate::Error::ImageAccess`].
pub fn generate_fallback(
    image: &Path,
    page_number: u32,
    language: &str,
    options: &HocrOptions,
) -> Result<(String, String)> {
    let document = fallback_for_image(image, page_number, language)?;
    let hocr = HocrRenderer::new(options.clone()).render(&document);
    Ok((hocr, SKIPPED_PAGE_TRANSCRIPT.to_string()))
}

pub(crate) fn fallback_for_image(
    image: &Path,
    page_number: u32,
    language: &str,
) -> Result<Document> {
    let (width, height) = image_dimensions(image)?;
    Ok(fallback_document(page_number, width, height, language).with_title(image_title(image)))
}

pub(crate) fn image_title(image: &Path) -> String {
    image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
