//! Page image detection and probing.

use crate::error::{Error, Result};
use image::ImageFormat;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Number of leading bytes inspected when sniffing a file.
const SNIFF_LEN: usize = 32;

/// Information about a page image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    /// Encoded image format
    pub format: ImageFormat,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl std::fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {}x{}", self.format, self.width, self.height)
    }
}

/// Read the pixel dimensions of an image without decoding it.
///
/// Any failure, whether the file is missing, unreadable or not an image, is
/// reported as [`Error::ImageAccess`].
///
/// # Example
/// ```no_run
/// use vision_hocr::detect::image_dimensions;
///
/// let (width, height) = image_dimensions("scan/page-0001.png").unwrap();
/// println!("{}x{}", width, height);
/// ```
pub fn image_dimensions<P: AsRef<Path>>(path: P) -> Result<(u32, u32)> {
    let path = path.as_ref();
    image::image_dimensions(path).map_err(|e| Error::ImageAccess {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Probe format and dimensions of an image file.
pub fn probe_image<P: AsRef<Path>>(path: P) -> Result<ImageInfo> {
    let path = path.as_ref();
    let format = detect_format_from_path(path).map_err(|e| Error::ImageAccess {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let (width, height) = image_dimensions(path)?;
    Ok(ImageInfo {
        format,
        width,
        height,
    })
}

/// Detect the image format of a file from its leading bytes.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<ImageFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SNIFF_LEN);
    BufReader::new(file)
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the image format from bytes.
///
/// # Returns
/// * `Ok(ImageFormat)` if the data starts with a known image signature
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<ImageFormat> {
    image::guess_format(data).map_err(|_| Error::UnknownFormat)
}

/// Check if a file is a readable image.
pub fn is_image<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes start with a known image signature.
pub fn is_image_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
