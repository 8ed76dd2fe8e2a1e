//! Rendering options and configuration.

/// Default value of the `ocr-system` meta tag.
pub const DEFAULT_OCR_SYSTEM: &str = concat!("vision-hocr ", env!("CARGO_PKG_VERSION"));

/// Options for rendering hOCR markup.
#[derive(Debug, Clone)]
pub struct HocrOptions {
    /// Value of the `ocr-system` meta tag
    pub ocr_system: String,

    /// Title overriding the document's own title
    pub title: Option<String>,
}

impl HocrOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `ocr-system` meta tag.
    pub fn with_ocr_system(mut self, system: impl Into<String>) -> Self {
        self.ocr_system = system.into();
        self
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Default for HocrOptions {
    fn default() -> Self {
        Self {
            ocr_system: DEFAULT_OCR_SYSTEM.to_string(),
            title: None,
        }
    }
}
