use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Image decode error: {0}")]
    ImageDecode(String),
    #[error("OCR engine error: {0}")]
    Engine(String),
    #[error("PDF text extraction error: {0}")]
    Pdf(String),
    #[error("Tesseract not available, build with `tesseract` feature")]
    NotAvailable,
}

/// Abstraction over an OCR backend.
///
/// Implementations accept raw PNG/JPEG image bytes and return the recognized
/// text, reporting progress in `0.0..=1.0` as they go.
pub trait OcrBackend: Send + Sync {
    fn recognize(&self, image_bytes: &[u8], progress: &dyn Fn(f32)) -> Result<String, OcrError>;
}

/// Abstraction over a PDF text extractor: one string per page.
pub trait PdfTextBackend: Send + Sync {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, OcrError>;
}

// ── Mock backends (always available, used for tests) ──────────────────────────

/// Returns a pre-set string, stepping progress through a few stages.
pub struct MockRecognizer {
    pub text: String,
}

impl MockRecognizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl OcrBackend for MockRecognizer {
    fn recognize(&self, _image_bytes: &[u8], progress: &dyn Fn(f32)) -> Result<String, OcrError> {
        for step in [0.25, 0.5, 0.75] {
            progress(step);
        }
        Ok(self.text.clone())
    }
}

pub struct MockPdfExtractor {
    pub pages: Vec<String>,
}

impl MockPdfExtractor {
    pub fn new<S: Into<String>>(pages: impl IntoIterator<Item = S>) -> Self {
        Self { pages: pages.into_iter().map(Into::into).collect() }
    }
}

impl PdfTextBackend for MockPdfExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<String>, OcrError> {
        Ok(self.pages.clone())
    }
}

/// Backend that always fails; stands in when no engine is configured.
pub struct UnavailableBackend;

impl OcrBackend for UnavailableBackend {
    fn recognize(&self, _image_bytes: &[u8], _progress: &dyn Fn(f32)) -> Result<String, OcrError> {
        Err(OcrError::NotAvailable)
    }
}

impl PdfTextBackend for UnavailableBackend {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<String>, OcrError> {
        Err(OcrError::NotAvailable)
    }
}

// ── Tesseract backend (optional, gated behind `tesseract` feature) ─────────────

#[cfg(feature = "tesseract")]
pub mod tesseract_backend {
    use super::{OcrBackend, OcrError};
    use leptess::LepTess;

    pub struct TesseractRecognizer {
        data_path: Option<String>,
        lang: String,
    }

    impl TesseractRecognizer {
        /// `lang` is a Tesseract language list such as `"fin+eng"`.
        pub fn new(data_path: Option<String>, lang: &str) -> Self {
            Self { data_path, lang: lang.to_string() }
        }
    }

    impl OcrBackend for TesseractRecognizer {
        fn recognize(&self, image_bytes: &[u8], progress: &dyn Fn(f32)) -> Result<String, OcrError> {
            let mut lt = LepTess::new(self.data_path.as_deref(), &self.lang)
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            lt.set_image_from_mem(image_bytes)
                .map_err(|e| OcrError::ImageDecode(e.to_string()))?;
            progress(0.1);
            lt.get_utf8_text().map_err(|e| OcrError::Engine(e.to_string()))
        }
    }
}
