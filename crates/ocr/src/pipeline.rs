use std::sync::Arc;

use serde::Serialize;
use tasajako_core::LineItem;
use thiserror::Error;
use tokio::sync::watch;

use crate::parser::{PassKind, ReceiptParser};
use crate::recognizer::{OcrBackend, OcrError, PdfTextBackend};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("OCR recognition failed: {0}")]
    Ocr(#[from] OcrError),
    #[error("Text acquisition task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// The result of a single receipt scan.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptScan {
    /// Raw text as produced by the OCR engine or PDF extractor.
    pub raw_text: String,
    pub items: Vec<LineItem>,
    pub pass: Option<PassKind>,
    /// Nothing was readable and `items` holds a single blank entry for manual input.
    pub placeholder_used: bool,
}

/// Orchestrates: acquire text (OCR or PDF) → parse → placeholder fallback.
///
/// Text acquisition runs on the blocking pool. The parser only ever sees the
/// complete text; dropping the returned future abandons the scan without
/// parsing anything.
pub struct ReceiptPipeline<R: OcrBackend, P: PdfTextBackend> {
    recognizer: Arc<R>,
    pdf: Arc<P>,
    parser: ReceiptParser,
}

impl<R: OcrBackend + 'static, P: PdfTextBackend + 'static> ReceiptPipeline<R, P> {
    pub fn new(recognizer: R, pdf: P, parser: ReceiptParser) -> Self {
        Self {
            recognizer: Arc::new(recognizer),
            pdf: Arc::new(pdf),
            parser,
        }
    }

    /// Recognize an image, publishing progress in `0.0..=1.0` on `progress`.
    pub async fn process_image(
        &self,
        image: Vec<u8>,
        progress: watch::Sender<f32>,
    ) -> Result<ReceiptScan, PipelineError> {
        let recognizer = Arc::clone(&self.recognizer);
        let raw_text = tokio::task::spawn_blocking(move || {
            let report = |p: f32| {
                // No receivers left just means nobody is watching.
                let _ = progress.send(p.clamp(0.0, 1.0));
            };
            report(0.0);
            let text = recognizer.recognize(&image, &report)?;
            report(1.0);
            Ok::<_, OcrError>(text)
        })
        .await??;

        Ok(self.finish(raw_text))
    }

    /// Extract text from every page of a PDF and parse it as one receipt.
    pub async fn process_pdf(&self, pdf_bytes: Vec<u8>) -> Result<ReceiptScan, PipelineError> {
        let pdf = Arc::clone(&self.pdf);
        let pages = tokio::task::spawn_blocking(move || pdf.extract_pages(&pdf_bytes)).await??;
        tracing::debug!(pages = pages.len(), "pdf text extracted");
        Ok(self.finish(pages.join("\n")))
    }

    /// Parse text that is already fully available.
    pub fn process_text(&self, raw_text: impl Into<String>) -> ReceiptScan {
        self.finish(raw_text.into())
    }

    fn finish(&self, raw_text: String) -> ReceiptScan {
        let report = self.parser.parse_with_report(&raw_text);
        let placeholder_used = report.items.is_empty();
        let items = if placeholder_used {
            tracing::info!("no line items found; offering a blank item for manual entry");
            vec![LineItem::placeholder()]
        } else {
            report.items
        };
        tracing::info!(items = items.len(), pass = ?report.pass, "receipt scanned");

        ReceiptScan { raw_text, items, pass: report.pass, placeholder_used }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
