pub mod dialect;
pub mod parser;
pub mod pipeline;
pub mod recognizer;
pub mod sections;

pub use dialect::{CompiledRules, DialectError, DialectTable, FooterMarker, ReceiptDialect};
pub use parser::{parse_receipt, ParseReport, ParserConfig, PassKind, ReceiptParser};
pub use pipeline::{PipelineError, ReceiptPipeline, ReceiptScan};
pub use recognizer::{
    MockPdfExtractor, MockRecognizer, OcrBackend, OcrError, PdfTextBackend, UnavailableBackend,
};
pub use sections::{split_sections, Sections};
