//! Core library for NFe access key extraction.
//!
//! This crate provides:
//! - PDF text extraction (lopdf with a pdf-extract fallback)
//! - Access key recognition across issuer layout variants
//!   (continuous, Energisa, Dcelt, generic separated)
//! - Structural and modulo-11 check digit validation
//! - Batch orchestration with folder routing and report output

pub mod batch;
pub mod chave;
pub mod error;
pub mod models;
pub mod pdf;
pub mod report;

pub use batch::{BatchOutcome, BatchProcessor};
pub use chave::{
    Candidate, ChaveParser, Extraction, ExtractionOutcome, FormatTag, ValidationReason,
    ValidationResult, validate_key,
};
pub use error::{ChavexError, PdfError, Result};
pub use models::config::{ChavexConfig, ExtractionConfig, FolderConfig};
pub use models::report::{BatchSummary, FilenameFields, ReportRow};
pub use pdf::{PdfExtractor, PdfTextSource, TextSource};
