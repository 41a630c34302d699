//! PDF text extraction module.

mod extractor;

pub use extractor::{PdfExtractor, PdfTextSource};

use crate::error::PdfError;
use std::path::Path;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Source of per-page document text.
///
/// This is the seam to the external PDF reader: the batch orchestrator only
/// sees ordered page text and treats any failure here as "no key found",
/// never as fatal to the run.
pub trait TextSource {
    /// Extract the text of every page of the document at `path`, in page
    /// order.
    fn document_text(&self, path: &Path) -> Result<Vec<String>>;
}
