//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use std::path::Path;
use tracing::debug;

use super::{Result, TextSource};
use crate::error::PdfError;

/// PDF text extractor backed by lopdf, with a pdf-extract fallback for
/// documents whose content streams lopdf cannot decode.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Load a PDF from bytes.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("decrypted PDF with empty password");

            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {e}")))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    /// Get the number of pages in the PDF.
    pub fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    /// Extract text from the entire PDF.
    pub fn extract_text(&self) -> Result<String> {
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    /// Extract text from a specific page (1-indexed).
    pub fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self
            .document
            .as_ref()
            .ok_or(PdfError::Parse("no document loaded".to_string()))?;

        if page == 0 || page > self.page_count() {
            return Err(PdfError::InvalidPage(page));
        }

        doc.extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    /// Extract per-page text for the whole document.
    ///
    /// Falls back to whole-document extraction as a single page when the
    /// per-page streams yield nothing, which happens for issuers whose
    /// content streams lopdf decodes incompletely.
    pub fn extract_pages(&self) -> Result<Vec<String>> {
        let page_count = self.page_count();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        let mut pages = Vec::with_capacity(page_count as usize);
        for page in 1..=page_count {
            pages.push(self.extract_page_text(page).unwrap_or_default());
        }

        if pages.iter().all(|p| p.trim().is_empty()) {
            debug!("per-page extraction empty, falling back to pdf-extract");
            let text = self.extract_text()?;
            if text.trim().is_empty() {
                return Err(PdfError::TextExtraction(
                    "document contains no extractable text".to_string(),
                ));
            }
            return Ok(vec![text]);
        }

        Ok(pages)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Production [`TextSource`] reading PDFs from the filesystem.
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn document_text(&self, path: &Path) -> Result<Vec<String>> {
        let data =
            std::fs::read(path).map_err(|e| PdfError::Parse(format!("cannot read file: {e}")))?;
        let mut extractor = PdfExtractor::new();
        extractor.load(&data)?;
        extractor.extract_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfExtractor::new();
        assert!(matches!(
            extractor.load(b"not a pdf"),
            Err(PdfError::Parse(_))
        ));
    }

    #[test]
    fn test_text_source_missing_file() {
        let source = PdfTextSource;
        assert!(source.document_text(Path::new("/nonexistent/file.pdf")).is_err());
    }
}
