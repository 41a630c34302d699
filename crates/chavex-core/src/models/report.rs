//! Report data structures and the filename field parser.

use serde::{Deserialize, Serialize};

/// Fields decomposed from a document filename.
///
/// Filenames follow the `Empresa_NumeroDoc_..._Filial.pdf` convention;
/// missing segments become empty strings, never a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilenameFields {
    /// Company (segment 0).
    pub company: String,
    /// Document number (segment 1).
    pub document_number: String,
    /// Branch: segment 3 with the `.pdf` extension stripped.
    pub branch: String,
    /// The full original filename.
    pub filename: String,
}

impl FilenameFields {
    /// Parse underscore-delimited fields out of a filename.
    pub fn parse(filename: &str) -> Self {
        let parts: Vec<&str> = filename.split('_').collect();

        Self {
            company: parts.first().copied().unwrap_or_default().to_string(),
            document_number: parts.get(1).copied().unwrap_or_default().to_string(),
            branch: parts
                .get(3)
                .map(|s| strip_pdf_extension(s))
                .unwrap_or_default(),
            filename: filename.to_string(),
        }
    }
}

fn strip_pdf_extension(segment: &str) -> String {
    let lower = segment.to_ascii_lowercase();
    if let Some(stem_len) = lower.strip_suffix(".pdf").map(str::len) {
        segment[..stem_len].to_string()
    } else {
        segment.to_string()
    }
}

/// One report line per processed file, in processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Fields parsed from the filename.
    #[serde(flatten)]
    pub fields: FilenameFields,
    /// The extracted access key, if the file had one.
    pub key: Option<String>,
}

/// Per-run counters reported at the end of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Files processed (every listed PDF).
    pub processed: usize,
    /// Files with a validated access key.
    pub with_key: usize,
    /// Files without a key, including unreadable ones.
    pub without_key: usize,
    /// Files where reading or routing failed.
    pub errored: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_filename() {
        let fields = FilenameFields::parse("Energisa_9012820_Lac_151.pdf");
        assert_eq!(
            fields,
            FilenameFields {
                company: "Energisa".to_string(),
                document_number: "9012820".to_string(),
                branch: "151".to_string(),
                filename: "Energisa_9012820_Lac_151.pdf".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_uppercase_extension() {
        let fields = FilenameFields::parse("Dcelt_123_X_22.PDF");
        assert_eq!(fields.branch, "22");
    }

    #[test]
    fn test_parse_missing_segments() {
        let fields = FilenameFields::parse("fatura.pdf");
        assert_eq!(fields.company, "fatura.pdf");
        assert_eq!(fields.document_number, "");
        assert_eq!(fields.branch, "");

        let fields = FilenameFields::parse("Empresa_42.pdf");
        assert_eq!(fields.company, "Empresa");
        assert_eq!(fields.document_number, "42.pdf");
        assert_eq!(fields.branch, "");
    }
}
