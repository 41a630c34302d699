//! Candidate resolution: deterministic pick of the document key.

use std::collections::BTreeSet;

use super::{ExtractionOutcome, ValidationResult};

/// Select the document key from validation results in document order.
///
/// The first valid candidate by source offset wins. A key repeated on
/// several pages is not ambiguous; more than one distinct valid key is, and
/// gets flagged with a warning while still deterministically keeping the
/// first occurrence.
pub fn resolve(results: &[ValidationResult]) -> (ExtractionOutcome, Vec<String>) {
    let mut valid = results.iter().filter(|r| r.is_valid());

    let Some(first) = valid.next() else {
        return (ExtractionOutcome::NotFound, Vec::new());
    };

    let distinct: BTreeSet<&str> = results
        .iter()
        .filter(|r| r.is_valid())
        .map(|r| r.candidate.value.as_str())
        .collect();

    let mut warnings = Vec::new();
    if distinct.len() > 1 {
        warnings.push(format!(
            "{} distinct valid keys in one document; keeping first occurrence at offset {}",
            distinct.len(),
            first.candidate.offset
        ));
    }

    (
        ExtractionOutcome::Found(first.candidate.value.clone()),
        warnings,
    )
}
