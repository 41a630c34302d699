//! Document-level key extraction pipeline.

use tracing::{debug, warn};

use crate::models::config::ExtractionConfig;

use super::matcher::find_candidates;
use super::resolver::resolve;
use super::validator::{KeyValidator, ValidationResult};
use super::ExtractionOutcome;

/// Result of running the pipeline over one document's text.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The document key, or absence.
    pub outcome: ExtractionOutcome,
    /// Verdict for every candidate, in document order.
    pub results: Vec<ValidationResult>,
    /// Extraction warnings (e.g. ambiguous multi-key documents).
    pub warnings: Vec<String>,
}

/// Access key parser: normalizer, matcher, validator and resolver wired
/// together.
#[derive(Debug, Clone)]
pub struct ChaveParser {
    validator: KeyValidator,
}

impl ChaveParser {
    /// Create a parser with all validation stages enabled.
    pub fn new() -> Self {
        Self {
            validator: KeyValidator::new(),
        }
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_structural_validation(config.validate_structure)
            .with_check_digit_validation(config.validate_check_digit)
    }

    /// Set whether to apply structural plausibility checks.
    pub fn with_structural_validation(mut self, validate: bool) -> Self {
        self.validator = self.validator.with_structural_validation(validate);
        self
    }

    /// Set whether to verify the modulo-11 check digit.
    pub fn with_check_digit_validation(mut self, validate: bool) -> Self {
        self.validator = self.validator.with_check_digit_validation(validate);
        self
    }

    /// Run the full pipeline over a document's text.
    pub fn parse(&self, text: &str) -> Extraction {
        let candidates = find_candidates(text);
        debug!(candidates = candidates.len(), "matched key candidates");

        let results: Vec<ValidationResult> = candidates
            .into_iter()
            .map(|candidate| self.validator.validate(candidate))
            .collect();

        let (outcome, warnings) = resolve(&results);
        for warning in &warnings {
            warn!("{warning}");
        }

        Extraction {
            outcome,
            results,
            warnings,
        }
    }
}

impl Default for ChaveParser {
    fn default() -> Self {
        Self::new()
    }
}
