//! Access key recognition module.
//!
//! The pipeline runs in four stages: the normalizer collapses separator
//! variants inside digit runs, the matcher turns runs into tagged
//! candidates, the validator applies structural and check-digit rules, and
//! the resolver picks the key for the document.

pub mod matcher;
pub mod normalizer;
pub mod patterns;
mod parser;
mod resolver;
pub mod validator;

pub use matcher::{KEY_LENGTH, find_candidates};
pub use normalizer::{MIN_RUN_DIGITS, DigitRun, digit_runs, normalize, strip_separators};
pub use parser::{ChaveParser, Extraction};
pub use resolver::resolve;
pub use validator::{KeyValidator, ValidationReason, ValidationResult, check_digit, validate_key};

/// Layout variant a candidate was recognized from.
///
/// Checked in declaration order; the more specific shapes come first since a
/// generic recognizer would mis-split them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// 10 space-separated groups of 4 digits, a line break, 1 group of 4.
    Energisa,
    /// 11 separator-delimited groups of 4 digits on one line.
    Dcelt,
    /// Space/dot/dash delimited groups summing to 44 digits.
    Separated,
    /// Continuous 44-digit run.
    Standard,
}

/// A digit sequence that might be an access key, prior to validation.
///
/// Uniqueness is by value plus offset; the same key repeated on several
/// pages produces one candidate per occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Normalized digit string.
    pub value: String,
    /// Recognizer that produced the match.
    pub format: FormatTag,
    /// Byte offset of the match in the source text.
    pub offset: usize,
}

/// Terminal extraction value for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// A fully validated 44-digit access key.
    Found(String),
    /// No candidates, or all candidates failed validation.
    NotFound,
}

impl ExtractionOutcome {
    /// The extracted key, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ExtractionOutcome::Found(key) => Some(key),
            ExtractionOutcome::NotFound => None,
        }
    }
}
