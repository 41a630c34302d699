//! Access key validation: length, digit composition, embedded structure
//! and the modulo-11 check digit.

use super::matcher::KEY_LENGTH;
use super::Candidate;

/// IBGE state codes that can appear in positions 0-1 of a key.
const UF_CODES: [u8; 27] = [
    11, 12, 13, 14, 15, 16, 17, // Norte
    21, 22, 23, 24, 25, 26, 27, 28, 29, // Nordeste
    31, 32, 33, 35, // Sudeste
    41, 42, 43, // Sul
    50, 51, 52, 53, // Centro-Oeste
];

/// Fiscal document models that carry an access key:
/// NF-e (55), CT-e (57), NFC-e (65), NF3e (66).
const MODEL_CODES: [u8; 4] = [55, 57, 65, 66];

/// Check-digit weights, cycling from the rightmost digit leftwards.
const WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Why a candidate was accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// Passed every check.
    Ok,
    /// Not exactly 44 characters.
    WrongLength,
    /// Contains a non-digit character.
    NonNumeric,
    /// Position 43 does not match the recomputed check digit.
    CheckDigitFailed,
    /// Embedded state code, date or model field is implausible.
    StructuralMismatch,
}

/// Validation verdict for one candidate. Never persisted beyond a
/// pipeline run.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub candidate: Candidate,
    pub reason: ValidationReason,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.reason == ValidationReason::Ok
    }
}

/// Key validator with toggleable check stages.
///
/// Pure and deterministic; checks always run in the same order, so a
/// candidate failing several stages reports the first failure.
#[derive(Debug, Clone)]
pub struct KeyValidator {
    validate_structure: bool,
    validate_check_digit: bool,
}

impl KeyValidator {
    /// Create a validator with all checks enabled.
    pub fn new() -> Self {
        Self {
            validate_structure: true,
            validate_check_digit: true,
        }
    }

    /// Set whether to apply the structural plausibility checks.
    pub fn with_structural_validation(mut self, validate: bool) -> Self {
        self.validate_structure = validate;
        self
    }

    /// Set whether to verify the modulo-11 check digit.
    pub fn with_check_digit_validation(mut self, validate: bool) -> Self {
        self.validate_check_digit = validate;
        self
    }

    /// Validate a candidate.
    pub fn validate(&self, candidate: Candidate) -> ValidationResult {
        let reason = self.reason_for(&candidate.value);
        ValidationResult { candidate, reason }
    }

    fn reason_for(&self, key: &str) -> ValidationReason {
        if key.len() != KEY_LENGTH {
            return ValidationReason::WrongLength;
        }
        if !key.bytes().all(|b| b.is_ascii_digit()) {
            return ValidationReason::NonNumeric;
        }
        if self.validate_structure && !passes_structure(key) {
            return ValidationReason::StructuralMismatch;
        }
        if self.validate_check_digit && !verify_check_digit(key) {
            return ValidationReason::CheckDigitFailed;
        }
        ValidationReason::Ok
    }
}

impl Default for KeyValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a key string with all checks enabled.
pub fn validate_key(key: &str) -> bool {
    let validator = KeyValidator::new();
    validator.reason_for(key) == ValidationReason::Ok
}

/// Compute the modulo-11 check digit over the first 43 digits of a key.
///
/// Weighted sum with weights 2..9 cycling from the rightmost digit;
/// remainder below 2 maps to 0, anything else to 11 minus the remainder.
/// Returns `None` unless given exactly 43 decimal digits.
pub fn check_digit(digits: &str) -> Option<u32> {
    if digits.len() != KEY_LENGTH - 1 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| u32::from(b - b'0') * WEIGHTS[i % WEIGHTS.len()])
        .sum();

    let remainder = sum % 11;
    Some(if remainder < 2 { 0 } else { 11 - remainder })
}

fn verify_check_digit(key: &str) -> bool {
    let expected = key.as_bytes()[KEY_LENGTH - 1] - b'0';
    check_digit(&key[..KEY_LENGTH - 1]) == Some(u32::from(expected))
}

/// Structural plausibility of a 44-digit key: state code, issue date,
/// document model, and digit diversity.
fn passes_structure(key: &str) -> bool {
    let uf: u8 = match key[0..2].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    if !UF_CODES.contains(&uf) {
        return false;
    }

    // Positions 2-5 are AAMM; any two-digit year is acceptable.
    let month: u8 = match key[4..6].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    if !(1..=12).contains(&month) {
        return false;
    }

    let model: u8 = match key[20..22].parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    if !MODEL_CODES.contains(&model) {
        return false;
    }

    // Real keys have varied digits; a near-constant sequence is a false
    // positive (column padding, page rulers). Same for the issuer
    // registration field in positions 6-19.
    distinct_digits(key) > 5 && distinct_digits(&key[6..20]) > 2
}

fn distinct_digits(s: &str) -> u32 {
    let mut seen = 0u16;
    for b in s.bytes() {
        seen |= 1 << (b - b'0');
    }
    seen.count_ones()
}
