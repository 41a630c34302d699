//! Text normalization: collapsing separator variants inside digit runs.
//!
//! Issuers print the same 44-digit key with spaces, dots, dashes or line
//! breaks between groups. The normalizer finds each maximal digit run,
//! strips the separators, and leaves every other part of the document text
//! untouched so downstream checks still see the original context.

/// Minimum digit count for a run to be normalized. Shorter runs (postal
/// codes, phone fragments) pass through unchanged.
pub const MIN_RUN_DIGITS: usize = 8;

/// A maximal run of digits possibly interspersed with separators.
///
/// Starts and ends on a digit; `raw` is the original slice including
/// interior separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitRun<'a> {
    /// The digits of the run with separators removed.
    pub digits: String,
    /// Byte offset of the first digit in the source text.
    pub start: usize,
    /// Original text of the run.
    pub raw: &'a str,
}

fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'.' | b'-' | b'\n' | b'\r')
}

/// Scan `text` for all maximal digit runs in document order.
///
/// A run extends over digits and separator characters but never past any
/// other character, and trailing separators are not part of the run.
pub fn digit_runs(text: &str) -> Vec<DigitRun<'_>> {
    let bytes = text.as_bytes();
    let mut runs = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i + 1;
        let mut digits = String::new();
        digits.push(bytes[i] as char);

        let mut j = i + 1;
        while j < bytes.len() {
            let b = bytes[j];
            if b.is_ascii_digit() {
                digits.push(b as char);
                j += 1;
                end = j;
            } else if is_separator(b) {
                j += 1;
            } else {
                break;
            }
        }

        runs.push(DigitRun {
            digits,
            start,
            raw: &text[start..end],
        });
        i = j;
    }

    runs
}

/// Produce the normalized view of a document.
///
/// Every digit run with at least [`MIN_RUN_DIGITS`] digits is replaced by
/// its separator-free digit string; the rest of the text is copied
/// byte-identical. Idempotent: normalizing already-normalized text yields
/// the same result.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    for run in digit_runs(text) {
        out.push_str(&text[copied..run.start]);
        if run.digits.len() >= MIN_RUN_DIGITS {
            out.push_str(&run.digits);
        } else {
            out.push_str(run.raw);
        }
        copied = run.start + run.raw.len();
    }

    out.push_str(&text[copied..]);
    out
}

/// Strip every non-digit character from a candidate string.
pub fn strip_separators(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_digit_runs_offsets_and_digits() {
        let text = "tel 4733-1234 chave 1234 5678 fim";
        let runs = digit_runs(text);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].digits, "47331234");
        assert_eq!(runs[0].start, 4);
        assert_eq!(runs[0].raw, "4733-1234");
        assert_eq!(runs[1].digits, "12345678");
        assert_eq!(runs[1].raw, "1234 5678");
    }

    #[test]
    fn test_runs_end_on_digit() {
        let runs = digit_runs("12 34 - abc");
        assert_eq!(runs[0].raw, "12 34");
    }

    #[test]
    fn test_normalize_collapses_long_runs() {
        let text = "chave: 5023 1201 5430 3200 0104 6600 1000 0987 6518 7654 3211 ok";
        let normalized = normalize(text);
        assert_eq!(
            normalized,
            "chave: 50231201543032000104660010000987651876543211 ok"
        );
    }

    #[test]
    fn test_normalize_keeps_short_runs() {
        let text = "CEP 79002-120, tel 3321-4455";
        // Both runs are below the threshold and must survive verbatim.
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn test_normalize_preserves_surrounding_text() {
        let text = "Empresa XYZ\nvalor R$ 1.234.567-8 total";
        assert_eq!(normalize(text), "Empresa XYZ\nvalor R$ 12345678 total");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "1234 5678 9012 3456 7890 1234 5678 9012 3456 7890\n1234",
            "texto 1234.5678.9012 e 12-34",
            "sem digitos",
            "50231201543032000104660010000987651876543211",
        ];
        for text in samples {
            let once = normalize(text);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip_separators("1234 5678-90.12"), "123456789012");
    }
}
