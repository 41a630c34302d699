//! Candidate matching over digit runs.

use tracing::trace;

use super::normalizer::digit_runs;
use super::patterns::{CONTINUOUS_KEY, DCELT_SHAPE, ENERGISA_SHAPE};
use super::{Candidate, FormatTag};

/// An access key has exactly 44 digits.
pub const KEY_LENGTH: usize = 44;

/// Find all key candidates in a document, ordered by source offset.
///
/// Every digit run with at least 44 digits yields candidates. Runs never
/// overlap, so each text position is consumed by exactly one recognizer.
/// Runs with exactly 44 digits are classified by their raw shape in fixed
/// priority order (Energisa, Dcelt, generic separated, continuous); longer
/// runs yield one `Standard` candidate per 44-digit window, recovering keys
/// glued to neighboring digits.
pub fn find_candidates(text: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for run in digit_runs(text) {
        if run.digits.len() < KEY_LENGTH {
            continue;
        }

        if run.digits.len() == KEY_LENGTH {
            let format = classify(run.raw);
            trace!(offset = run.start, ?format, "key-sized digit run");
            candidates.push(Candidate {
                value: run.digits,
                format,
                offset: run.start,
            });
        } else {
            trace!(
                offset = run.start,
                digits = run.digits.len(),
                "oversized digit run, emitting windows"
            );
            for i in 0..=run.digits.len() - KEY_LENGTH {
                candidates.push(Candidate {
                    value: run.digits[i..i + KEY_LENGTH].to_string(),
                    format: FormatTag::Standard,
                    offset: run.start + i,
                });
            }
        }
    }

    candidates
}

/// Classify the raw shape of a 44-digit run.
fn classify(raw: &str) -> FormatTag {
    if ENERGISA_SHAPE.is_match(raw) {
        FormatTag::Energisa
    } else if DCELT_SHAPE.is_match(raw) {
        FormatTag::Dcelt
    } else if CONTINUOUS_KEY.is_match(raw) {
        FormatTag::Standard
    } else {
        FormatTag::Separated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "50231201543032000104660010000987651876543211";

    fn grouped(key: &str, sep: &str) -> String {
        key.as_bytes()
            .chunks(4)
            .map(|c| std::str::from_utf8(c).unwrap())
            .collect::<Vec<_>>()
            .join(sep)
    }

    #[test]
    fn test_continuous_key() {
        let candidates = find_candidates(&format!("chave {KEY} fim"));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].value, KEY);
        assert_eq!(candidates[0].format, FormatTag::Standard);
        assert_eq!(candidates[0].offset, 6);
    }

    #[test]
    fn test_energisa_form_matches_continuous() {
        let groups = grouped(KEY, " ");
        // 10 groups, line break, final group.
        let energisa = format!("{}\n{}", &groups[..49], &groups[50..]);
        let candidates = find_candidates(&energisa);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].value, KEY);
        assert_eq!(candidates[0].format, FormatTag::Energisa);
    }

    #[test]
    fn test_dcelt_form_matches_continuous() {
        let candidates = find_candidates(&grouped(KEY, " "));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].value, KEY);
        assert_eq!(candidates[0].format, FormatTag::Dcelt);
    }

    #[test]
    fn test_separator_styles_yield_same_key() {
        for sep in [" ", ".", "-", ". "] {
            let candidates = find_candidates(&format!("Chave de Acesso: {}", grouped(KEY, sep)));
            assert_eq!(candidates.len(), 1, "separator {sep:?}");
            assert_eq!(candidates[0].value, KEY, "separator {sep:?}");
        }
    }

    #[test]
    fn test_generic_separated_fallback() {
        let candidates = find_candidates(&grouped(KEY, "."));
        // Dotted groups are accepted by the Dcelt recognizer; mixed
        // separators fall through to the generic one.
        assert_eq!(candidates[0].format, FormatTag::Dcelt);

        // Uneven grouping falls through to the generic recognizer.
        let uneven = format!("{} {}", &KEY[..10], &KEY[10..]);
        let candidates = find_candidates(&uneven);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].value, KEY);
        assert_eq!(candidates[0].format, FormatTag::Separated);
    }

    #[test]
    fn test_short_run_yields_nothing() {
        let forty = &KEY[..40];
        assert!(find_candidates(&format!("numero {forty}")).is_empty());
    }

    #[test]
    fn test_oversized_run_yields_windows() {
        let glued = format!("9{KEY}");
        let candidates = find_candidates(&glued);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].offset, 0);
        assert_eq!(candidates[1].value, KEY);
        assert_eq!(candidates[1].offset, 1);
        assert!(candidates.iter().all(|c| c.format == FormatTag::Standard));
    }

    #[test]
    fn test_candidates_ordered_by_offset() {
        let other = "35240112345678000195550010000001231123456781";
        let text = format!("a {other} b {KEY}");
        let candidates = find_candidates(&text);
        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].offset < candidates[1].offset);
        assert_eq!(candidates[0].value, other);
    }
}
