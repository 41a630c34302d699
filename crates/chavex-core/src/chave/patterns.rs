//! Regex patterns for access key layout recognition.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Energisa invoices print the key as 10 groups of 4 digits followed by
    // the last group on the next line.
    pub static ref ENERGISA_SHAPE: Regex = Regex::new(
        r"^\d{4}(?: +\d{4}){9} *\r?\n *\d{4}$"
    ).unwrap();

    // Dcelt invoices print all 11 groups of 4 digits on a single line.
    pub static ref DCELT_SHAPE: Regex = Regex::new(
        r"^\d{4}(?:[ .\-]+\d{4}){10}$"
    ).unwrap();

    // Continuous 44-digit key with no separators at all.
    pub static ref CONTINUOUS_KEY: Regex = Regex::new(
        r"^\d{44}$"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energisa_shape() {
        let raw = "5023 1201 5430 3200 0104 6600 1000 0987 6518 7654\n3211";
        assert!(ENERGISA_SHAPE.is_match(raw));
        assert!(!DCELT_SHAPE.is_match(raw));
    }

    #[test]
    fn test_dcelt_shape() {
        let raw = "5023 1201 5430 3200 0104 6600 1000 0987 6518 7654 3211";
        assert!(DCELT_SHAPE.is_match(raw));
        assert!(!ENERGISA_SHAPE.is_match(raw));
    }

    #[test]
    fn test_dcelt_rejects_short_group_count() {
        assert!(!DCELT_SHAPE.is_match("1234 5678 9012"));
    }
}
