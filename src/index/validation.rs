use crate::index::constants::{
    ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX, PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION,
    digit_value,
};

/// Determines if a code is valid.
///
/// A valid code has exactly one separator, at an even position no later than
/// the eighth digit. Padding is only allowed in full codes, as a single even
/// run directly before a trailing separator. Every other character must come
/// from the code alphabet (case-insensitive).
///
/// ```
/// use plus_codes_rs::is_valid;
///
/// assert!(is_valid("8FWC2345+G6"));
/// assert!(is_valid("2345+G6"));
/// assert!(!is_valid("8FWC2345+G"));
/// ```
pub fn is_valid(code: &str) -> bool {
    let chars: Vec<char> = code.chars().collect();

    let Some(separator) = chars.iter().position(|&c| c == SEPARATOR) else {
        return false;
    };
    if chars.iter().filter(|&&c| c == SEPARATOR).count() > 1 {
        return false;
    }
    if chars.len() == 1 {
        return false;
    }
    if separator > SEPARATOR_POSITION || separator % 2 == 1 {
        return false;
    }

    if let Some(pad_start) = chars.iter().position(|&c| c == PADDING_CHARACTER) {
        // Short codes cannot carry padding
        if separator < SEPARATOR_POSITION {
            return false;
        }
        if pad_start == 0 {
            return false;
        }
        let pad_len = chars[pad_start..]
            .iter()
            .take_while(|&&c| c == PADDING_CHARACTER)
            .count();
        if pad_len % 2 == 1 || pad_len > SEPARATOR_POSITION - 2 {
            return false;
        }
        if pad_start + pad_len != separator || separator != chars.len() - 1 {
            return false;
        }
    }

    // Exactly one character after the separator is never legal
    if chars.len() - separator - 1 == 1 {
        return false;
    }

    chars
        .iter()
        .filter(|&&c| c != SEPARATOR && c != PADDING_CHARACTER)
        .all(|&c| digit_value(c).is_some())
}

/// Determines if a code is a valid short code, i.e. one with fewer than eight
/// digits before the separator.
pub fn is_short(code: &str) -> bool {
    if !is_valid(code) {
        return false;
    }
    code.chars()
        .position(|c| c == SEPARATOR)
        .is_some_and(|separator| separator < SEPARATOR_POSITION)
}

/// Determines if a code is a valid full code.
///
/// On top of being valid and not short, the first two digits must not place
/// the area at or beyond 90 degrees latitude or 180 degrees longitude.
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }

    let mut chars = code.chars();
    if let Some(first) = chars.next().and_then(digit_value) {
        if (first * ENCODING_BASE) as f64 >= LATITUDE_MAX * 2.0 {
            return false;
        }
    }
    if let Some(second) = chars.next().and_then(digit_value) {
        if (second * ENCODING_BASE) as f64 >= LONGITUDE_MAX * 2.0 {
            return false;
        }
    }
    true
}

/// Returns whether the code contains padding characters.
pub fn is_padded(code: &str) -> bool {
    code.contains(PADDING_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    // code, is_valid, is_short, is_full
    const VALIDITY_CASES: &[(&str, bool, bool, bool)] = &[
        ("8FWC2345+G6", true, false, true),
        ("8FWC2345+G6G", true, false, true),
        ("8fwc2345+", true, false, true),
        ("8FWCX400+", true, false, true),
        ("WC2345+G6g", true, true, false),
        ("2345+G6", true, true, false),
        ("45+G6", true, true, false),
        ("+G6", true, true, false),
        ("G+", false, false, false),
        ("+", false, false, false),
        ("8FWC2345+G", false, false, false),
        ("8FWC2_45+G6", false, false, false),
        ("8FWC2η45+G6", false, false, false),
        ("8FWC2345+G6+", false, false, false),
        ("8FWC2345G6+", false, false, false),
        ("8FWC2300+G6", false, false, false),
        ("WC2300+G6g", false, false, false),
        ("WC2345+G", false, false, false),
        ("WC2300+", false, false, false),
        ("849VGJQF+VX7QR3J", true, false, true),
        ("849VGJQF+VX7QR3U", false, false, false),
        ("849VGJQF+VX7QR3JW", true, false, true),
        ("849VGJQF+VX7QR3JU", false, false, false),
    ];

    #[test]
    fn test_validity_table() {
        for &(code, valid, short, full) in VALIDITY_CASES {
            assert_eq!(is_valid(code), valid, "is_valid({})", code);
            assert_eq!(is_short(code), short, "is_short({})", code);
            assert_eq!(is_full(code), full, "is_full({})", code);
        }
    }

    #[test]
    fn test_empty_code_is_invalid() {
        assert!(!is_valid(""));
        assert!(!is_short(""));
        assert!(!is_full(""));
    }

    #[test]
    fn test_padding_rules() {
        assert!(is_valid("8F000000+"));
        assert!(!is_valid("80000000+"));
        assert!(!is_valid("8F00000+"));
        assert!(!is_valid("8FW000+"));
        assert!(!is_valid("8F0000WC+"));
        assert!(!is_valid("8F00WC00+"));
        assert!(!is_valid("00000000+"));
    }

    #[test]
    fn test_out_of_range_full_codes() {
        // First digit F puts latitude at 90
        assert!(is_valid("F2222222+"));
        assert!(!is_full("F2222222+"));
        // Second digit W puts longitude at 180
        assert!(is_valid("CW222222+"));
        assert!(!is_full("CW222222+"));
        assert!(is_full("CV222222+"));
    }

    #[test]
    fn test_is_padded() {
        assert!(is_padded("7FG49Q00+"));
        assert!(!is_padded("7FG49QCJ+2V"));
    }
}
