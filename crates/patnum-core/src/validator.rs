//! Patent number validation.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. separators are removed and the input is upper-cased
//! 2. a leading `CN` or `ZL` is stripped
//! 3. all characters but the last must be digits, the last a digit or `X`
//! 4. the body must be 9 (legacy) or 13 (modern) characters
//! 5. the year field must fall inside the era's range
//! 6. the category digit must be one of 1, 2, 3, 8, 9
//! 7. the check character must match the weighted modulo-11 sum

use chrono::Datelike;

use crate::checksum::expected_check_char;
use crate::era::{Category, Era};
use crate::error::{ValidationError, ValidationResult};
use crate::number::{PatentNumber, SEPARATOR};

const PREFIXES: [&str; 2] = ["CN", "ZL"];

/// Validates patent numbers against a fixed current year.
///
/// The current year bounds modern (13-character) numbers from above, so it
/// is part of the validator rather than read on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatentNumberValidator {
    current_year: i32,
}

impl PatentNumberValidator {
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Validator pinned to the local calendar year.
    pub fn from_system_clock() -> Self {
        Self::new(chrono::Local::now().year())
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Parses `input` into a [`PatentNumber`], reporting why it was rejected.
    pub fn parse(&self, input: &str) -> ValidationResult<PatentNumber> {
        let normalized = normalize(input);
        let body = strip_prefix(&normalized);

        let check = check_char(body)?;

        let era = Era::from_len(body.len())
            .ok_or(ValidationError::BadLength { length: body.len() })?;

        // body is all ASCII from here on
        let width = era.year_width();
        let year = era.full_year(digits_value(&body[..width]));
        let (min, max) = era.year_bounds(self.current_year);
        if !(min..=max).contains(&year) {
            return Err(ValidationError::BadYear { year, min, max });
        }

        let digit = char::from(body.as_bytes()[width]);
        let category = Category::from_digit(digit).ok_or(ValidationError::BadCategory { digit })?;

        let expected = expected_check_char(era, &body[..body.len() - 1]);
        if expected != check {
            return Err(ValidationError::ChecksumMismatch {
                expected,
                actual: check,
            });
        }

        Ok(PatentNumber {
            body: body.to_string(),
            era,
            year,
            category,
        })
    }

    /// Returns the normalized number, or `None` when it is invalid.
    ///
    /// With `with_separator` the result carries a `.` before the check
    /// character.
    ///
    /// ```
    /// use patnum_core::PatentNumberValidator;
    ///
    /// let validator = PatentNumberValidator::new(2026);
    /// assert_eq!(
    ///     validator.validate("ZL200410000001.2", true).as_deref(),
    ///     Some("200410000001.2")
    /// );
    /// assert_eq!(validator.validate("12345", false), None);
    /// ```
    pub fn validate(&self, input: &str, with_separator: bool) -> Option<String> {
        match self.parse(input) {
            Ok(number) => Some(number.render(with_separator)),
            Err(e) => {
                tracing::debug!(
                    input,
                    reason = e.reason_code(),
                    error = %e,
                    "rejected patent number"
                );
                None
            }
        }
    }
}

impl Default for PatentNumberValidator {
    fn default() -> Self {
        Self::from_system_clock()
    }
}

/// Validates `input` against the current calendar year.
pub fn validate(input: &str, with_separator: bool) -> Option<String> {
    PatentNumberValidator::from_system_clock().validate(input, with_separator)
}

/// Removes separators and upper-cases the input.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|&c| c != SEPARATOR)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn strip_prefix(normalized: &str) -> &str {
    PREFIXES
        .iter()
        .find_map(|prefix| normalized.strip_prefix(prefix))
        .unwrap_or(normalized)
}

/// Checks the character classes and returns the check character.
fn check_char(body: &str) -> ValidationResult<char> {
    let mut chars = body.chars();
    let last = chars.next_back();
    let leading = chars.as_str();

    match last {
        Some(c)
            if !leading.is_empty()
                && leading.bytes().all(|b| b.is_ascii_digit())
                && (c.is_ascii_digit() || c == 'X') =>
        {
            Ok(c)
        }
        _ => Err(ValidationError::MalformedCharacters {
            body: body.to_string(),
        }),
    }
}

fn digits_value(digits: &str) -> i32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + i32::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2026;

    fn parse(input: &str) -> ValidationResult<PatentNumber> {
        PatentNumberValidator::new(YEAR).parse(input)
    }

    fn check(input: &str, with_separator: bool) -> Option<String> {
        PatentNumberValidator::new(YEAR).validate(input, with_separator)
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("zl2004.1000.0001.2"), "ZL2004100000012");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("..."), "");
    }

    #[test]
    fn test_strip_prefix() {
        assert_eq!(strip_prefix("CN2008100008351"), "2008100008351");
        assert_eq!(strip_prefix("ZL2008100008351"), "2008100008351");
        assert_eq!(strip_prefix("US2008100008351"), "US2008100008351");
        assert_eq!(strip_prefix("CN"), "");
        // only one prefix is removed
        assert_eq!(strip_prefix("CNZL2008100008351"), "ZL2008100008351");
    }

    #[test]
    fn test_legacy_with_x_check_char() {
        assert_eq!(check("85100007X", false).as_deref(), Some("85100007X"));
        assert_eq!(check("85100007x", false).as_deref(), Some("85100007X"));
        assert_eq!(
            parse("85123456X"),
            Err(ValidationError::ChecksumMismatch {
                expected: '9',
                actual: 'X'
            })
        );
        assert_eq!(check("851234569", false).as_deref(), Some("851234569"));
    }

    #[test]
    fn test_cn_prefixed_modern() {
        assert_eq!(
            check("CN2008100008351", false).as_deref(),
            Some("2008100008351")
        );
    }

    #[test]
    fn test_zl_with_separator() {
        assert_eq!(
            check("ZL200410000001.2", true).as_deref(),
            Some("200410000001.2")
        );
        assert_eq!(
            check("ZL200410000001.2", false).as_deref(),
            Some("2004100000012")
        );
        assert_eq!(
            parse("ZL200410000001.1"),
            Err(ValidationError::ChecksumMismatch {
                expected: '2',
                actual: '1'
            })
        );
    }

    #[test]
    fn test_bad_length() {
        assert_eq!(parse("12345"), Err(ValidationError::BadLength { length: 5 }));
        assert_eq!(
            parse("CN20081000083519"),
            Err(ValidationError::BadLength { length: 14 })
        );
        assert_eq!(
            parse("8512345690"),
            Err(ValidationError::BadLength { length: 10 })
        );
    }

    #[test]
    fn test_bad_category() {
        assert_eq!(parse("884234568"), Err(ValidationError::BadCategory { digit: '4' }));
        assert_eq!(parse("885234561"), Err(ValidationError::BadCategory { digit: '5' }));
        assert_eq!(
            parse("2004400000019"),
            Err(ValidationError::BadCategory { digit: '4' })
        );
        assert_eq!(check("881234567", false).as_deref(), Some("881234567"));
    }

    #[test]
    fn test_modern_checksum_and_future_year() {
        assert_eq!(
            check("2004999999992", false).as_deref(),
            Some("2004999999992")
        );
        assert!(matches!(
            parse("200499999999X"),
            Err(ValidationError::ChecksumMismatch { .. })
        ));
        assert_eq!(
            parse("2027100000013"),
            Err(ValidationError::BadYear {
                year: 2027,
                min: 2003,
                max: 2026
            })
        );
        assert_eq!(
            PatentNumberValidator::new(2027)
                .validate("2027100000013", false)
                .as_deref(),
            Some("2027100000013")
        );
    }

    #[test]
    fn test_year_boundaries() {
        // legacy
        assert_eq!(check("861000013", false).as_deref(), Some("861000013"));
        assert_eq!(check("853000018", false).as_deref(), Some("853000018"));
        assert_eq!(check("032100019", false).as_deref(), Some("032100019"));
        assert_eq!(check("002100010", false).as_deref(), Some("002100010"));
        assert_eq!(check("993100007", false).as_deref(), Some("993100007"));
        assert_eq!(
            parse("842100016"),
            Err(ValidationError::BadYear {
                year: 2084,
                min: 1985,
                max: 2003
            })
        );
        assert_eq!(
            parse("042100011"),
            Err(ValidationError::BadYear {
                year: 2004,
                min: 1985,
                max: 2003
            })
        );

        // modern
        assert_eq!(
            check("2003100000018", false).as_deref(),
            Some("2003100000018")
        );
        assert_eq!(
            check("2026100000019", false).as_deref(),
            Some("2026100000019")
        );
        assert_eq!(
            parse("2002100000013"),
            Err(ValidationError::BadYear {
                year: 2002,
                min: 2003,
                max: 2026
            })
        );
    }

    #[test]
    fn test_all_categories_accepted() {
        for input in [
            "2004100000012",
            "2004200000018",
            "2004300000013",
            "2004800123453",
            "2005900123453",
            "858000016",
            "85900001X",
        ] {
            assert!(parse(input).is_ok(), "{input} should be valid");
        }
    }

    #[test]
    fn test_short_inputs_are_malformed() {
        for input in ["", ".", "1", "X", "CN", "ZL", "CN1", "cnX"] {
            assert!(
                matches!(parse(input), Err(ValidationError::MalformedCharacters { .. })),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_malformed_characters() {
        for input in [
            "85X234569",
            "8512345.6A",
            "US2008100008351",
            " 2008100008351",
            "2008100008351 ",
            "2008-100008351",
            "２００８100008351",
            "200810000835١",
        ] {
            assert!(
                matches!(parse(input), Err(ValidationError::MalformedCharacters { .. })),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_separator_anywhere_is_ignored() {
        assert_eq!(
            check(".2008.1000.0835.1.", false).as_deref(),
            Some("2008100008351")
        );
        assert_eq!(
            check("cn.2008100008351", true).as_deref(),
            Some("200810000835.1")
        );
    }

    #[test]
    fn test_default_uses_system_clock() {
        let year = chrono::Local::now().year();
        assert_eq!(PatentNumberValidator::default().current_year(), year);
        assert_eq!(
            validate("CN2008100008351", false).as_deref(),
            Some("2008100008351")
        );
    }
}
