//! Parsed patent numbers.

use crate::era::{Category, Era};
use crate::error::ValidationError;
use crate::validator::PatentNumberValidator;

/// Character that may separate the check character from the rest.
pub const SEPARATOR: char = '.';

/// A validated patent number in normalized form (no prefix, no separator,
/// upper-case check character).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatentNumber {
    pub(crate) body: String,
    pub(crate) era: Era,
    pub(crate) year: i32,
    pub(crate) category: Category,
}

impl PatentNumber {
    /// Normalized body, check character included.
    pub fn as_str(&self) -> &str {
        &self.body
    }

    pub fn era(&self) -> Era {
        self.era
    }

    /// Calendar year of filing.
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Everything before the check character.
    pub fn leading(&self) -> &str {
        &self.body[..self.body.len() - 1]
    }

    pub fn check_char(&self) -> char {
        // body is ASCII and never empty once validated
        char::from(self.body.as_bytes()[self.body.len() - 1])
    }

    /// Renders the number with [`SEPARATOR`] before the check character.
    ///
    /// ```
    /// use patnum_core::PatentNumberValidator;
    ///
    /// let number = PatentNumberValidator::new(2026).parse("CN2008100008351").unwrap();
    /// assert_eq!(number.with_separator(), "200810000835.1");
    /// ```
    pub fn with_separator(&self) -> String {
        format!("{}{}{}", self.leading(), SEPARATOR, self.check_char())
    }

    /// Renders the number with or without the separator.
    pub fn render(&self, with_separator: bool) -> String {
        if with_separator {
            self.with_separator()
        } else {
            self.body.clone()
        }
    }
}

impl std::fmt::Display for PatentNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.body)
    }
}

impl AsRef<str> for PatentNumber {
    fn as_ref(&self) -> &str {
        &self.body
    }
}

impl std::str::FromStr for PatentNumber {
    type Err = ValidationError;

    /// Parses against the current calendar year from the system clock.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatentNumberValidator::from_system_clock().parse(s)
    }
}
