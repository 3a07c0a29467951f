//! Validation and normalization of Chinese patent numbers.
//!
//! A patent number (public announcement number) is a year field, a category
//! digit, a sequence number and a trailing check character computed with a
//! weighted modulo-11 sum. Two numbering eras are supported:
//!
//! | Era | Length | Year field | Years |
//! |-----|--------|------------|-------|
//! | Legacy | 9 | 2 digits | 1985 to 2003 |
//! | Modern | 13 | 4 digits | 2003 to the current year |
//!
//! Inputs may carry a `CN` or `ZL` prefix in any case and a `.` separator
//! anywhere.
//!
//! # Quick Start
//!
//! ```
//! use patnum_core::{Category, Era, PatentNumberValidator};
//!
//! let validator = PatentNumberValidator::new(2026);
//!
//! let number = validator.parse("CN2008100008351").unwrap();
//! assert_eq!(number.era(), Era::Modern);
//! assert_eq!(number.year(), 2008);
//! assert_eq!(number.category(), Category::Invention);
//!
//! assert_eq!(
//!     validator.validate("zl200410000001.2", true).as_deref(),
//!     Some("200410000001.2")
//! );
//! assert_eq!(validator.validate("12345", false), None);
//! ```

pub mod checksum;
pub mod era;
pub mod error;
pub mod number;
pub mod validator;

pub use checksum::expected_check_char;
pub use era::{Category, Era};
pub use error::{ValidationError, ValidationResult};
pub use number::{PatentNumber, SEPARATOR};
pub use validator::{normalize, validate, PatentNumberValidator};
