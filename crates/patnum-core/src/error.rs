//! Error types for patent number validation.

/// Reasons a candidate patent number is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A non-digit before the check character, or a check character that is
    /// neither a digit nor `X`.
    #[error("malformed characters in {body:?}")]
    MalformedCharacters { body: String },

    /// Body is neither 9 nor 13 characters long.
    #[error("unsupported length {length}, expected 9 or 13")]
    BadLength { length: usize },

    /// Year field decodes outside the range of its numbering era.
    #[error("year {year} outside {min}..={max}")]
    BadYear { year: i32, min: i32, max: i32 },

    /// Category digit is not one of 1, 2, 3, 8, 9.
    #[error("unknown category digit '{digit}'")]
    BadCategory { digit: char },

    /// Supplied check character disagrees with the computed one.
    #[error("check character mismatch: expected '{expected}', got '{actual}'")]
    ChecksumMismatch { expected: char, actual: char },
}

impl ValidationError {
    /// Stable machine-readable code for the rejection reason.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::MalformedCharacters { .. } => codes::E_PAT_CHARS,
            Self::BadLength { .. } => codes::E_PAT_LENGTH,
            Self::BadYear { .. } => codes::E_PAT_YEAR,
            Self::BadCategory { .. } => codes::E_PAT_CATEGORY,
            Self::ChecksumMismatch { .. } => codes::E_PAT_CHECKSUM,
        }
    }
}

pub mod codes {
    pub const E_PAT_CHARS: &str = "E_PAT_CHARS";
    pub const E_PAT_LENGTH: &str = "E_PAT_LENGTH";
    pub const E_PAT_YEAR: &str = "E_PAT_YEAR";
    pub const E_PAT_CATEGORY: &str = "E_PAT_CATEGORY";
    pub const E_PAT_CHECKSUM: &str = "E_PAT_CHECKSUM";
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
