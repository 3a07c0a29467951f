//! Numbering eras and patent categories.

/// First calendar year of the legacy 9-character scheme.
pub const LEGACY_FIRST_YEAR: i32 = 1985;
/// Last calendar year of the legacy scheme, and first year of the modern one.
pub const LEGACY_LAST_YEAR: i32 = 2003;
pub const MODERN_FIRST_YEAR: i32 = 2003;

/// Numbering scheme, determined by the body length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// 9 characters, two-digit year, 1985..=2003.
    Legacy,
    /// 13 characters, four-digit year, 2003 onwards.
    Modern,
}

impl Era {
    /// Era for a body of `length` characters, if any.
    pub fn from_len(length: usize) -> Option<Self> {
        match length {
            9 => Some(Self::Legacy),
            13 => Some(Self::Modern),
            _ => None,
        }
    }

    /// Body length including the check character.
    pub fn body_len(self) -> usize {
        match self {
            Self::Legacy => 9,
            Self::Modern => 13,
        }
    }

    /// Width of the leading year field.
    pub fn year_width(self) -> usize {
        match self {
            Self::Legacy => 2,
            Self::Modern => 4,
        }
    }

    /// Weights applied to the characters before the check character.
    pub fn weights(self) -> &'static [u32] {
        const WEIGHTS: &[u32; 12] = &[2, 3, 4, 5, 6, 7, 8, 9, 2, 3, 4, 5];
        &WEIGHTS[..self.body_len() - 1]
    }

    /// Maps the raw year field to a calendar year.
    pub fn full_year(self, field: i32) -> i32 {
        match self {
            Self::Legacy if field >= 85 => 1900 + field,
            Self::Legacy => 2000 + field,
            Self::Modern => field,
        }
    }

    /// Inclusive range of accepted calendar years.
    pub fn year_bounds(self, current_year: i32) -> (i32, i32) {
        match self {
            Self::Legacy => (LEGACY_FIRST_YEAR, LEGACY_LAST_YEAR),
            Self::Modern => (MODERN_FIRST_YEAR, current_year),
        }
    }
}

/// Patent type encoded by the digit after the year field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Invention,
    UtilityModel,
    Design,
    /// PCT invention application entering the national phase.
    PctInvention,
    /// PCT utility model application entering the national phase.
    PctUtilityModel,
}

impl Category {
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Self::Invention),
            '2' => Some(Self::UtilityModel),
            '3' => Some(Self::Design),
            '8' => Some(Self::PctInvention),
            '9' => Some(Self::PctUtilityModel),
            _ => None,
        }
    }

    pub fn digit(self) -> char {
        match self {
            Self::Invention => '1',
            Self::UtilityModel => '2',
            Self::Design => '3',
            Self::PctInvention => '8',
            Self::PctUtilityModel => '9',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Invention => "invention",
            Self::UtilityModel => "utility model",
            Self::Design => "design",
            Self::PctInvention => "invention (PCT national phase)",
            Self::PctUtilityModel => "utility model (PCT national phase)",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
