//! # Core Type Definitions
//!
//! This module contains the core types for the classifier:
//! - Input and derived values (`Age`, `BirthYear`)
//! - The generational buckets (`Generation`)
//! - Error types (`GeneracionError`)
//!
//! ## Guarantees
//!
//! - An `Age` is never negative once constructed
//! - Birth year arithmetic saturates instead of overflowing
//! - Every birth year maps to exactly one `Generation`

use crate::primitives::{
    BOOMERS_END, BOOMERS_START, CURRENT_YEAR, GEN_X_END, GEN_X_START, MILLENNIALS_END,
    MILLENNIALS_START, POSTWAR_END, POSTWAR_START, Z_ALPHA_START,
};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// AGE
// =============================================================================

/// Age in whole years, as typed by the user.
///
/// The only ways to build one are [`Age::new`] and [`str::parse`], both of
/// which reject negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(i64);

impl Age {
    /// Validate a raw age.
    pub fn new(years: i64) -> Result<Self, GeneracionError> {
        if years < 0 {
            return Err(GeneracionError::NegativeAge(years));
        }
        Ok(Self(years))
    }

    /// Get the raw age value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Birth year relative to [`CURRENT_YEAR`].
    #[must_use]
    pub const fn birth_year(self) -> BirthYear {
        self.birth_year_in(CURRENT_YEAR)
    }

    /// Birth year relative to an arbitrary reference year.
    #[must_use]
    pub const fn birth_year_in(self, current_year: i64) -> BirthYear {
        BirthYear(current_year.saturating_sub(self.0))
    }
}

impl FromStr for Age {
    type Err = GeneracionError;

    /// Parse a line of user input. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let years: i64 = trimmed
            .parse()
            .map_err(|_| GeneracionError::InvalidAge(trimmed.to_string()))?;
        Self::new(years)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// BIRTH YEAR
// =============================================================================

/// Derived birth year. Any integer is a valid birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthYear(pub i64);

impl BirthYear {
    /// Get the raw year value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BirthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// GENERATION
// =============================================================================

/// Generational bucket over birth years.
///
/// | Bucket | Birth years |
/// |--------|-------------|
/// | `PostwarChildren` | 1930–1948 |
/// | `BabyBoomers` | 1949–1968 |
/// | `GenX` | 1969–1980 |
/// | `Millennials` | 1981–1993 |
/// | `ZAndAlpha` | 1994 onwards |
/// | `Unclassified` | before 1930 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Generation {
    PostwarChildren,
    BabyBoomers,
    GenX,
    Millennials,
    ZAndAlpha,
    Unclassified,
}

impl Generation {
    /// All buckets, in table order.
    pub const ALL: [Generation; 6] = [
        Generation::PostwarChildren,
        Generation::BabyBoomers,
        Generation::GenX,
        Generation::Millennials,
        Generation::ZAndAlpha,
        Generation::Unclassified,
    ];

    /// Short name of the bucket.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Generation::PostwarChildren => "Generación Niños de Posguerra",
            Generation::BabyBoomers => "Generación Baby Boomers",
            Generation::GenX => "Generación X",
            Generation::Millennials => "Generación Millennials",
            Generation::ZAndAlpha => "Generaciones Z y Alpha",
            Generation::Unclassified => "Año de nacimiento no contemplado en este programa",
        }
    }

    /// Full sentence printed to the user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Generation::PostwarChildren => "Perteneces a la Generación Niños de Posguerra",
            Generation::BabyBoomers => "Perteneces a la Generación Baby Boomers",
            Generation::GenX => "Perteneces a la Generación X",
            Generation::Millennials => "Perteneces a la Generación Millennials",
            Generation::ZAndAlpha => "Perteneces a las Generaciones Z y Alpha",
            Generation::Unclassified => "Año de nacimiento no contemplado en este programa",
        }
    }

    /// Inclusive `(lower, upper)` bounds. `None` means open-ended.
    #[must_use]
    pub const fn bounds(&self) -> (Option<i64>, Option<i64>) {
        match self {
            Generation::PostwarChildren => (Some(POSTWAR_START), Some(POSTWAR_END)),
            Generation::BabyBoomers => (Some(BOOMERS_START), Some(BOOMERS_END)),
            Generation::GenX => (Some(GEN_X_START), Some(GEN_X_END)),
            Generation::Millennials => (Some(MILLENNIALS_START), Some(MILLENNIALS_END)),
            Generation::ZAndAlpha => (Some(Z_ALPHA_START), None),
            Generation::Unclassified => (None, Some(POSTWAR_START - 1)),
        }
    }

    /// Check whether a birth year falls inside this bucket.
    #[must_use]
    pub fn contains(&self, year: BirthYear) -> bool {
        let (lower, upper) = self.bounds();
        lower.is_none_or(|lo| year.0 >= lo) && upper.is_none_or(|hi| year.0 <= hi)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can end a classification run.
///
/// Every variant is terminal: the user re-runs the program to retry.
#[derive(Debug, Error)]
pub enum GeneracionError {
    /// The input is not an integer.
    #[error("Edad no válida: '{0}' no es un número entero.")]
    InvalidAge(String),

    /// The age is below zero.
    #[error("La edad no puede ser negativa.")]
    NegativeAge(i64),

    /// Reading from or writing to the console failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for GeneracionError {
    fn from(err: std::io::Error) -> Self {
        GeneracionError::Io(err.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
