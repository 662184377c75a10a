//! # Innate Primitives
//!
//! Hardcoded constants for the classifier.
//!
//! These values are compiled into the binary and never change at runtime.
//! The bucket boundaries are inclusive on both ends; the last bucket is
//! open-ended upwards and everything before the first bucket is unclassified.

/// Reference year used to derive a birth year from an age.
pub const CURRENT_YEAR: i64 = 2025;

// =============================================================================
// BUCKET BOUNDARIES (inclusive)
// =============================================================================

/// First birth year of the post-war children cohort.
pub const POSTWAR_START: i64 = 1930;
/// Last birth year of the post-war children cohort.
pub const POSTWAR_END: i64 = 1948;

/// First birth year of the baby boomers cohort.
pub const BOOMERS_START: i64 = 1949;
/// Last birth year of the baby boomers cohort.
pub const BOOMERS_END: i64 = 1968;

/// First birth year of generation X.
pub const GEN_X_START: i64 = 1969;
/// Last birth year of generation X.
pub const GEN_X_END: i64 = 1980;

/// First birth year of the millennials cohort.
pub const MILLENNIALS_START: i64 = 1981;
/// Last birth year of the millennials cohort.
pub const MILLENNIALS_END: i64 = 1993;

/// First birth year of generations Z and Alpha. No upper bound.
pub const Z_ALPHA_START: i64 = 1994;

// =============================================================================
// CONSOLE TEXT
// =============================================================================

/// Prompt shown before reading the age. No trailing newline.
pub const AGE_PROMPT: &str = "Por favor, ingresa tu edad: ";

/// Header of the independent-conditions pass.
pub const HEADER_INDEPENDENT: &str = "=== Usando estructura IF ===";

/// Header of the chained-conditions pass.
pub const HEADER_CHAINED: &str = "=== Usando estructura IF...ELSE ===";

/// Header of the lookup-dispatch pass.
pub const HEADER_LOOKUP: &str = "=== Usando estructura SWITCH ===";

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_contiguous() {
        assert_eq!(POSTWAR_END + 1, BOOMERS_START);
        assert_eq!(BOOMERS_END + 1, GEN_X_START);
        assert_eq!(GEN_X_END + 1, MILLENNIALS_START);
        assert_eq!(MILLENNIALS_END + 1, Z_ALPHA_START);
    }

    #[test]
    fn boundaries_are_ordered() {
        let bounds = [
            POSTWAR_START,
            POSTWAR_END,
            BOOMERS_START,
            BOOMERS_END,
            GEN_X_START,
            GEN_X_END,
            MILLENNIALS_START,
            MILLENNIALS_END,
            Z_ALPHA_START,
        ];
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert!(Z_ALPHA_START <= CURRENT_YEAR);
    }
}
