//! # Property-Based Tests
//!
//! These tests ensure the three strategies agree and the bucket table
//! stays exhaustive and exclusive.

use generacion_core::strategies::{chained, independent, lookup};
use generacion_core::{Age, BirthYear, CURRENT_YEAR, ClassificationReport, Generation};
use proptest::prelude::*;

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// All three strategies return the same bucket for any birth year.
    #[test]
    fn strategies_agree(year in any::<i64>()) {
        let year = BirthYear(year);
        let chained = chained::classify(year);

        prop_assert_eq!(independent::classify(year), vec![chained]);
        prop_assert_eq!(lookup::classify(year), chained);
    }

    /// Exactly one bucket contains any birth year.
    #[test]
    fn exactly_one_bucket(year in any::<i64>()) {
        let matching = Generation::ALL
            .iter()
            .filter(|g| g.contains(BirthYear(year)))
            .count();
        prop_assert_eq!(matching, 1);
    }

    /// The bucket chosen by the strategies is the one that contains the year.
    #[test]
    fn strategies_match_bucket_bounds(year in 1800i64..2100) {
        let year = BirthYear(year);
        prop_assert!(chained::classify(year).contains(year));
    }

    /// Birth year is the current year minus the age.
    #[test]
    fn birth_year_arithmetic(years in 0i64..10_000) {
        let age = Age::new(years).expect("age");
        prop_assert_eq!(age.birth_year(), BirthYear(CURRENT_YEAR - years));
    }

    /// Any valid age produces a consistent report.
    #[test]
    fn reports_are_consistent(years in 0i64..=i64::MAX) {
        let report = ClassificationReport::classify(Age::new(years).expect("age"));
        prop_assert!(report.is_consistent());
    }

    /// Parsing a formatted non-negative integer round-trips the value.
    #[test]
    fn parse_accepts_padded_integers(years in 0i64..1000, pad in 0usize..4) {
        let input = format!("{}{}\n", " ".repeat(pad), years);
        let age: Age = input.parse().expect("parse");
        prop_assert_eq!(age.value(), years);
    }
}
