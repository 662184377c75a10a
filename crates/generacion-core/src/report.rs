//! # Classification Report
//!
//! Runs every strategy over one birth year and keeps the results side by
//! side, so callers can render them in order and check they agree.

use crate::strategies::{Strategy, chained, independent, lookup};
use crate::types::{Age, BirthYear, Generation};

/// Outcome of one classification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationReport {
    /// The validated input.
    pub age: Age,
    /// `CURRENT_YEAR - age`.
    pub birth_year: BirthYear,
    /// Buckets matched by the independent-conditions pass.
    pub independent: Vec<Generation>,
    /// Bucket chosen by the chained-conditions pass.
    pub chained: Generation,
    /// Bucket chosen by the lookup-dispatch pass.
    pub lookup: Generation,
}

impl ClassificationReport {
    /// Classify an age against the fixed current year.
    #[must_use]
    pub fn classify(age: Age) -> Self {
        Self::classify_birth_year(age, age.birth_year())
    }

    /// Classify with an explicit birth year.
    #[must_use]
    pub fn classify_birth_year(age: Age, birth_year: BirthYear) -> Self {
        Self {
            age,
            birth_year,
            independent: independent::classify(birth_year),
            chained: chained::classify(birth_year),
            lookup: lookup::classify(birth_year),
        }
    }

    /// Results of one pass, in the order they should be printed.
    #[must_use]
    pub fn results_for(&self, strategy: Strategy) -> &[Generation] {
        match strategy {
            Strategy::Independent => &self.independent,
            Strategy::Chained => std::slice::from_ref(&self.chained),
            Strategy::Lookup => std::slice::from_ref(&self.lookup),
        }
    }

    /// True when all three passes produced the same single bucket.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.independent.as_slice() == [self.chained] && self.chained == self.lookup
    }

    /// The agreed bucket, if the passes agree.
    #[must_use]
    pub fn generation(&self) -> Option<Generation> {
        self.is_consistent().then_some(self.chained)
    }
}

// =============================================================================
// TESTS
// =============================================================================
