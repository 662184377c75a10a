//! # Classification Strategies
//!
//! The same bucket table, classified three different ways:
//!
//! | Strategy | Evaluation | Header |
//! |----------|------------|--------|
//! | `Independent` | six standalone `if`s, no short-circuit | `=== Usando estructura IF ===` |
//! | `Chained` | `if / else if / else` chain | `=== Usando estructura IF...ELSE ===` |
//! | `Lookup` | category code + dispatch table | `=== Usando estructura SWITCH ===` |
//!
//! All three must return the same bucket for every birth year. The
//! redundancy is the point: the program exists to put the three styles
//! side by side.

pub mod chained;
pub mod independent;
pub mod lookup;

use crate::primitives::{HEADER_CHAINED, HEADER_INDEPENDENT, HEADER_LOOKUP};
use crate::types::{BirthYear, Generation};

// =============================================================================
// STRATEGY ENUM
// =============================================================================

/// One of the three classification passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strategy {
    /// Independent conditions.
    Independent,
    /// Chained conditions.
    Chained,
    /// Lookup-table dispatch.
    Lookup,
}

impl Strategy {
    /// All strategies, in output order.
    pub const ALL: [Strategy; 3] = [Strategy::Independent, Strategy::Chained, Strategy::Lookup];

    /// Section header printed before this pass's result.
    #[must_use]
    pub const fn header(&self) -> &'static str {
        match self {
            Strategy::Independent => HEADER_INDEPENDENT,
            Strategy::Chained => HEADER_CHAINED,
            Strategy::Lookup => HEADER_LOOKUP,
        }
    }

    /// Run this pass over a birth year.
    ///
    /// Only `Independent` can, in principle, return more than one bucket.
    #[must_use]
    pub fn classify(&self, year: BirthYear) -> Vec<Generation> {
        match self {
            Strategy::Independent => independent::classify(year),
            Strategy::Chained => vec![chained::classify(year)],
            Strategy::Lookup => vec![lookup::classify(year)],
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Independent => "independent",
            Strategy::Chained => "chained",
            Strategy::Lookup => "lookup",
        };
        f.write_str(name)
    }
}

// =============================================================================
// TESTS
// =============================================================================
