//! # Independent Conditions
//!
//! Every range predicate is evaluated, in table order, regardless of what
//! the previous ones returned. Each predicate that holds contributes its
//! bucket to the result.

use crate::primitives::{
    BOOMERS_END, BOOMERS_START, GEN_X_END, GEN_X_START, MILLENNIALS_END, MILLENNIALS_START,
    POSTWAR_END, POSTWAR_START, Z_ALPHA_START,
};
use crate::types::{BirthYear, Generation};

/// Classify with six standalone `if` statements.
///
/// The ranges never overlap, so the result always holds exactly one bucket.
#[must_use]
#[allow(clippy::manual_range_contains)]
pub fn classify(year: BirthYear) -> Vec<Generation> {
    let year = year.value();
    let mut matched = Vec::with_capacity(1);

    if year >= POSTWAR_START && year <= POSTWAR_END {
        matched.push(Generation::PostwarChildren);
    }

    if year >= BOOMERS_START && year <= BOOMERS_END {
        matched.push(Generation::BabyBoomers);
    }

    if year >= GEN_X_START && year <= GEN_X_END {
        matched.push(Generation::GenX);
    }

    if year >= MILLENNIALS_START && year <= MILLENNIALS_END {
        matched.push(Generation::Millennials);
    }

    if year >= Z_ALPHA_START {
        matched.push(Generation::ZAndAlpha);
    }

    if year < POSTWAR_START {
        matched.push(Generation::Unclassified);
    }

    matched
}
