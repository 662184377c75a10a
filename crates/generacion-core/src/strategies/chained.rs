//! # Chained Conditions
//!
//! An `if / else if` chain over the ordered ranges. The first predicate that
//! holds wins; anything left over falls through to `Unclassified`.

use crate::primitives::{
    BOOMERS_END, BOOMERS_START, GEN_X_END, GEN_X_START, MILLENNIALS_END, MILLENNIALS_START,
    POSTWAR_END, POSTWAR_START, Z_ALPHA_START,
};
use crate::types::{BirthYear, Generation};

/// Classify with a short-circuiting conditional chain.
#[must_use]
#[allow(clippy::manual_range_contains)]
pub fn classify(year: BirthYear) -> Generation {
    let year = year.value();

    if year >= POSTWAR_START && year <= POSTWAR_END {
        Generation::PostwarChildren
    } else if year >= BOOMERS_START && year <= BOOMERS_END {
        Generation::BabyBoomers
    } else if year >= GEN_X_START && year <= GEN_X_END {
        Generation::GenX
    } else if year >= MILLENNIALS_START && year <= MILLENNIALS_END {
        Generation::Millennials
    } else if year >= Z_ALPHA_START {
        Generation::ZAndAlpha
    } else {
        Generation::Unclassified
    }
}
