//! # Lookup Dispatch
//!
//! Two steps: reduce the birth year to a small category code, then resolve
//! the code through a static dispatch table. Codes missing from the table
//! (including `0`) resolve to `Unclassified`.
//!
//! The category code never leaves this module.

use crate::primitives::{
    BOOMERS_END, BOOMERS_START, GEN_X_END, GEN_X_START, MILLENNIALS_END, MILLENNIALS_START,
    POSTWAR_END, POSTWAR_START, Z_ALPHA_START,
};
use crate::types::{BirthYear, Generation};

/// Category code (0–5). `Unclassified` is intentionally absent from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Category {
    Unclassified = 0,
    PostwarChildren = 1,
    BabyBoomers = 2,
    GenX = 3,
    Millennials = 4,
    ZAndAlpha = 5,
}

impl Category {
    #[allow(clippy::manual_range_contains)]
    fn from_birth_year(year: BirthYear) -> Self {
        let year = year.value();

        if year >= POSTWAR_START && year <= POSTWAR_END {
            Category::PostwarChildren
        } else if year >= BOOMERS_START && year <= BOOMERS_END {
            Category::BabyBoomers
        } else if year >= GEN_X_START && year <= GEN_X_END {
            Category::GenX
        } else if year >= MILLENNIALS_START && year <= MILLENNIALS_END {
            Category::Millennials
        } else if year >= Z_ALPHA_START {
            Category::ZAndAlpha
        } else {
            Category::Unclassified
        }
    }

    const fn code(self) -> u8 {
        self as u8
    }
}

/// Code -> bucket dispatch table.
const DISPATCH: [(u8, Generation); 5] = [
    (1, Generation::PostwarChildren),
    (2, Generation::BabyBoomers),
    (3, Generation::GenX),
    (4, Generation::Millennials),
    (5, Generation::ZAndAlpha),
];

fn resolve(code: u8) -> Generation {
    DISPATCH
        .iter()
        .find(|(key, _)| *key == code)
        .map_or(Generation::Unclassified, |(_, generation)| *generation)
}

/// Classify by category code and table lookup.
#[must_use]
pub fn classify(year: BirthYear) -> Generation {
    resolve(Category::from_birth_year(year).code())
}
