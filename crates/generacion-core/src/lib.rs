//! # generacion-core
//!
//! Generational cohort classification - THE LOGIC.
//!
//! Given an age, this crate derives a birth year and places it in one of six
//! generational buckets. The mapping is implemented three times, as
//! independent conditions, as a conditional chain and as a table dispatch,
//! and all three are run on every classification.
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no I/O, no logging, no async
//! - Integer arithmetic only
//! - Exactly one bucket per birth year

// =============================================================================
// MODULES
// =============================================================================

pub mod primitives;
pub mod report;
pub mod strategies;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use primitives::{AGE_PROMPT, CURRENT_YEAR};
pub use report::ClassificationReport;
pub use strategies::Strategy;
pub use types::{Age, BirthYear, GeneracionError, Generation};
