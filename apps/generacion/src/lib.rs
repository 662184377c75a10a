//! # generacion
//!
//! Library half of the binary, exposed so integration tests can drive the
//! console flow with in-memory readers and writers.

pub mod cli;
