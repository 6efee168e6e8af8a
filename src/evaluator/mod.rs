// src/evaluator/mod.rs

//! Post-crash region evaluation.
//!
//! Core API: `evaluate_region(reader, &key, offset, length)?` returns a
//! [`RegionEvaluation`] listing invalid blocks, counter discontinuities and
//! pass wraparounds.

pub(crate) mod report;
pub(crate) mod scan;

pub use report::{Finding, RegionEvaluation};
pub use scan::evaluate_region;
