//! Baseline transpose and the correctness check.
//!
//! These are the reference points the blocked strategies are measured and
//! verified against.

pub mod check;
pub mod naive;
