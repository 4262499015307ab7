//! Caller-facing diff entry points
//!
//! - `diff`: render two texts into a diff string and inspect rendered diffs
//!
//! These are thin compositions of a differ from `artifacts::differ` with a string writer,
//! for callers that only need the final text.

pub mod diff;
