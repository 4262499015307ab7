//! Sequence diffing and diff rendering
//!
//! The crate is split into two layers:
//!
//! - `artifacts`: the matching engine, the differs built on top of it and the writers they emit to
//! - `commands`: string-in, string-out entry points for callers that only want the rendered text

pub mod artifacts;
pub mod commands;

pub use commands::diff::{
    diff_colorized, diff_readable, diff_readable_folded, diff_unified, is_interested, needs_fold,
};
