//! Diff data structures and algorithms
//!
//! This module contains the matching engine and everything that renders its output:
//!
//! - `core`: Shared text utilities (line splitting, display width, folding)
//! - `matcher`: Longest-match sequence matcher, match blocks and edit operations
//! - `differ`: Line-level differs (readable, colorized, unified)
//! - `writer`: Sinks receiving tagged diff fragments (string buffer, console)

pub mod core;
pub mod differ;
pub mod matcher;
pub mod writer;
