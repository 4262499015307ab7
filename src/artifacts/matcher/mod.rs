//! Sequence matching
//!
//! - `match_block`: Matching blocks, edit operations and operation groups
//! - `sequence_matcher`: Longest-match search with junk filtering, memoized per matcher

pub mod match_block;
pub mod sequence_matcher;

pub use match_block::{Group, MatchBlock, Operation, OperationKind};
pub use sequence_matcher::SequenceMatcher;

/// Default number of context elements kept around a change when grouping operations.
pub const DEFAULT_CONTEXT_SIZE: usize = 3;
