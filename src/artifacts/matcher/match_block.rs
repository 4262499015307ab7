use derive_new::new;
use std::fmt::Display;
use std::ops::Range;

/// A run of `size` equal elements starting at `from_index` in one sequence and `to_index`
/// in the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct MatchBlock {
    pub from_index: usize,
    pub to_index: usize,
    pub size: usize,
}

impl MatchBlock {
    pub fn from_end(&self) -> usize {
        self.from_index + self.size
    }

    pub fn to_end(&self) -> usize {
        self.to_index + self.size
    }

    /// Whether `next` starts exactly where this block ends in both sequences.
    pub fn is_followed_by(&self, next: &MatchBlock) -> bool {
        self.from_end() == next.from_index && self.to_end() == next.to_index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Equal,
    Insert,
    Delete,
    Replace,
}

impl OperationKind {
    /// Kind of the operation filling a gap of the given sizes, `None` for an empty gap.
    pub fn for_gap(from_size: usize, to_size: usize) -> Option<Self> {
        match (from_size > 0, to_size > 0) {
            (true, true) => Some(OperationKind::Replace),
            (true, false) => Some(OperationKind::Delete),
            (false, true) => Some(OperationKind::Insert),
            (false, false) => None,
        }
    }

    pub fn mirrored(&self) -> Self {
        match self {
            OperationKind::Insert => OperationKind::Delete,
            OperationKind::Delete => OperationKind::Insert,
            kind => *kind,
        }
    }
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OperationKind::Equal => "equal",
            OperationKind::Insert => "insert",
            OperationKind::Delete => "delete",
            OperationKind::Replace => "replace",
        };
        write!(f, "{name}")
    }
}

/// One edit step over the half-open ranges `from_begin..from_end` and `to_begin..to_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Operation {
    pub kind: OperationKind,
    pub from_begin: usize,
    pub from_end: usize,
    pub to_begin: usize,
    pub to_end: usize,
}

impl Operation {
    pub fn equal(from_begin: usize, from_end: usize, to_begin: usize, to_end: usize) -> Self {
        Self::new(OperationKind::Equal, from_begin, from_end, to_begin, to_end)
    }

    pub fn is_equal(&self) -> bool {
        self.kind == OperationKind::Equal
    }

    pub fn from_range(&self) -> Range<usize> {
        self.from_begin..self.from_end
    }

    pub fn to_range(&self) -> Range<usize> {
        self.to_begin..self.to_end
    }

    pub fn from_size(&self) -> usize {
        self.from_end - self.from_begin
    }

    /// The same step seen from the other side: ranges swapped, inserts and deletes exchanged.
    pub fn mirrored(&self) -> Self {
        Self::new(
            self.kind.mirrored(),
            self.to_begin,
            self.to_end,
            self.from_begin,
            self.from_end,
        )
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({}..{}, {}..{})",
            self.kind, self.from_begin, self.from_end, self.to_begin, self.to_end
        )
    }
}

/// Context-clipped run of operations rendered as one hunk.
pub type Group = Vec<Operation>;
