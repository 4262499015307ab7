use crate::artifacts::core::split_lines;
use crate::artifacts::matcher::{Group, MatchBlock, Operation, OperationKind};
use log::{debug, trace};
use std::cell::OnceCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Finds the matching blocks between two sequences and derives edit operations from them.
///
/// The search is greedy: the longest contiguous run of equal elements is located first,
/// then the same search is applied to the sub-ranges on either side of it. Elements flagged
/// by the optional junk predicate never start a match, but junk adjacent to a genuine match
/// is absorbed into it.
///
/// Every derived value is computed on first request and memoized, so the sequences are
/// owned and never change after construction.
///
/// ## Example
///
/// ```
/// use seqdiff::artifacts::matcher::{Operation, OperationKind, SequenceMatcher};
///
/// let matcher = SequenceMatcher::new(vec!["a", "b", "c"], vec!["a", "x", "c"]);
/// assert_eq!(
///     matcher.operations()[1],
///     Operation::new(OperationKind::Replace, 1, 2, 1, 2)
/// );
/// ```
#[derive(Debug)]
pub struct SequenceMatcher<T> {
    from: Vec<T>,
    to: Vec<T>,
    to_indexes: HashMap<T, Vec<usize>>,
    junks: HashSet<T>,
    matches: OnceCell<Vec<MatchBlock>>,
    matching_blocks: OnceCell<Vec<MatchBlock>>,
    operations: OnceCell<Vec<Operation>>,
    ratio: OnceCell<f64>,
}

impl<T> SequenceMatcher<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new(from: Vec<T>, to: Vec<T>) -> Self {
        Self::build(from, to, None)
    }

    pub fn with_junk_filter<F>(from: Vec<T>, to: Vec<T>, is_junk: F) -> Self
    where
        F: Fn(&T) -> bool,
    {
        let is_junk: &dyn Fn(&T) -> bool = &is_junk;
        Self::build(from, to, Some(is_junk))
    }

    fn build(from: Vec<T>, to: Vec<T>, is_junk: Option<&dyn Fn(&T) -> bool>) -> Self {
        let mut to_indexes: HashMap<T, Vec<usize>> = HashMap::new();
        for (index, element) in to.iter().enumerate() {
            to_indexes.entry(element.clone()).or_default().push(index);
        }

        let mut junks = HashSet::new();
        if let Some(is_junk) = is_junk {
            to_indexes.retain(|element, _| {
                if is_junk(element) {
                    junks.insert(element.clone());
                    false
                } else {
                    true
                }
            });
        }

        Self {
            from,
            to,
            to_indexes,
            junks,
            matches: OnceCell::new(),
            matching_blocks: OnceCell::new(),
            operations: OnceCell::new(),
            ratio: OnceCell::new(),
        }
    }

    pub fn from(&self) -> &[T] {
        &self.from
    }

    pub fn to(&self) -> &[T] {
        &self.to
    }

    /// Ascending positions of `element` in the `to` sequence. Junk elements have none.
    pub fn to_indexes(&self, element: &T) -> &[usize] {
        self.to_indexes
            .get(element)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_junk(&self, element: &T) -> bool {
        self.junks.contains(element)
    }

    fn is_junk_at(&self, to_index: usize) -> bool {
        self.is_junk(&self.to[to_index])
    }

    /// Longest run of equal elements inside `from[from_lo..from_hi]` and `to[to_lo..to_hi]`.
    ///
    /// Ties go to the run found first while scanning `from` left to right. A zero-size block
    /// at `(from_lo, to_lo)` means the ranges share nothing worth matching.
    pub fn find_longest_match(
        &self,
        from_lo: usize,
        from_hi: usize,
        to_lo: usize,
        to_hi: usize,
    ) -> MatchBlock {
        let from_hi = from_hi.min(self.from.len());
        let to_hi = to_hi.min(self.to.len());

        let mut best = self.find_best_match(from_lo, from_hi, to_lo, to_hi);
        if best.size > 0 && !self.junks.is_empty() {
            self.extend_match(&mut best, false, from_lo, from_hi, to_lo, to_hi);
            self.extend_match(&mut best, true, from_lo, from_hi, to_lo, to_hi);
        }

        trace!("longest match in {from_lo}..{from_hi} x {to_lo}..{to_hi}: {best:?}");
        best
    }

    fn find_best_match(
        &self,
        from_lo: usize,
        from_hi: usize,
        to_lo: usize,
        to_hi: usize,
    ) -> MatchBlock {
        let mut best = MatchBlock::new(from_lo, to_lo, 0);
        let mut previous_run_lengths: HashMap<usize, usize> = HashMap::new();

        for from_index in from_lo..from_hi {
            let mut current_run_lengths = HashMap::new();

            for &to_index in self.to_indexes(&self.from[from_index]) {
                if to_index < to_lo {
                    continue;
                }
                if to_index >= to_hi {
                    break;
                }

                let size = to_index
                    .checked_sub(1)
                    .and_then(|previous| previous_run_lengths.get(&previous))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                current_run_lengths.insert(to_index, size);

                if size > best.size {
                    best = MatchBlock::new(from_index + 1 - size, to_index + 1 - size, size);
                }
            }

            previous_run_lengths = current_run_lengths;
        }

        best
    }

    /// Grows `best` on both sides over equal elements whose junk status is `junk`.
    ///
    /// Growth towards the end stops one element short of `from_hi` and `to_hi`, so the last
    /// element of a sub-range is never absorbed.
    fn extend_match(
        &self,
        best: &mut MatchBlock,
        junk: bool,
        from_lo: usize,
        from_hi: usize,
        to_lo: usize,
        to_hi: usize,
    ) {
        while best.from_index > from_lo
            && best.to_index > to_lo
            && self.is_junk_at(best.to_index - 1) == junk
            && self.from[best.from_index - 1] == self.to[best.to_index - 1]
        {
            best.from_index -= 1;
            best.to_index -= 1;
            best.size += 1;
        }

        while best.from_end() + 1 < from_hi
            && best.to_end() + 1 < to_hi
            && self.is_junk_at(best.to_end()) == junk
            && self.from[best.from_end()] == self.to[best.to_end()]
        {
            best.size += 1;
        }
    }

    /// All matches, sorted by position, as found by repeatedly splitting around the longest one.
    pub fn matches(&self) -> &[MatchBlock] {
        self.matches.get_or_init(|| {
            let mut queue = VecDeque::from([(0, self.from.len(), 0, self.to.len())]);
            let mut matches = Vec::new();

            while let Some((from_lo, from_hi, to_lo, to_hi)) = queue.pop_front() {
                let block = self.find_longest_match(from_lo, from_hi, to_lo, to_hi);
                if block.size == 0 {
                    continue;
                }

                if from_lo < block.from_index && to_lo < block.to_index {
                    queue.push_back((from_lo, block.from_index, to_lo, block.to_index));
                }
                matches.push(block);
                if block.from_end() < from_hi && block.to_end() < to_hi {
                    queue.push_back((block.from_end(), from_hi, block.to_end(), to_hi));
                }
            }

            matches.sort_by_key(|block| (block.from_index, block.to_index));
            matches
        })
    }

    /// Matches with adjacent runs merged, terminated by a `(len(from), len(to), 0)` sentinel.
    pub fn matching_blocks(&self) -> &[MatchBlock] {
        self.matching_blocks.get_or_init(|| {
            let mut blocks: Vec<MatchBlock> = Vec::new();

            for block in self.matches() {
                match blocks.last_mut() {
                    Some(last) if last.is_followed_by(block) => last.size += block.size,
                    _ => blocks.push(*block),
                }
            }
            blocks.push(MatchBlock::new(self.from.len(), self.to.len(), 0));

            debug!(
                "{} matching blocks between {} and {} elements",
                blocks.len() - 1,
                self.from.len(),
                self.to.len()
            );
            blocks
        })
    }

    /// Edit operations tiling both sequences in ascending order.
    ///
    /// Two empty sequences yield a single empty `Equal`.
    pub fn operations(&self) -> &[Operation] {
        self.operations.get_or_init(|| {
            let mut operations = Vec::new();
            let (mut from_index, mut to_index) = (0, 0);

            for block in self.matching_blocks() {
                let gap = OperationKind::for_gap(
                    block.from_index - from_index,
                    block.to_index - to_index,
                );
                if let Some(kind) = gap {
                    operations.push(Operation::new(
                        kind,
                        from_index,
                        block.from_index,
                        to_index,
                        block.to_index,
                    ));
                }

                from_index = block.from_end();
                to_index = block.to_end();
                if block.size > 0 {
                    operations.push(Operation::equal(
                        block.from_index,
                        from_index,
                        block.to_index,
                        to_index,
                    ));
                }
            }

            if operations.is_empty() {
                operations.push(Operation::equal(0, 0, 0, 0));
            }

            operations
        })
    }

    /// Operations split into hunks with at most `context_size` equal elements around each change.
    ///
    /// The leading and trailing `Equal` are clipped to `context_size` at their far edge, and any
    /// inner `Equal` longer than twice the context ends one group and starts the next. Identical
    /// sequences yield exactly one group holding one `Equal`.
    pub fn grouped_operations(&self, context_size: usize) -> Vec<Group> {
        let mut operations = self.operations().to_vec();

        if let Some(first) = operations.first_mut()
            && first.is_equal()
        {
            first.from_begin = first.from_begin.max(first.from_end.saturating_sub(context_size));
            first.to_begin = first.to_begin.max(first.to_end.saturating_sub(context_size));
        }
        if let Some(last) = operations.last_mut()
            && last.is_equal()
        {
            last.from_end = last.from_end.min(last.from_begin.saturating_add(context_size));
            last.to_end = last.to_end.min(last.to_begin.saturating_add(context_size));
        }

        let mut groups = Vec::new();
        let mut group = Group::new();
        for mut operation in operations {
            if operation.is_equal() && operation.from_size() > context_size.saturating_mul(2) {
                group.push(Operation::equal(
                    operation.from_begin,
                    operation
                        .from_end
                        .min(operation.from_begin.saturating_add(context_size)),
                    operation.to_begin,
                    operation
                        .to_end
                        .min(operation.to_begin.saturating_add(context_size)),
                ));
                groups.push(std::mem::take(&mut group));

                operation.from_begin = operation
                    .from_begin
                    .max(operation.from_end.saturating_sub(context_size));
                operation.to_begin = operation
                    .to_begin
                    .max(operation.to_end.saturating_sub(context_size));
            }
            group.push(operation);
        }
        if !group.is_empty() {
            groups.push(group);
        }

        groups
    }

    /// Similarity in `[0, 1]`: twice the matched element count over the total length.
    pub fn ratio(&self) -> f64 {
        *self.ratio.get_or_init(|| {
            let length = self.from.len() + self.to.len();
            if length == 0 {
                return 1.0;
            }

            let matched = self.matches().iter().map(|block| block.size).sum::<usize>();
            2.0 * matched as f64 / length as f64
        })
    }
}

impl SequenceMatcher<char> {
    pub fn for_chars(from: &str, to: &str) -> Self {
        Self::new(from.chars().collect(), to.chars().collect())
    }

    pub fn for_chars_with_junk_filter<F>(from: &str, to: &str, is_junk: F) -> Self
    where
        F: Fn(&char) -> bool,
    {
        Self::with_junk_filter(from.chars().collect(), to.chars().collect(), is_junk)
    }
}

impl SequenceMatcher<String> {
    /// Line-level matcher over two texts split on `\r?\n`.
    pub fn for_lines(from: &str, to: &str) -> Self {
        Self::new(split_lines(from), split_lines(to))
    }
}
