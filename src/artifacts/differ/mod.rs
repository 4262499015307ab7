//! Line differs
//!
//! Every differ splits its two texts into lines, matches them with a lazily built
//! [`SequenceMatcher`] and renders the result into a [`DiffWriter`]:
//!
//! - `readable`: `-`/`+` lines with `?` tag lines pointing at changed columns
//! - `colorize`: like `readable`, with changed characters highlighted instead of tagged
//! - `unified`: `@@` hunks with a few lines of context

pub mod colorize;
pub mod readable;
pub mod unified;

pub use colorize::ColorizeDiffer;
pub use readable::ReadableDiffer;
pub use unified::UnifiedDiffer;

use crate::artifacts::core::{is_space_character, split_lines};
use crate::artifacts::matcher::{DEFAULT_CONTEXT_SIZE, Group, OperationKind, SequenceMatcher};
use crate::artifacts::writer::DiffWriter;
use clap::ValueEnum;
use std::cell::OnceCell;

/// Line pairs scoring at or below this ratio are never aligned character by character.
pub const DEFAULT_BEST_RATIO: f64 = 0.74;

/// Below this ratio a replaced region is shown as whole deleted and inserted lines.
pub const DEFAULT_CUT_OFF_RATIO: f64 = 0.75;

/// The two line sequences being compared and their line-level matcher.
#[derive(Debug)]
pub struct DiffLines {
    from: Vec<String>,
    to: Vec<String>,
    matcher: OnceCell<SequenceMatcher<String>>,
}

impl DiffLines {
    pub fn new(from: &str, to: &str) -> Self {
        Self::from_lines(split_lines(from), split_lines(to))
    }

    pub fn from_lines(from: Vec<String>, to: Vec<String>) -> Self {
        Self {
            from,
            to,
            matcher: OnceCell::new(),
        }
    }

    pub fn from(&self) -> &[String] {
        &self.from
    }

    pub fn to(&self) -> &[String] {
        &self.to
    }

    pub fn matcher(&self) -> &SequenceMatcher<String> {
        self.matcher
            .get_or_init(|| SequenceMatcher::new(self.from.clone(), self.to.clone()))
    }
}

/// Character-level similarity of two lines, spaces and tabs treated as junk.
pub fn line_ratio(from: &str, to: &str) -> f64 {
    SequenceMatcher::for_chars_with_junk_filter(from, to, is_space_character).ratio()
}

/// Whether `groups` is the single all-`Equal` group produced for identical inputs.
pub fn is_same_contents(groups: &[Group]) -> bool {
    match groups {
        [group] => match group.as_slice() {
            [operation] => {
                operation.is_equal() && operation.from_range() == operation.to_range()
            }
            _ => false,
        },
        _ => false,
    }
}

pub trait Differ {
    fn lines(&self) -> &DiffLines;

    /// Renders the diff and finishes the writer.
    fn diff(&self, writer: &mut dyn DiffWriter);

    fn best_ratio(&self) -> f64 {
        DEFAULT_BEST_RATIO
    }

    fn cut_off_ratio(&self) -> f64 {
        DEFAULT_CUT_OFF_RATIO
    }

    fn context_size(&self) -> usize {
        DEFAULT_CONTEXT_SIZE
    }

    /// False when both texts are identical and there is nothing to render.
    fn needs_diff(&self) -> bool {
        let groups = self
            .lines()
            .matcher()
            .grouped_operations(self.context_size());
        !is_same_contents(&groups)
    }

    /// Heuristic deciding whether a rendered diff would help a reader.
    ///
    /// True as soon as unchanged lines sit next to inserted or deleted ones, or when a replaced
    /// line resembles its replacement closely enough to be aligned character by character.
    fn is_worth_showing(&self) -> bool {
        let lines = self.lines();
        let best_ratio = self.best_ratio();
        let (mut has_equal, mut has_insert_or_delete) = (false, false);

        for operation in lines.matcher().operations() {
            match operation.kind {
                OperationKind::Equal => has_equal = true,
                OperationKind::Insert | OperationKind::Delete => has_insert_or_delete = true,
                OperationKind::Replace => {
                    let resembles = lines.from()[operation.from_range()].iter().any(|from| {
                        lines.to()[operation.to_range()]
                            .iter()
                            .any(|to| line_ratio(from, to) > best_ratio)
                    });
                    if resembles {
                        return true;
                    }
                }
            }

            if has_equal && has_insert_or_delete {
                return true;
            }
        }

        false
    }
}

/// Which renderer to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DifferKind {
    /// `-`/`+` lines with `?` lines marking changed columns
    #[default]
    Readable,
    /// Changed characters highlighted with ANSI colors
    Colorize,
    /// Unified diff hunks
    Unified,
}

/// Settings shared by every differ kind; each kind reads only what it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    pub context_size: usize,
    pub from_label: String,
    pub to_label: String,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context_size: DEFAULT_CONTEXT_SIZE,
            from_label: unified::DEFAULT_FROM_LABEL.to_string(),
            to_label: unified::DEFAULT_TO_LABEL.to_string(),
        }
    }
}

impl DifferKind {
    pub fn build(self, from: &str, to: &str, options: &DiffOptions) -> Box<dyn Differ> {
        match self {
            DifferKind::Readable => Box::new(ReadableDiffer::new(from, to)),
            DifferKind::Colorize => Box::new(ColorizeDiffer::new(from, to)),
            DifferKind::Unified => Box::new(
                UnifiedDiffer::new(from, to)
                    .with_labels(&options.from_label, &options.to_label)
                    .with_context_size(options.context_size),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::matcher::Operation;
    use crate::artifacts::writer::StringDiffWriter;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn matcher_is_built_once_from_split_lines() {
        let lines = DiffLines::new("a\nb\nc", "a\nx\nc");

        assert_eq!(lines.from(), &["a", "b", "c"]);
        assert!(std::ptr::eq(lines.matcher(), lines.matcher()));
        assert_eq!(
            lines.matcher().operations(),
            &[
                Operation::new(OperationKind::Equal, 0, 1, 0, 1),
                Operation::new(OperationKind::Replace, 1, 2, 1, 2),
                Operation::new(OperationKind::Equal, 2, 3, 2, 3),
            ]
        );
    }

    #[rstest]
    #[case("", "", false)]
    #[case("aaa", "aaa", false)]
    #[case("a\nb\nc\nd\ne", "a\nb\nc\nd\ne", false)]
    #[case("aaa", "aab", true)]
    #[case("", "aaa", true)]
    fn needs_diff_only_for_different_texts(
        #[case] from: &str,
        #[case] to: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(ReadableDiffer::new(from, to).needs_diff(), expected);
        assert_eq!(UnifiedDiffer::new(from, to).needs_diff(), expected);
    }

    #[rstest]
    #[case("aaa\nbbb", "aaa", true)]
    #[case("aaa", "bbb", false)]
    #[case("abc def ghi xyz", "abc DEF ghi xyz", true)]
    #[case("abcdefghij", "abcdefghiX", true)]
    #[case("aaa", "aaa", false)]
    fn worth_showing_when_changes_have_context_or_resemblance(
        #[case] from: &str,
        #[case] to: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(ReadableDiffer::new(from, to).is_worth_showing(), expected);
    }

    #[test]
    fn same_contents_requires_a_single_equal() {
        let equal = Operation::equal(0, 3, 0, 3);
        let insert = Operation::new(OperationKind::Insert, 3, 3, 3, 4);

        assert!(is_same_contents(&[vec![equal]]));
        assert!(!is_same_contents(&[vec![equal, insert]]));
        assert!(!is_same_contents(&[vec![equal], vec![equal]]));
        assert!(!is_same_contents(&[]));
    }

    #[rstest]
    #[case(DifferKind::Readable, "- a\n+ b")]
    #[case(DifferKind::Colorize, "- a\n+ b")]
    #[case(DifferKind::Unified, "--- old\n+++ new\n@@ -1 +1 @@\n-a\n+b")]
    fn kinds_build_their_differ(#[case] kind: DifferKind, #[case] expected: &str) {
        let options = DiffOptions {
            from_label: "old".to_string(),
            to_label: "new".to_string(),
            ..DiffOptions::default()
        };
        let differ = kind.build("a", "b", &options);
        let mut writer = StringDiffWriter::new();

        differ.diff(&mut writer);

        assert_eq!(writer.result(), expected);
    }
}
