use crate::artifacts::core::{compute_width, is_space_character};
use crate::artifacts::differ::{DiffLines, Differ, line_ratio};
use crate::artifacts::matcher::{OperationKind, SequenceMatcher};
use crate::artifacts::writer::{DiffWriter, DiffWriterTag};
use log::debug;
use std::ops::Range;

/// Renders one aligned line pair. Each line-based differ plugs its own into [`render_lines`].
pub(crate) type LinePairRenderer = fn(&mut dyn DiffWriter, &str, &str);

/// Plain-text diff: unchanged lines prefixed with two spaces, removed lines with `- `, added
/// lines with `+ `. Lines that were edited rather than replaced are followed by a `? ` line
/// pointing at the changed columns.
///
/// ```text
/// - 1 tests, 0 assertions, 1 failures, 0 pendings
/// ?                        ^           ^
/// + 1 tests, 0 assertions, 0 failures, 1 pendings
/// ?                        ^           ^
/// ```
#[derive(Debug)]
pub struct ReadableDiffer {
    lines: DiffLines,
}

impl ReadableDiffer {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            lines: DiffLines::new(from, to),
        }
    }
}

impl Differ for ReadableDiffer {
    fn lines(&self) -> &DiffLines {
        &self.lines
    }

    fn diff(&self, writer: &mut dyn DiffWriter) {
        debug!(
            "readable diff of {} and {} lines",
            self.lines.from().len(),
            self.lines.to().len()
        );
        render_lines(self, writer, write_tagged_line_pair);
    }
}

/// Walks the line operations of `differ`, pairing up lines inside replaced regions.
pub(crate) fn render_lines(
    differ: &dyn Differ,
    writer: &mut dyn DiffWriter,
    render_pair: LinePairRenderer,
) {
    let lines = differ.lines();
    let pairing = LinePairing {
        from: lines.from(),
        to: lines.to(),
        best_ratio: differ.best_ratio(),
        cut_off_ratio: differ.cut_off_ratio(),
        render_pair,
    };

    for operation in lines.matcher().operations() {
        match operation.kind {
            OperationKind::Equal => mark_equal(writer, lines.from(), operation.from_range()),
            OperationKind::Insert => mark_inserted(writer, lines.to(), operation.to_range()),
            OperationKind::Delete => mark_deleted(writer, lines.from(), operation.from_range()),
            OperationKind::Replace => {
                pairing.diff_lines(writer, operation.from_range(), operation.to_range())
            }
        }
    }

    writer.finish();
}

struct LinePairing<'d> {
    from: &'d [String],
    to: &'d [String],
    best_ratio: f64,
    cut_off_ratio: f64,
    render_pair: LinePairRenderer,
}

impl LinePairing<'_> {
    /// Picks the most similar line pair of a replaced region, renders it, and recurses on the
    /// lines before and after it. Regions without a similar enough pair are shown whole, the
    /// shorter side first.
    fn diff_lines(&self, writer: &mut dyn DiffWriter, from: Range<usize>, to: Range<usize>) {
        let mut equal_pair = None;
        let mut best_pair = None;
        let mut best_ratio = self.best_ratio;

        for to_index in to.clone() {
            for from_index in from.clone() {
                let (from_line, to_line) = (&self.from[from_index], &self.to[to_index]);
                if from_line == to_line {
                    equal_pair.get_or_insert((from_index, to_index));
                    continue;
                }

                let ratio = line_ratio(from_line, to_line);
                if ratio > best_ratio {
                    best_ratio = ratio;
                    best_pair = Some((from_index, to_index));
                }
            }
        }

        let (from_best, to_best) = match (best_pair, equal_pair) {
            (Some(pair), _) if best_ratio >= self.cut_off_ratio => pair,
            (_, Some(pair)) => pair,
            _ => {
                if to.len() < from.len() {
                    mark_inserted(writer, self.to, to);
                    mark_deleted(writer, self.from, from);
                } else {
                    mark_deleted(writer, self.from, from);
                    mark_inserted(writer, self.to, to);
                }
                return;
            }
        };

        self.mark_region(writer, from.start..from_best, to.start..to_best);
        (self.render_pair)(writer, &self.from[from_best], &self.to[to_best]);
        self.mark_region(writer, from_best + 1..from.end, to_best + 1..to.end);
    }

    fn mark_region(&self, writer: &mut dyn DiffWriter, from: Range<usize>, to: Range<usize>) {
        match (from.is_empty(), to.is_empty()) {
            (false, false) => self.diff_lines(writer, from, to),
            (false, true) => mark_deleted(writer, self.from, from),
            (true, _) => mark_inserted(writer, self.to, to),
        }
    }
}

fn mark_equal(writer: &mut dyn DiffWriter, lines: &[String], range: Range<usize>) {
    writer.mark_lines(" ", " ", lines, range, DiffWriterTag::EqualMark);
}

fn mark_inserted(writer: &mut dyn DiffWriter, lines: &[String], range: Range<usize>) {
    writer.mark_lines("+", " ", lines, range, DiffWriterTag::InsertedMark);
}

fn mark_deleted(writer: &mut dyn DiffWriter, lines: &[String], range: Range<usize>) {
    writer.mark_lines("-", " ", lines, range, DiffWriterTag::DeletedMark);
}

fn mark_difference(writer: &mut dyn DiffWriter, tags: &str) {
    writer.mark_line("?", " ", tags, DiffWriterTag::DifferenceMark);
}

fn write_tagged_line_pair(writer: &mut dyn DiffWriter, from_line: &str, to_line: &str) {
    let matcher =
        SequenceMatcher::for_chars_with_junk_filter(from_line, to_line, is_space_character);
    let (from_chars, to_chars) = (matcher.from(), matcher.to());
    let (mut from_tags, mut to_tags) = (String::new(), String::new());

    for operation in matcher.operations() {
        let from_width = compute_width(from_chars, operation.from_begin, operation.from_end);
        let to_width = compute_width(to_chars, operation.to_begin, operation.to_end);

        match operation.kind {
            OperationKind::Equal => {
                from_tags.push_str(&" ".repeat(from_width));
                to_tags.push_str(&" ".repeat(to_width));
            }
            OperationKind::Insert => to_tags.push_str(&"+".repeat(to_width)),
            OperationKind::Delete => from_tags.push_str(&"-".repeat(from_width)),
            OperationKind::Replace => {
                from_tags.push_str(&"^".repeat(from_width));
                to_tags.push_str(&"^".repeat(to_width));
            }
        }
    }

    writer.mark_line("-", " ", from_line, DiffWriterTag::DeletedMark);
    let from_tags = from_tags.trim_end_matches(' ');
    if !from_tags.is_empty() {
        mark_difference(writer, from_tags);
    }

    writer.mark_line("+", " ", to_line, DiffWriterTag::InsertedMark);
    let to_tags = to_tags.trim_end_matches(' ');
    if !to_tags.is_empty() {
        mark_difference(writer, to_tags);
    }
}
