use crate::artifacts::core::{compute_width, is_space_character};
use crate::artifacts::differ::readable::render_lines;
use crate::artifacts::differ::{DiffLines, Differ};
use crate::artifacts::matcher::{OperationKind, SequenceMatcher};
use crate::artifacts::writer::{DiffWriter, DiffWriterTag};
use log::debug;

/// Readable diff whose edited lines are merged into a single `? ` line with the changed
/// characters highlighted by the writer. When characters were replaced, a second `? ` line
/// carries the replacements under the text they replace.
///
/// Any pair of lines sharing a character is aligned, so the ratios are both zero.
#[derive(Debug)]
pub struct ColorizeDiffer {
    lines: DiffLines,
}

impl ColorizeDiffer {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            lines: DiffLines::new(from, to),
        }
    }
}

impl Differ for ColorizeDiffer {
    fn lines(&self) -> &DiffLines {
        &self.lines
    }

    fn best_ratio(&self) -> f64 {
        0.0
    }

    fn cut_off_ratio(&self) -> f64 {
        0.0
    }

    fn diff(&self, writer: &mut dyn DiffWriter) {
        debug!(
            "colorized diff of {} and {} lines",
            self.lines.from().len(),
            self.lines.to().len()
        );
        render_lines(self, writer, write_colorized_line_pair);
    }
}

/// Fragment held back for the second `? ` line.
enum PendingWrite<'l> {
    EqualSpaces(usize),
    DifferenceSpaces(usize),
    InsertedSegment(&'l str, usize, usize),
}

fn write_colorized_line_pair(writer: &mut dyn DiffWriter, from_line: &str, to_line: &str) {
    let matcher =
        SequenceMatcher::for_chars_with_junk_filter(from_line, to_line, is_space_character);
    let (from_chars, to_chars) = (matcher.from(), matcher.to());
    let has_replace = matcher
        .operations()
        .iter()
        .any(|operation| operation.kind == OperationKind::Replace);
    let mut pending = Vec::new();

    writer.write_mark("?", " ", DiffWriterTag::DifferenceMark);
    for operation in matcher.operations() {
        let from_width = compute_width(from_chars, operation.from_begin, operation.from_end);
        let to_width = compute_width(to_chars, operation.to_begin, operation.to_end);

        match operation.kind {
            OperationKind::Equal => {
                writer.write_segment(
                    from_line,
                    operation.from_begin,
                    operation.from_end,
                    DiffWriterTag::Equal,
                );
                if has_replace {
                    pending.push(PendingWrite::EqualSpaces(to_width));
                }
            }
            OperationKind::Insert if !has_replace => writer.write_segment(
                to_line,
                operation.to_begin,
                operation.to_end,
                DiffWriterTag::Inserted,
            ),
            OperationKind::Insert => {
                writer.write_character_n_times(' ', to_width, DiffWriterTag::Difference);
                pending.push(PendingWrite::InsertedSegment(
                    to_line,
                    operation.to_begin,
                    operation.to_end,
                ));
            }
            OperationKind::Delete => {
                writer.write_segment(
                    from_line,
                    operation.from_begin,
                    operation.from_end,
                    DiffWriterTag::Deleted,
                );
                if has_replace {
                    pending.push(PendingWrite::DifferenceSpaces(from_width));
                }
            }
            OperationKind::Replace => {
                writer.write_segment(
                    from_line,
                    operation.from_begin,
                    operation.from_end,
                    DiffWriterTag::Deleted,
                );
                if from_width < to_width {
                    writer.write_character_n_times(
                        ' ',
                        to_width - from_width,
                        DiffWriterTag::Difference,
                    );
                }

                pending.push(PendingWrite::InsertedSegment(
                    to_line,
                    operation.to_begin,
                    operation.to_end,
                ));
                if to_width < from_width {
                    pending.push(PendingWrite::DifferenceSpaces(from_width - to_width));
                }
            }
        }
    }
    writer.write_line("", DiffWriterTag::None);

    if pending.is_empty() {
        return;
    }

    writer.write_mark("?", " ", DiffWriterTag::DifferenceMark);
    for write in pending {
        match write {
            PendingWrite::EqualSpaces(width) => {
                writer.write_character_n_times(' ', width, DiffWriterTag::Equal)
            }
            PendingWrite::DifferenceSpaces(width) => {
                writer.write_character_n_times(' ', width, DiffWriterTag::Difference)
            }
            PendingWrite::InsertedSegment(line, begin, end) => {
                writer.write_segment(line, begin, end, DiffWriterTag::Inserted)
            }
        }
    }
    writer.write_line("", DiffWriterTag::None);
}
