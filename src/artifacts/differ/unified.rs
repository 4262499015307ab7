use crate::artifacts::differ::{DiffLines, Differ, is_same_contents};
use crate::artifacts::matcher::{DEFAULT_CONTEXT_SIZE, Group, OperationKind};
use crate::artifacts::writer::{DiffWriter, DiffWriterTag};
use log::debug;
use std::ops::Range;

pub const DEFAULT_FROM_LABEL: &str = "from";
pub const DEFAULT_TO_LABEL: &str = "to";

/// Unified diff: a `---`/`+++` header followed by `@@` hunks of changed lines with
/// `context_size` unchanged lines around them. Identical texts produce no output at all.
#[derive(Debug)]
pub struct UnifiedDiffer {
    lines: DiffLines,
    from_label: String,
    to_label: String,
    context_size: usize,
}

impl UnifiedDiffer {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            lines: DiffLines::new(from, to),
            from_label: DEFAULT_FROM_LABEL.to_string(),
            to_label: DEFAULT_TO_LABEL.to_string(),
            context_size: DEFAULT_CONTEXT_SIZE,
        }
    }

    pub fn with_labels(self, from_label: &str, to_label: &str) -> Self {
        Self {
            from_label: from_label.to_string(),
            to_label: to_label.to_string(),
            ..self
        }
    }

    pub fn with_context_size(self, context_size: usize) -> Self {
        Self {
            context_size,
            ..self
        }
    }

    fn write_summary(&self, writer: &mut dyn DiffWriter, group: &Group) {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            return;
        };

        let summary = format!(
            "@@ -{} +{} @@",
            hunk_range(first.from_begin..last.from_end),
            hunk_range(first.to_begin..last.to_end)
        );
        writer.write_line(&summary, DiffWriterTag::Summary);
    }
}

/// One-based start of a hunk side, followed by its line count when that exceeds one.
fn hunk_range(range: Range<usize>) -> String {
    match range.len() {
        0 | 1 => format!("{}", range.start + 1),
        count => format!("{},{}", range.start + 1, count),
    }
}

impl Differ for UnifiedDiffer {
    fn lines(&self) -> &DiffLines {
        &self.lines
    }

    fn context_size(&self) -> usize {
        self.context_size
    }

    fn diff(&self, writer: &mut dyn DiffWriter) {
        let groups = self
            .lines
            .matcher()
            .grouped_operations(self.context_size);
        if is_same_contents(&groups) {
            writer.finish();
            return;
        }

        debug!("unified diff with {} hunks", groups.len());
        let (from, to) = (self.lines.from(), self.lines.to());
        writer.mark_line("---", " ", &self.from_label, DiffWriterTag::DeletedMark);
        writer.mark_line("+++", " ", &self.to_label, DiffWriterTag::InsertedMark);

        for group in &groups {
            self.write_summary(writer, group);

            for operation in group {
                match operation.kind {
                    OperationKind::Equal => writer.mark_lines(
                        " ",
                        "",
                        from,
                        operation.from_range(),
                        DiffWriterTag::EqualMark,
                    ),
                    OperationKind::Insert => writer.mark_lines(
                        "+",
                        "",
                        to,
                        operation.to_range(),
                        DiffWriterTag::InsertedMark,
                    ),
                    OperationKind::Delete => writer.mark_lines(
                        "-",
                        "",
                        from,
                        operation.from_range(),
                        DiffWriterTag::DeletedMark,
                    ),
                    OperationKind::Replace => {
                        writer.mark_lines(
                            "-",
                            "",
                            from,
                            operation.from_range(),
                            DiffWriterTag::DeletedMark,
                        );
                        writer.mark_lines(
                            "+",
                            "",
                            to,
                            operation.to_range(),
                            DiffWriterTag::InsertedMark,
                        );
                    }
                }
            }
        }

        writer.finish();
    }
}
