//! Diff writers
//!
//! Differs never build strings themselves: they emit text fragments tagged with their role
//! and a writer decides what to do with them.
//!
//! - `color`: Console colors, per-tag palettes and the color mode switch
//! - `string_writer`: Collects the diff into a `String`, optionally with ANSI escapes
//! - `console_writer`: Streams the diff to any `io::Write`, colorized per tag

pub mod color;
pub mod console_writer;
pub mod string_writer;

pub use color::{ColorMode, ColorPalette, ConsoleColor};
pub use console_writer::ConsoleDiffWriter;
pub use string_writer::StringDiffWriter;

use crate::artifacts::core::char_slice;
use anyhow::Context;
use std::fmt::Display;
use std::ops::Range;
use std::str::FromStr;

/// Role of a fragment in the rendered diff. Used only for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffWriterTag {
    None,
    EqualMark,
    DeletedMark,
    InsertedMark,
    DifferenceMark,
    Equal,
    Deleted,
    Inserted,
    Difference,
    Summary,
}

impl DiffWriterTag {
    pub const ALL: [DiffWriterTag; 10] = [
        DiffWriterTag::None,
        DiffWriterTag::EqualMark,
        DiffWriterTag::DeletedMark,
        DiffWriterTag::InsertedMark,
        DiffWriterTag::DifferenceMark,
        DiffWriterTag::Equal,
        DiffWriterTag::Deleted,
        DiffWriterTag::Inserted,
        DiffWriterTag::Difference,
        DiffWriterTag::Summary,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DiffWriterTag::None => "none",
            DiffWriterTag::EqualMark => "equal_mark",
            DiffWriterTag::DeletedMark => "deleted_mark",
            DiffWriterTag::InsertedMark => "inserted_mark",
            DiffWriterTag::DifferenceMark => "difference_mark",
            DiffWriterTag::Equal => "equal",
            DiffWriterTag::Deleted => "deleted",
            DiffWriterTag::Inserted => "inserted",
            DiffWriterTag::Difference => "difference",
            DiffWriterTag::Summary => "summary",
        }
    }
}

impl Display for DiffWriterTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DiffWriterTag {
    type Err = anyhow::Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name() == name)
            .with_context(|| format!("unknown diff writer tag: {name}"))
    }
}

/// Sink for tagged diff fragments.
///
/// Implementors provide `write`, `write_line` and `finish`; everything else is expressed in
/// terms of those three. Writing never fails from the differ's point of view: sinks that
/// perform I/O keep their errors and report them when the caller takes the sink back.
pub trait DiffWriter {
    fn write(&mut self, text: &str, tag: DiffWriterTag);

    /// Writes `line` followed by a line break.
    fn write_line(&mut self, line: &str, tag: DiffWriterTag);

    fn finish(&mut self);

    /// Writes the characters `begin..end` of `line`.
    fn write_segment(&mut self, line: &str, begin: usize, end: usize, tag: DiffWriterTag) {
        self.write(char_slice(line, begin, end), tag);
    }

    /// Writes a line mark followed by an untagged separator.
    fn write_mark(&mut self, mark: &str, separator: &str, tag: DiffWriterTag) {
        self.write(mark, tag);
        if !separator.is_empty() {
            self.write(separator, DiffWriterTag::None);
        }
    }

    fn mark_line(&mut self, mark: &str, separator: &str, line: &str, tag: DiffWriterTag) {
        self.write_mark(mark, separator, tag);
        self.write_line(line, tag);
    }

    fn write_lines(&mut self, lines: &[String], range: Range<usize>, tag: DiffWriterTag) {
        for line in &lines[range] {
            self.write_line(line, tag);
        }
    }

    fn mark_lines(
        &mut self,
        mark: &str,
        separator: &str,
        lines: &[String],
        range: Range<usize>,
        tag: DiffWriterTag,
    ) {
        for line in &lines[range] {
            self.mark_line(mark, separator, line, tag);
        }
    }

    fn write_character_n_times(&mut self, character: char, n: usize, tag: DiffWriterTag) {
        self.write(&character.to_string().repeat(n), tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[derive(Default)]
    struct RecordingWriter {
        fragments: Vec<(String, DiffWriterTag)>,
        finished: bool,
    }

    impl DiffWriter for RecordingWriter {
        fn write(&mut self, text: &str, tag: DiffWriterTag) {
            self.fragments.push((text.to_string(), tag));
        }

        fn write_line(&mut self, line: &str, tag: DiffWriterTag) {
            self.fragments.push((format!("{line}\n"), tag));
        }

        fn finish(&mut self) {
            self.finished = true;
        }
    }

    fn fragment(text: &str, tag: DiffWriterTag) -> (String, DiffWriterTag) {
        (text.to_string(), tag)
    }

    #[test]
    fn mark_line_writes_untagged_separator() {
        let mut writer = RecordingWriter::default();

        writer.mark_line("-", " ", "abc", DiffWriterTag::DeletedMark);

        assert_eq!(
            writer.fragments,
            vec![
                fragment("-", DiffWriterTag::DeletedMark),
                fragment(" ", DiffWriterTag::None),
                fragment("abc\n", DiffWriterTag::DeletedMark),
            ]
        );
    }

    #[test]
    fn empty_separator_is_skipped() {
        let mut writer = RecordingWriter::default();

        writer.mark_line("+", "", "abc", DiffWriterTag::InsertedMark);

        assert_eq!(
            writer.fragments,
            vec![
                fragment("+", DiffWriterTag::InsertedMark),
                fragment("abc\n", DiffWriterTag::InsertedMark),
            ]
        );
    }

    #[test]
    fn mark_lines_writes_only_the_requested_range() {
        let lines = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut writer = RecordingWriter::default();

        writer.mark_lines(" ", "", &lines, 1..3, DiffWriterTag::EqualMark);
        writer.write_lines(&lines, 0..1, DiffWriterTag::Equal);

        assert_eq!(
            writer.fragments,
            vec![
                fragment(" ", DiffWriterTag::EqualMark),
                fragment("b\n", DiffWriterTag::EqualMark),
                fragment(" ", DiffWriterTag::EqualMark),
                fragment("c\n", DiffWriterTag::EqualMark),
                fragment("a\n", DiffWriterTag::Equal),
            ]
        );
    }

    #[test]
    fn segments_and_repeated_characters() {
        let mut writer = RecordingWriter::default();

        writer.write_segment("あいうえお", 1, 3, DiffWriterTag::Deleted);
        writer.write_character_n_times('^', 3, DiffWriterTag::Difference);
        writer.finish();

        assert_eq!(
            writer.fragments,
            vec![
                fragment("いう", DiffWriterTag::Deleted),
                fragment("^^^", DiffWriterTag::Difference),
            ]
        );
        assert!(writer.finished);
    }

    #[rstest]
    #[case("deleted_mark", DiffWriterTag::DeletedMark)]
    #[case("summary", DiffWriterTag::Summary)]
    #[case("none", DiffWriterTag::None)]
    fn parse_tag_names(#[case] name: &str, #[case] expected: DiffWriterTag) -> anyhow::Result<()> {
        assert_eq!(name.parse::<DiffWriterTag>()?, expected);
        assert_eq!(expected.to_string(), name);
        Ok(())
    }

    #[test]
    fn unknown_tag_name_fails() {
        let error = "bogus".parse::<DiffWriterTag>().unwrap_err();

        assert_eq!(error.to_string(), "unknown diff writer tag: bogus");
    }
}
