use crate::artifacts::core::fold;
use crate::artifacts::differ::{ColorizeDiffer, Differ, ReadableDiffer, UnifiedDiffer};
use crate::artifacts::writer::{ColorPalette, StringDiffWriter};

/// Lines longer than this (mark included) are worth folding.
pub const FOLD_THRESHOLD: usize = 80;

fn render(differ: &dyn Differ, mut writer: StringDiffWriter) -> String {
    differ.diff(&mut writer);
    writer.into_result()
}

/// Readable diff of two texts, see [`ReadableDiffer`].
///
/// ```
/// assert_eq!(
///     seqdiff::diff_readable("aaa\nabcdef", "aaa\nabcdeX"),
///     "  aaa\n- abcdef\n?      ^\n+ abcdeX\n?      ^"
/// );
/// ```
pub fn diff_readable(from: &str, to: &str) -> String {
    render(&ReadableDiffer::new(from, to), StringDiffWriter::new())
}

/// Readable diff of both texts after wrapping their long lines.
pub fn diff_readable_folded(from: &str, to: &str) -> String {
    diff_readable(&fold(from), &fold(to))
}

/// Unified diff of two texts labelled `from_label` and `to_label`; empty for identical texts.
pub fn diff_unified(from: &str, to: &str, from_label: &str, to_label: &str) -> String {
    let differ = UnifiedDiffer::new(from, to).with_labels(from_label, to_label);
    render(&differ, StringDiffWriter::new())
}

/// Colorized diff of two texts with the default palette always applied.
pub fn diff_colorized(from: &str, to: &str) -> String {
    render(
        &ColorizeDiffer::new(from, to),
        StringDiffWriter::with_palette(ColorPalette::default()),
    )
}

/// Whether a rendered readable diff is worth showing to a reader.
///
/// A diff without changed lines never is. One with changes is when it also carries context
/// or tag lines, or spans at least three lines.
pub fn is_interested(diff: &str) -> bool {
    let has_change = diff
        .split('\n')
        .any(|line| line.starts_with(['-', '+']));
    if !has_change {
        return false;
    }

    let has_context = diff
        .split('\n')
        .any(|line| line.starts_with([' ', '?']));
    has_context || diff.matches('\n').count() >= 2
}

/// Whether any changed line of a rendered diff is too long to read comfortably.
pub fn needs_fold(diff: &str) -> bool {
    diff.split('\n')
        .filter(|line| line.starts_with(['-', '+']))
        .any(|line| line.chars().count() >= FOLD_THRESHOLD)
}
