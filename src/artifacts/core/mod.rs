//! Core utilities and shared types
//!
//! Text helpers shared by the matcher, the differs and the caller-facing commands.

use unicode_width::UnicodeWidthChar;

/// Display width of a tab when aligning tag lines.
pub const TAB_WIDTH: usize = 8;

/// Maximum number of characters per line produced by [`fold`].
pub const FOLD_WIDTH: usize = 78;

/// Splits a text into lines on `\r?\n`.
///
/// An empty text has no lines at all, while a trailing line break yields a
/// trailing empty line: `"a\n"` splits into `["a", ""]`.
pub fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = text.split('\n').map(str::to_string).collect::<Vec<_>>();
    let last = lines.len() - 1;
    for line in &mut lines[..last] {
        if line.ends_with('\r') {
            line.pop();
        }
    }

    lines
}

/// Junk predicate used for character-level matching inside a line pair.
pub fn is_space_character(character: &char) -> bool {
    matches!(character, ' ' | '\t')
}

/// Columns taken by `character` when aligning tag lines: [`TAB_WIDTH`] for a tab, 2 for wide,
/// fullwidth and East Asian ambiguous characters, 1 for everything else.
pub fn character_width(character: char) -> usize {
    if character == '\t' {
        return TAB_WIDTH;
    }

    match character.width_cjk() {
        Some(width) if width >= 2 => 2,
        _ => 1,
    }
}

/// Display width of `chars[begin..end]`.
pub fn compute_width(chars: &[char], begin: usize, end: usize) -> usize {
    chars[begin..end]
        .iter()
        .copied()
        .map(character_width)
        .sum()
}

/// Returns the substring between two character offsets.
pub fn char_slice(text: &str, begin: usize, end: usize) -> &str {
    let byte_offset = |offset: usize| {
        text.char_indices()
            .nth(offset)
            .map_or(text.len(), |(index, _)| index)
    };

    &text[byte_offset(begin)..byte_offset(end)]
}

/// Wraps every line of `text` into chunks of at most [`FOLD_WIDTH`] characters.
pub fn fold(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let chars = line.chars().collect::<Vec<_>>();
            if chars.len() <= FOLD_WIDTH {
                return line.to_string();
            }

            chars
                .chunks(FOLD_WIDTH)
                .map(|chunk| chunk.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
