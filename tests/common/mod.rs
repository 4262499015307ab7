#![allow(dead_code)]

pub mod command;

// Macro to compare rendered diffs, showing escapes and trailing spaces on failure
#[macro_export]
macro_rules! assert_diff_eq {
    ($actual:expr, $expected:expr) => {{
        let actual = $actual.to_string();
        let expected = $expected.to_string();
        if actual != expected {
            pretty_assertions::assert_eq!(
                format!("{actual:?}"),
                format!("{expected:?}"),
                "\n=== RENDERED DIFFS DIFFER ===\nactual:\n{}\nexpected:\n{}",
                actual,
                expected
            );
        }
    }};
}

/// Joins lines with `\n`, without a trailing newline.
pub fn lines(lines: &[&str]) -> String {
    lines.join("\n")
}
