use crate::assert_diff_eq;
use crate::common::lines;
use rstest::rstest;
use seqdiff::{diff_readable, is_interested, needs_fold};

#[rstest]
#[case(&["  aaa"], "aaa", "aaa")]
#[case(&["  aaa", "  bbb"], "aaa\nbbb", "aaa\nbbb")]
#[case(&[""], "", "")]
fn same_contents_are_all_context(
    #[case] expected: &[&str],
    #[case] from: &str,
    #[case] to: &str,
) {
    assert_diff_eq!(diff_readable(from, to), lines(expected));
}

#[test]
fn inserted_lines() {
    assert_diff_eq!(
        diff_readable("aaa", "aaa\nbbb\nccc\nddd"),
        lines(&["  aaa", "+ bbb", "+ ccc", "+ ddd"])
    );
}

#[rstest]
#[case(&["  aaa", "- bbb"], "aaa\nbbb")]
#[case(&["  aaa", "- bbb", "- ccc", "- ddd"], "aaa\nbbb\nccc\nddd")]
fn deleted_lines(#[case] expected: &[&str], #[case] from: &str) {
    assert_diff_eq!(diff_readable(from, "aaa"), lines(expected));
}

#[test]
fn replaced_lines_are_paired_only_when_similar() {
    assert_diff_eq!(
        diff_readable("aaa\nbbb\nccc\nddd\nefg", "aaa\nBbB\nccc\neg"),
        lines(&[
            "  aaa", "- bbb", "+ BbB", "  ccc", "- ddd", "- efg", "?  -", "+ eg",
        ])
    );
}

#[test]
fn leading_space_removal_and_insertion_are_tagged() {
    assert_diff_eq!(
        diff_readable(" abcd xyz abc", "abcd abcd xyz abc"),
        lines(&[
            "-  abcd xyz abc",
            "? -",
            "+ abcd abcd xyz abc",
            "?      +++++",
        ])
    );
}

#[test]
fn changed_characters_are_marked_with_carets() {
    assert_diff_eq!(
        diff_readable(
            "1 tests, 0 assertions, 1 failures, 0 pendings",
            "1 tests, 0 assertions, 0 failures, 1 pendings"
        ),
        lines(&[
            "- 1 tests, 0 assertions, 1 failures, 0 pendings",
            "?                        ^           ^",
            "+ 1 tests, 0 assertions, 0 failures, 1 pendings",
            "?                        ^           ^",
        ])
    );
}

#[rstest]
#[case(
    &["  aaa", "- bbb", "- ccc", "+ ", "+   # ", "  ddd"],
    "aaa\nbbb\nccc\nddd",
    "aaa\n\n  # \nddd"
)]
#[case(
    &["- one1", "?  ^", "+ ore1", "?  ^", "- two2", "- three3", "?  -   -", "+ tree", "+ emu"],
    "one1\ntwo2\nthree3",
    "ore1\ntree\nemu"
)]
fn complex_replacements(#[case] expected: &[&str], #[case] from: &str, #[case] to: &str) {
    assert_diff_eq!(diff_readable(from, to), lines(expected));
}

#[test]
fn double_width_characters_take_two_columns() {
    assert_diff_eq!(
        diff_readable("あいうえおかきくけこ", "あいうえおカキくけこ"),
        lines(&[
            "- あいうえおかきくけこ",
            "?           ^^^^",
            "+ あいうえおカキくけこ",
            "?           ^^^^",
        ])
    );
}

#[test]
fn rendered_diffs_are_interesting_only_with_changes() {
    assert!(!is_interested(&diff_readable("aaa\nbbb", "aaa\nbbb")));
    assert!(is_interested(&diff_readable("aaa\nbbb", "aaa\nbbc")));
    assert!(is_interested(&diff_readable("aaa", "aaa\nbbb")));
}

#[test]
fn long_changed_lines_need_folding() {
    let long_line = "0123456789".repeat(8);

    assert!(!needs_fold(&diff_readable(&long_line, &long_line)));
    assert!(needs_fold(&diff_readable("aaa", &format!("aaa\n{long_line}"))));
}
