use crate::assert_diff_eq;
use crate::common::lines;
use rstest::rstest;
use seqdiff::diff_unified;

fn unified(from: &str, to: &str) -> String {
    diff_unified(from, to, "from", "to")
}

#[rstest]
#[case("aaa", "aaa")]
#[case("aaa\nbbb", "aaa\nbbb")]
#[case("", "")]
fn same_contents_produce_nothing(#[case] from: &str, #[case] to: &str) {
    assert_diff_eq!(unified(from, to), "");
}

#[test]
fn inserted_lines() {
    assert_diff_eq!(
        unified("aaa", "aaa\nbbb\nccc\nddd"),
        lines(&["--- from", "+++ to", "@@ -1 +1,4 @@", " aaa", "+bbb", "+ccc", "+ddd"])
    );
}

#[test]
fn deleted_lines() {
    assert_diff_eq!(
        unified("aaa\nbbb\nccc\nddd", "aaa"),
        lines(&["--- from", "+++ to", "@@ -1,4 +1 @@", " aaa", "-bbb", "-ccc", "-ddd"])
    );
}

#[test]
fn replaced_lines() {
    assert_diff_eq!(
        unified("one\ntwo\nthree\nfour", "zero\none\nthre\nfour"),
        lines(&[
            "--- from", "+++ to", "@@ -1,4 +1,4 @@", "+zero", " one", "-two", "-three", "+thre",
            " four",
        ])
    );
}

#[test]
fn labels_name_both_sides() {
    assert_diff_eq!(
        diff_unified("a\nb\nc", "a\nB\nc", "old.txt", "new.txt"),
        lines(&["--- old.txt", "+++ new.txt", "@@ -1,3 +1,3 @@", " a", "-b", "+B", " c"])
    );
}
