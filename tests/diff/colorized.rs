use crate::assert_diff_eq;
use crate::common::lines;
use seqdiff::diff_colorized;

const RESET: &str = "\x1b[00m";

fn painted(code: &str, text: &str) -> String {
    format!("\x1b[{code}m{text}{RESET}")
}

#[test]
fn unchanged_lines_stay_plain() {
    assert_diff_eq!(diff_colorized("aaa\nbbb", "aaa\nbbb"), lines(&["  aaa", "  bbb"]));
}

#[test]
fn inserted_lines_are_green() {
    assert_diff_eq!(
        diff_colorized("aaa", "aaa\nbbb"),
        lines(&[
            "  aaa",
            &format!("{} {}", painted("01;32", "+"), painted("01;32", "bbb")),
        ])
    );
}

#[test]
fn inserted_characters_are_highlighted_in_place() {
    assert_diff_eq!(
        diff_colorized("aaa\nabc def", "aaa\nabc xyz def"),
        lines(&[
            "  aaa",
            &format!("{} abc {}def", painted("01;36", "?"), painted("01;37;42", "xyz ")),
        ])
    );
}

#[test]
fn deleted_characters_are_highlighted_in_place() {
    assert_diff_eq!(
        diff_colorized("abc xyz def", "abc def"),
        format!("{} abc {}def", painted("01;36", "?"), painted("01;37;41", "xyz "))
    );
}
