use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::{ChildPath, FileWriteStr, PathChild};
use rstest::fixture;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn write_file(dir: &TempDir, name: &str, content: &str) -> ChildPath {
    let file = dir.child(name);
    file.write_str(content).expect("Failed to write file");
    file
}

/// Runs `seqdiff` inside `dir` without any color settings inherited from the environment.
pub fn run_seqdiff(dir: &TempDir, args: &[&str]) -> Command {
    let mut command = Command::cargo_bin("seqdiff").expect("Failed to find seqdiff binary");
    command
        .current_dir(dir.path())
        .env_remove("SEQDIFF_COLORS")
        .env_remove("NO_COLOR")
        .args(args);
    command
}
