use crate::common::file::write_lines;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn small_edit_dir(workspace_dir: TempDir) -> TempDir {
    write_lines(workspace_dir.path(), "old.txt", &["a", "cat"]);
    write_lines(workspace_dir.path(), "new.txt", &["a", "cot", "d"]);
    workspace_dir
}

#[fixture]
pub fn inserted_line_dir(workspace_dir: TempDir) -> TempDir {
    write_lines(
        workspace_dir.path(),
        "old.rs",
        &["fn main() {", "    run();", "}"],
    );
    write_lines(
        workspace_dir.path(),
        "new.rs",
        &["fn main() {", "    setup();", "    run();", "}"],
    );
    workspace_dir
}

pub fn run_sidediff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("sidediff").expect("Failed to find sidediff binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
