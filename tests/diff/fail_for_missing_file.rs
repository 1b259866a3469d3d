use crate::common::command::{run_lcsdiff_command, workspace_dir};
use crate::common::file::write_named;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_for_missing_file(workspace_dir: TempDir) {
    let old = write_named(workspace_dir.path(), "old.txt", "a\n");

    run_lcsdiff_command(workspace_dir.path(), &[&old, "missing.txt"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("lcsdiff: Failed to open missing.txt"));
}
