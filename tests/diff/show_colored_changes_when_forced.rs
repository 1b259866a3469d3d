use crate::common::command::{run_lcsdiff_command, stdout_of, workspace_dir};
use crate::common::file::write_named;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_colored_changes_when_forced(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let old = write_named(workspace_dir.path(), "old.txt", "a\nm\n");
    let new = write_named(workspace_dir.path(), "new.txt", "a\nn\n");

    let colored = stdout_of(
        &mut run_lcsdiff_command(workspace_dir.path(), &["--color", "always", &old, &new]),
        1,
    )?;
    assert!(colored.starts_with("  a\n"));
    assert!(colored.contains("\u{1b}[31m- m\u{1b}[0m\n"));
    assert!(colored.contains("\u{1b}[32m+ n\u{1b}[0m\n"));

    // piped output is plain unless color is forced
    let plain = stdout_of(
        &mut run_lcsdiff_command(workspace_dir.path(), &[&old, &new]),
        1,
    )?;
    pretty_assertions::assert_eq!(plain, "  a\n- m\n+ n\n");

    Ok(())
}
