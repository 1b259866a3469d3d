use crate::common::command::{run_lcsdiff_command, stdout_of, workspace_dir};
use crate::common::file::write_named;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_all_inserts_for_empty_old_file(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let old = write_named(workspace_dir.path(), "old.txt", "");
    let new = write_named(workspace_dir.path(), "new.txt", "p\n");

    let actual_output = stdout_of(
        &mut run_lcsdiff_command(workspace_dir.path(), &[&old, &new]),
        1,
    )?;
    pretty_assertions::assert_eq!(actual_output, "+ p\n");

    // and the other way around
    let actual_output = stdout_of(
        &mut run_lcsdiff_command(workspace_dir.path(), &[&new, &old]),
        1,
    )?;
    pretty_assertions::assert_eq!(actual_output, "- p\n");

    // two empty files are identical
    let actual_output = stdout_of(
        &mut run_lcsdiff_command(workspace_dir.path(), &[&old, &old]),
        0,
    )?;
    pretty_assertions::assert_eq!(actual_output, "");

    Ok(())
}
