use crate::common::command::{run_lcsdiff_command, stdout_of, workspace_dir};
use crate::common::file::write_named;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_inserted_line_with_context(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let old = write_named(workspace_dir.path(), "old.txt", "a\nb\n");
    let new = write_named(workspace_dir.path(), "new.txt", "a\nc\nb\n");

    let actual_output = stdout_of(
        &mut run_lcsdiff_command(workspace_dir.path(), &[&old, &new]),
        1,
    )?;

    pretty_assertions::assert_eq!(actual_output, "  a\n+ c\n  b\n");

    Ok(())
}
