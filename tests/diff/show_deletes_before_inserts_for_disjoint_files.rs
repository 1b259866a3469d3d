use crate::common::command::{run_lcsdiff_command, stdout_of, workspace_dir};
use crate::common::file::write_named;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("x\n", "y\n", "- x\n+ y\n")]
#[case("x\ny\n", "p\nq\n", "- x\n- y\n+ p\n+ q\n")]
fn show_deletes_before_inserts_for_disjoint_files(
    workspace_dir: TempDir,
    #[case] old_content: &str,
    #[case] new_content: &str,
    #[case] expected_output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let old = write_named(workspace_dir.path(), "old.txt", old_content);
    let new = write_named(workspace_dir.path(), "new.txt", new_content);

    let actual_output = stdout_of(
        &mut run_lcsdiff_command(workspace_dir.path(), &[&old, &new]),
        1,
    )?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
