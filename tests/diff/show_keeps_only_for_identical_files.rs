use crate::common::command::{run_lcsdiff_command, stdout_of, workspace_dir};
use crate::common::file::{write_generated_lines, write_named};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_keeps_only_for_identical_files(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let (old, lines) = write_generated_lines(workspace_dir.path(), "old.txt", 12);
    let new = write_named(
        workspace_dir.path(),
        "new.txt",
        &lines.iter().map(|line| format!("{line}\n")).collect::<String>(),
    );

    let expected_output = lines
        .iter()
        .map(|line| format!("  {line}\n"))
        .collect::<String>();
    let actual_output = stdout_of(
        &mut run_lcsdiff_command(workspace_dir.path(), &[&old, &new]),
        0,
    )?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}
