use crate::common::command::{run_lcsdiff_command, stdout_of, workspace_dir};
use crate::common::file::write_named;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case::trimmed(&[])]
#[case::untrimmed(&["--no-trim"])]
fn show_trimmed_context_around_changed_middle(
    workspace_dir: TempDir,
    #[case] flags: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let old = write_named(workspace_dir.path(), "old.txt", "a\nm\nz\n");
    let new = write_named(workspace_dir.path(), "new.txt", "a\nn\nz\n");

    let mut args = flags.to_vec();
    args.extend([old.as_str(), new.as_str()]);
    let actual_output = stdout_of(&mut run_lcsdiff_command(workspace_dir.path(), &args), 1)?;

    pretty_assertions::assert_eq!(actual_output, "  a\n- m\n+ n\n  z\n");

    Ok(())
}
