use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(&[], "Please enter a command.\n")]
#[case(&["push"], "No command with that name exists.\n")]
#[case(&["add"], "Incorrect operands.\n")]
#[case(&["add", "1.txt", "a/2.txt"], "Incorrect operands.\n")]
#[case(&["status", "extra"], "Incorrect operands.\n")]
#[case(&["checkout"], "Incorrect operands.\n")]
#[case(&["checkout", "main", "++", "1.txt"], "Incorrect operands.\n")]
#[case(&["commit"], "Please enter a commit message.\n")]
fn malformed_invocations_report_a_diagnostic(
    init_repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] expected: &str,
) {
    run_gitlet_command(init_repository_dir.path(), args)
        .assert()
        .success()
        .stdout(expected.to_string());
}
