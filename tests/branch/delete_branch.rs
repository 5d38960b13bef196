use crate::common::command::{init_repository_dir, run_gitlet_command, stdout_of};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn delete_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "feature/x"]).assert().success();
    run_gitlet_command(dir, &["rm-branch", "feature/x"])
        .assert()
        .success()
        .stdout("");

    // the now empty hierarchy is pruned
    assert!(!dir.join(".gitlet/refs/heads/feature").exists());

    run_gitlet_command(dir, &["rm-branch", "feature/x"])
        .assert()
        .success()
        .stdout("A branch with that name does not exist.\n");
    run_gitlet_command(dir, &["rm-branch", "main"])
        .assert()
        .success()
        .stdout("Cannot remove the current branch.\n");

    let status = stdout_of(&mut run_gitlet_command(dir, &["status"]));
    assert!(status.starts_with("=== Branches ===\n*main\n\n"));
}
