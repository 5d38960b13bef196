use crate::common::command::{
    commit_file, gitlet_checkout, init_repository_dir, run_gitlet_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_branch_successfully(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "feature"])
        .assert()
        .success()
        .stdout("");
    gitlet_checkout(dir, "feature");
    commit_file(dir, "feature.txt", "feature\n", "Add feature");
    run_gitlet_command(dir, &["rm", "1.txt"]).assert().success();
    commit_file(dir, "a/2.txt", "two on feature\n", "Drop 1, edit 2");

    gitlet_checkout(dir, "main");

    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("one\n"));
    assert_eq!(read_file(&dir.join("a/2.txt")).as_deref(), Some("two\n"));
    assert_eq!(read_file(&dir.join("feature.txt")), None);

    run_gitlet_command(dir, &["checkout", "main"])
        .assert()
        .success()
        .stdout("No need to checkout the current branch.\n");
    run_gitlet_command(dir, &["checkout", "nowhere"])
        .assert()
        .success()
        .stdout("No such branch exists.\n");
}
