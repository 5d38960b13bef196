use crate::common::command::{
    commit_file, gitlet_checkout, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_with_untracked_file_in_the_way(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "feature"]).assert().success();
    gitlet_checkout(dir, "feature");
    commit_file(dir, "clash.txt", "tracked\n", "Add clash");
    gitlet_checkout(dir, "main");

    write_file(FileSpec::new(dir.join("clash.txt"), "mine\n".to_string()));

    run_gitlet_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stdout("There is an untracked file in the way; delete it, or add and commit it first.\n");

    assert_eq!(read_file(&dir.join("clash.txt")).as_deref(), Some("mine\n"));
    assert_eq!(
        std::fs::read_to_string(dir.join(".gitlet/HEAD")).unwrap(),
        "ref: refs/heads/main"
    );
}
