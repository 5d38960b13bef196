use crate::common::command::{
    commit_file, get_head_commit_sha, gitlet_add, gitlet_merge, init_repository_dir,
    run_gitlet_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_ancestor_and_self(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "behind"]).assert().success();
    commit_file(dir, "1.txt", "newer\n", "Newer");
    let head = get_head_commit_sha(dir)?;

    gitlet_merge(dir, "behind")
        .assert()
        .success()
        .stdout("Given branch is an ancestor of the current branch.\n");
    gitlet_merge(dir, "main")
        .assert()
        .success()
        .stdout("Cannot merge a branch with itself.\n");
    gitlet_merge(dir, "missing")
        .assert()
        .success()
        .stdout("A branch with that name does not exist.\n");

    write_file(FileSpec::new(dir.join("1.txt"), "dirty\n".to_string()));
    gitlet_add(dir, "1.txt");
    gitlet_merge(dir, "behind")
        .assert()
        .success()
        .stdout("You have uncommitted changes.\n");

    assert_eq!(get_head_commit_sha(dir)?, head);
    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("dirty\n"));

    Ok(())
}
