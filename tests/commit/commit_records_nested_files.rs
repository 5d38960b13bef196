use crate::common::command::{
    commit_file, get_head_commit_sha, init_repository_dir, run_gitlet_command,
};
use crate::common::file::{delete_path, read_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_records_nested_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = get_head_commit_sha(dir)?;

    commit_file(dir, "a/b/3.txt", "three\n", "Add 3");
    assert_ne!(get_head_commit_sha(dir)?, first);

    delete_path(&dir.join("a"));
    run_gitlet_command(dir, &["checkout", "--", "a/b/3.txt"])
        .assert()
        .success();
    run_gitlet_command(dir, &["checkout", "--", "a/2.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("a/b/3.txt")).as_deref(), Some("three\n"));
    assert_eq!(read_file(&dir.join("a/2.txt")).as_deref(), Some("two\n"));

    Ok(())
}
