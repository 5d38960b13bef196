use crate::common::command::{get_head_commit_sha, repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout("");

    let gitlet_dir = repository_dir.path().join(".gitlet");
    assert!(gitlet_dir.join("objects").is_dir());
    assert!(gitlet_dir.join("commits").is_dir());
    assert_eq!(
        std::fs::read_to_string(gitlet_dir.join("HEAD"))?,
        "ref: refs/heads/main"
    );

    let head = get_head_commit_sha(repository_dir.path())?;
    assert_eq!(head.len(), 40);

    // the initial commit is identical in every repository
    let other_dir = TempDir::new()?;
    run_gitlet_command(other_dir.path(), &["init"])
        .assert()
        .success();
    assert_eq!(get_head_commit_sha(other_dir.path())?, head);

    Ok(())
}
