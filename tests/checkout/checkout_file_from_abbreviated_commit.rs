use crate::common::command::{
    commit_file, get_head_commit_sha, init_repository_dir, run_gitlet_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_file_from_abbreviated_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = get_head_commit_sha(dir)?;
    commit_file(dir, "1.txt", "uno\n", "Translate 1");

    run_gitlet_command(dir, &["checkout", &first[..6], "--", "1.txt"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("one\n"));

    run_gitlet_command(dir, &["checkout", &first[..6], "--", "nope.txt"])
        .assert()
        .success()
        .stdout("File does not exist in that commit.\n");
    run_gitlet_command(dir, &["checkout", "fffffff", "--", "1.txt"])
        .assert()
        .success()
        .stdout("No commit with that id exists.\n");
    // shorter than the minimum abbreviation
    run_gitlet_command(dir, &["checkout", &first[..3], "--", "1.txt"])
        .assert()
        .success()
        .stdout("No commit with that id exists.\n");

    Ok(())
}
