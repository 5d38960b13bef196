use crate::common::command::{
    commit_file, get_head_commit_sha, init_repository_dir, run_gitlet_command, stdout_of,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn find_commits_by_message(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    commit_file(dir, "1.txt", "1\n", "Bump");
    let first = get_head_commit_sha(dir)?;
    commit_file(dir, "1.txt", "2\n", "Bump");
    let second = get_head_commit_sha(dir)?;

    let mut expected = vec![first, second];
    expected.sort();
    assert_eq!(
        stdout_of(&mut run_gitlet_command(dir, &["find", "Bump"])),
        format!("{}\n{}\n", expected[0], expected[1])
    );

    assert_eq!(
        stdout_of(&mut run_gitlet_command(dir, &["find", "initial commit"])).lines().count(),
        1
    );

    run_gitlet_command(dir, &["find", "Bum"])
        .assert()
        .success()
        .stdout("Found no commit with that message.\n");

    Ok(())
}
