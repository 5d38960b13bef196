use crate::common::command::{
    commit_file, get_head_commit_sha, gitlet_checkout, gitlet_merge, init_repository_dir,
    run_gitlet_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_fast_forward(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "ahead"]).assert().success();
    gitlet_checkout(dir, "ahead");
    commit_file(dir, "ahead.txt", "ahead\n", "Move ahead");
    let ahead_tip = get_head_commit_sha(dir)?;
    gitlet_checkout(dir, "main");

    gitlet_merge(dir, "ahead")
        .assert()
        .success()
        .stdout("Current branch fast-forwarded.\n");

    assert_eq!(get_head_commit_sha(dir)?, ahead_tip);
    assert_eq!(
        std::fs::read_to_string(dir.join(".gitlet/HEAD"))?,
        "ref: refs/heads/main"
    );
    assert_eq!(read_file(&dir.join("ahead.txt")).as_deref(), Some("ahead\n"));

    Ok(())
}
