use crate::common::command::{
    commit_file, get_head_commit_sha, gitlet_checkout, init_repository_dir, run_gitlet_command,
    stdout_of,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_global_log_across_branches(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "side"]).assert().success();
    gitlet_checkout(dir, "side");
    commit_file(dir, "side.txt", "side\n", "Side work");
    let side = get_head_commit_sha(dir)?;
    gitlet_checkout(dir, "main");

    let log = stdout_of(&mut run_gitlet_command(dir, &["log"]));
    assert!(!log.contains(&side));

    let global_log = stdout_of(&mut run_gitlet_command(dir, &["global-log"]));
    assert!(global_log.contains(&format!("commit {side}\n")));
    assert_eq!(global_log.matches("===\n").count(), 3);

    Ok(())
}
