use crate::common::command::{
    commit_file, get_head_commit_sha, gitlet_checkout, gitlet_merge, init_repository_dir,
    run_gitlet_command, stdout_of,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Test merging with simple divergent branches
///
/// History:
///       A (base)
///      / \
///     B   C
///     |   |
///   main  feature
///
/// Expected: a merge commit with B and C as parents holding the changes of both sides
#[rstest]
fn merge_simple_divergence(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "feature"]).assert().success();
    commit_file(dir, "1.txt", "one on main\n", "Commit B - main changes");
    let main_tip = get_head_commit_sha(dir)?;

    gitlet_checkout(dir, "feature");
    write_and_commit_feature(dir);
    let feature_tip = get_head_commit_sha(dir)?;
    gitlet_checkout(dir, "main");

    gitlet_merge(dir, "feature").assert().success().stdout("");

    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("one on main\n"));
    assert_eq!(read_file(&dir.join("a/2.txt")).as_deref(), Some("two on feature\n"));
    assert_eq!(read_file(&dir.join("feature.txt")).as_deref(), Some("new\n"));

    let log = stdout_of(&mut run_gitlet_command(dir, &["log"]));
    let merge_entry = log.split("===\n").nth(1).unwrap_or_default();
    let merge_oid = get_head_commit_sha(dir)?;
    assert_eq!(
        merge_entry,
        format!(
            "commit {merge_oid}\nMerge: {} {}\nDate: Sun Jan 1 12:00:00 2023 +0000\nMerged feature into main.\n\n",
            &main_tip[..7],
            &feature_tip[..7]
        )
    );

    // the merge left nothing staged behind
    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicates::str::contains("=== Staged Files ===\n\n"));

    Ok(())
}

fn write_and_commit_feature(dir: &std::path::Path) {
    commit_file(dir, "a/2.txt", "two on feature\n", "Commit C - feature changes");
    commit_file(dir, "feature.txt", "new\n", "Commit D - feature file");
}
