use crate::common::command::{
    commit_file, gitlet_checkout, gitlet_merge, init_repository_dir, run_gitlet_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Test merging after a criss-cross
///
/// History:
///       A
///      / \
///     B   C
///     |\ /|
///     | X |
///     |/ \|
///     D   E
///     |   |
///     F   G
///     |   |
///   main  other
///
/// D and E both merged B and C, so B and C are both best common ancestors of F and G.
/// Either one makes the final merge clean.
#[rstest]
fn merge_criss_cross(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_gitlet_command(dir, &["branch", "other"]).assert().success();
    commit_file(dir, "1.txt", "one from B\n", "B");
    run_gitlet_command(dir, &["branch", "b"]).assert().success();

    gitlet_checkout(dir, "other");
    commit_file(dir, "a/2.txt", "two from C\n", "C");
    run_gitlet_command(dir, &["branch", "c"]).assert().success();

    // E = C + B
    gitlet_merge(dir, "b").assert().success().stdout("");

    // D = B + C
    gitlet_checkout(dir, "main");
    gitlet_merge(dir, "c").assert().success().stdout("");

    commit_file(dir, "main.txt", "F\n", "F");
    gitlet_checkout(dir, "other");
    commit_file(dir, "other.txt", "G\n", "G");
    gitlet_checkout(dir, "main");

    gitlet_merge(dir, "other").assert().success().stdout("");

    assert_eq!(read_file(&dir.join("1.txt")).as_deref(), Some("one from B\n"));
    assert_eq!(read_file(&dir.join("a/2.txt")).as_deref(), Some("two from C\n"));
    assert_eq!(read_file(&dir.join("main.txt")).as_deref(), Some("F\n"));
    assert_eq!(read_file(&dir.join("other.txt")).as_deref(), Some("G\n"));
}
