use crate::common::command::{init_repository_dir, run_gitlet_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(".hidden")]
#[case("two..dots")]
#[case("trailing/")]
#[case("ends.lock")]
#[case("has space")]
fn create_branch_with_invalid_name(init_repository_dir: TempDir, #[case] name: &str) {
    run_gitlet_command(init_repository_dir.path(), &["branch", name])
        .assert()
        .success()
        .stdout(format!("Invalid branch name: {name}\n"));

    assert!(!init_repository_dir
        .path()
        .join(".gitlet/refs/heads")
        .join(name)
        .is_file());
}
