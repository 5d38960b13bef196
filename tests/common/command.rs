use crate::common::COMMIT_DATE;
use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Initialized repository whose `main` holds one commit with `1.txt` and `a/2.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_gitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two\n".to_string(),
    ));

    gitlet_add(repository_dir.path(), "1.txt");
    gitlet_add(repository_dir.path(), "a/2.txt");
    gitlet_commit(repository_dir.path(), "Initial files")
        .assert()
        .success();

    repository_dir
}

pub fn run_gitlet_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitlet").expect("Failed to find gitlet binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.env_remove("GITLET_MERGE_BASE");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn gitlet_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_gitlet_command(dir, &["commit", message]);
    cmd.env("GITLET_COMMIT_DATE", COMMIT_DATE); // %Y-%m-%d %H:%M:%S %z
    cmd
}

pub fn gitlet_add(dir: &Path, file: &str) {
    run_gitlet_command(dir, &["add", file])
        .assert()
        .success()
        .stdout("");
}

pub fn gitlet_checkout(dir: &Path, branch: &str) {
    run_gitlet_command(dir, &["checkout", branch])
        .assert()
        .success()
        .stdout("");
}

pub fn gitlet_merge(dir: &Path, branch: &str) -> Command {
    let mut cmd = run_gitlet_command(dir, &["merge", branch]);
    cmd.env("GITLET_COMMIT_DATE", COMMIT_DATE);
    cmd
}

/// Write, add and commit a single file
pub fn commit_file(dir: &Path, path: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(path), content.to_string()));
    gitlet_add(dir, path);
    gitlet_commit(dir, message).assert().success().stdout("");
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is not UTF-8")
}

/// Get the commit the active branch points at
pub fn get_head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let head_path = dir.join(".gitlet").join("HEAD");
    let head_content = std::fs::read_to_string(head_path)?;

    let ref_path = head_content
        .trim()
        .strip_prefix("ref: ")
        .ok_or("HEAD is not a symbolic ref")?;
    let commit_sha = std::fs::read_to_string(dir.join(".gitlet").join(ref_path))?;

    Ok(commit_sha.trim().to_string())
}
