use crate::common::command::{gitlet_add, repository_dir, run_gitlet_command, stdout_of};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_files_from_nested_directories(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_gitlet_command(dir, &["init"]).assert().success();

    let nested = dir.join("src").join("deep");
    let mut files = write_generated_files(&nested, 3);
    files.sort_by(|a, b| a.path.cmp(&b.path));

    for file in &files {
        let relative = file.path.strip_prefix(dir)?.to_string_lossy().to_string();
        gitlet_add(dir, &relative);
    }

    let staged = files
        .iter()
        .map(|file| format!("src/deep/{}\n", file.path.file_name().unwrap().to_string_lossy()))
        .collect::<String>();
    let status = stdout_of(&mut run_gitlet_command(dir, &["status"]));

    assert_eq!(
        status,
        format!(
            "=== Branches ===\n*main\n\n\
             === Staged Files ===\n{staged}\n\
             === Removed Files ===\n\n\
             === Modifications Not Staged For Commit ===\n\n\
             === Untracked Files ===\n\n"
        )
    );

    Ok(())
}
