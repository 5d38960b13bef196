use crate::common::command::{gitlet_add, init_repository_dir, run_gitlet_command};
use crate::common::file::{FileSpec, delete_path, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_modified_and_deleted_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("1.txt"), "changed\n".to_string()));
    delete_path(&dir.join("a/2.txt"));
    write_file(FileSpec::new(dir.join("staged.txt"), "v1\n".to_string()));
    gitlet_add(dir, "staged.txt");
    write_file(FileSpec::new(dir.join("staged.txt"), "v2\n".to_string()));
    write_file(FileSpec::new(dir.join("b/loose.txt"), "?\n".to_string()));

    run_gitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(
            "=== Branches ===\n*main\n\n\
             === Staged Files ===\nstaged.txt\n\n\
             === Removed Files ===\n\n\
             === Modifications Not Staged For Commit ===\n\
             1.txt (modified)\n\
             a/2.txt (deleted)\n\
             staged.txt (modified)\n\n\
             === Untracked Files ===\nb/loose.txt\n\n",
        );
}
