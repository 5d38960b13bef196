//! Repository fixture for command tests: a temporary working directory, a fixed
//! commit date and a writer whose output can be inspected.

use crate::areas::repository::Repository;
use crate::artifacts::core::config::Config;
use crate::artifacts::objects::object_id::ObjectId;
use assert_fs::TempDir;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

pub const COMMIT_DATE: &str = "2024-03-01 12:00:00 +0000";

#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.borrow_mut());
        String::from_utf8(bytes).expect("output is not UTF-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub struct TestRepository {
    pub dir: TempDir,
    pub repository: Repository,
    output: SharedBuffer,
}

impl TestRepository {
    /// Uninitialized repository over a fresh directory
    pub fn new(config: Config) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let output = SharedBuffer::default();
        let repository = Repository::new(dir.path(), Box::new(output.clone()), config)
            .expect("failed to open repository");

        TestRepository {
            dir,
            repository,
            output,
        }
    }

    pub async fn init() -> Self {
        Self::init_with(Self::default_config()).await
    }

    pub async fn init_with(config: Config) -> Self {
        let mut test_repository = Self::new(config);
        test_repository
            .repository
            .init()
            .await
            .expect("failed to initialize repository");

        test_repository
    }

    pub fn default_config() -> Config {
        let date = Config::parse_date(COMMIT_DATE).expect("invalid fixture date");
        Config::default().with_commit_date(date)
    }

    pub fn output(&self) -> String {
        self.output.take()
    }

    pub fn write(&self, path: &str, content: &str) {
        let path = self.dir.path().join(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create directory");
        }
        std::fs::write(path, content).expect("failed to write file");
    }

    pub fn read(&self, path: &str) -> Option<String> {
        std::fs::read_to_string(self.dir.path().join(path)).ok()
    }

    pub fn delete(&self, path: &str) {
        std::fs::remove_file(self.dir.path().join(path)).expect("failed to delete file");
    }

    /// Write, stage and commit one file
    pub async fn commit_file(&mut self, path: &str, content: &str, message: &str) -> ObjectId {
        self.write(path, content);
        self.repository.add(path).await.expect("add failed");
        self.repository.commit(message).await.expect("commit failed")
    }

    pub async fn checkout(&mut self, branch: &str) {
        self.repository
            .checkout_branch(branch)
            .await
            .expect("checkout failed");
    }

    pub fn head(&self) -> ObjectId {
        self.repository.refs().read_head().expect("no HEAD")
    }
}
