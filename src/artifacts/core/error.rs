//! User-facing error taxonomy
//!
//! Every expected failure of a repository operation is a [`GitletError`] variant whose
//! `Display` output is the single diagnostic line shown to the user. Unexpected failures
//! (I/O errors, corrupted objects) are carried by [`GitletError::Internal`] and abort the
//! current operation.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`GitletError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    InvalidOperation,
    InvalidArgument,
    NotInitialized,
    Internal,
}

#[derive(Error, Debug)]
pub enum GitletError {
    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,

    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    // lookups
    #[error("No commit with that id exists.")]
    CommitNotFound { reference: String },

    #[error("Object {oid} is missing from the object store")]
    ObjectNotFound { oid: ObjectId },

    #[error("File does not exist.")]
    FileNotFound { path: PathBuf },

    #[error("File does not exist in that commit.")]
    FileNotInCommit { path: PathBuf },

    #[error("No such branch exists.")]
    NoSuchBranch { name: String },

    #[error("A branch with that name does not exist.")]
    BranchNotFound { name: String },

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    // conflicts with existing state
    #[error("A branch with that name already exists.")]
    BranchAlreadyExists { name: String },

    #[error("Branch name {name} collides with existing branch {existing}.")]
    BranchNameCollision { name: String, existing: String },

    // refused operations
    #[error("Please enter a commit message.")]
    EmptyCommitMessage,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("No reason to remove the file.")]
    NoReasonToRemove { path: PathBuf },

    #[error("No need to checkout the current branch.")]
    CheckoutCurrentBranch,

    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch,

    #[error("Cannot merge a branch with itself.")]
    MergeWithSelf,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileInTheWay { paths: Vec<PathBuf> },

    // malformed input
    #[error("Invalid branch name: {name}")]
    InvalidBranchName { name: String },

    #[error("Incorrect operands.")]
    IncorrectOperands,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Internal(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GitletError>;

impl GitletError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GitletError::NotInitialized => ErrorKind::NotInitialized,
            GitletError::CommitNotFound { .. }
            | GitletError::ObjectNotFound { .. }
            | GitletError::FileNotFound { .. }
            | GitletError::FileNotInCommit { .. }
            | GitletError::NoSuchBranch { .. }
            | GitletError::BranchNotFound { .. }
            | GitletError::NoCommitWithMessage => ErrorKind::NotFound,
            GitletError::AlreadyInitialized
            | GitletError::BranchAlreadyExists { .. }
            | GitletError::BranchNameCollision { .. } => ErrorKind::AlreadyExists,
            GitletError::EmptyCommitMessage
            | GitletError::NothingToCommit
            | GitletError::NoReasonToRemove { .. }
            | GitletError::CheckoutCurrentBranch
            | GitletError::RemoveCurrentBranch
            | GitletError::MergeWithSelf
            | GitletError::UncommittedChanges
            | GitletError::UntrackedFileInTheWay { .. } => ErrorKind::InvalidOperation,
            GitletError::InvalidBranchName { .. } | GitletError::IncorrectOperands => {
                ErrorKind::InvalidArgument
            }
            GitletError::Io(_) | GitletError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Whether the error is an expected condition that should be reported as a single
    /// diagnostic line rather than aborting the process.
    ///
    /// A missing object is classified as `NotFound` but is never user-facing: the
    /// repository only references digests it has stored, so a miss means corruption.
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            GitletError::Io(_) | GitletError::Internal(_) | GitletError::ObjectNotFound { .. }
        )
    }
}

// A typed error raised inside an `anyhow` context keeps its variant.
impl From<anyhow::Error> for GitletError {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<GitletError>() {
            Ok(gitlet_error) => gitlet_error,
            Err(error) => GitletError::Internal(error),
        }
    }
}
