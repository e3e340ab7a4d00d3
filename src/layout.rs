//! On-disk layout of a got repository.
//!
//! Every path the repository uses is derived here from the working
//! directory, so the rest of the crate never joins path literals itself:
//!
//! ```text
//! <work_dir>/.got/
//!   objects/
//!   refs/heads/
//!   HEAD
//!   index
//! ```

use crate::error::{GotError, Result};
use std::path::{Path, PathBuf};

pub const GOT_DIR: &str = ".got";
pub const OBJECTS_DIR: &str = "objects";
pub const REFS_DIR: &str = "refs";
pub const HEADS_DIR: &str = "heads";
pub const HEAD_FILE: &str = "HEAD";
pub const INDEX_FILE: &str = "index";
pub const DEFAULT_BRANCH: &str = "main";

/// rwxr-xr-x
pub const DIR_MODE: u32 = 0o755;
/// rw-r--r--
pub const FILE_MODE: u32 = 0o644;

/// Resolved paths of a repository rooted at a working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    work_dir: PathBuf,
    got_dir: PathBuf,
}

impl RepoLayout {
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Self {
        let work_dir = work_dir.as_ref().to_path_buf();
        let got_dir = work_dir.join(GOT_DIR);
        Self { work_dir, got_dir }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// The root marker directory
    pub fn got_dir(&self) -> &Path {
        &self.got_dir
    }

    pub fn objects_dir(&self) -> PathBuf {
        self.got_dir.join(OBJECTS_DIR)
    }

    pub fn refs_dir(&self) -> PathBuf {
        self.got_dir.join(REFS_DIR)
    }

    pub fn heads_dir(&self) -> PathBuf {
        self.refs_dir().join(HEADS_DIR)
    }

    pub fn head_path(&self) -> PathBuf {
        self.got_dir.join(HEAD_FILE)
    }

    pub fn index_path(&self) -> PathBuf {
        self.got_dir.join(INDEX_FILE)
    }
}

/// Ref path of a branch, e.g. `refs/heads/main`
pub fn branch_ref(branch: &str) -> String {
    format!("{REFS_DIR}/{HEADS_DIR}/{branch}")
}

/// Validate a branch name before it is written into HEAD
pub fn validate_branch_name(name: &str) -> Result<()> {
    let invalid = || Err(GotError::InvalidBranchName(name.to_string()));

    if name.is_empty() {
        return invalid();
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return invalid();
    }
    if name
        .chars()
        .any(|c| matches!(c, '~' | '^' | ':' | '?' | '*' | '[' | '\\'))
    {
        return invalid();
    }
    if name.starts_with('/') || name.starts_with('-') || name.starts_with('.') {
        return invalid();
    }
    if name.ends_with('/') || name.ends_with(".lock") || name.ends_with('.') {
        return invalid();
    }
    if name.contains("..") || name.contains("//") || name.contains("/.") {
        return invalid();
    }
    Ok(())
}
