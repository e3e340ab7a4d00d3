use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The filesystem mutation an initialization was performing when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
    RootDir,
    ObjectsDir,
    RefsDir,
    HeadFile,
    IndexFile,
}

impl fmt::Display for InitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InitStep::RootDir => ".got directory",
            InitStep::ObjectsDir => "objects directory",
            InitStep::RefsDir => "refs/heads directory",
            InitStep::HeadFile => "HEAD file",
            InitStep::IndexFile => "index file",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum GotError {
    #[error("repository already initialized: {0}")]
    AlreadyInitialized(PathBuf),

    #[error("failed to create {step} at {path}")]
    CreateDir {
        step: InitStep,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create {step} at {path}")]
    WriteFile {
        step: InitStep,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid branch name: '{0}'")]
    InvalidBranchName(String),

    #[error("not a got repository (or any of the parent directories): {0}")]
    NotARepository(PathBuf),

    #[error("invalid got repository at {path}: {reason}")]
    InvalidRepository { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GotError {
    /// The init step that failed, if this error came from a filesystem mutation
    pub fn step(&self) -> Option<InitStep> {
        match self {
            GotError::CreateDir { step, .. } | GotError::WriteFile { step, .. } => Some(*step),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GotError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_step_is_reported() {
        let err = GotError::WriteFile {
            step: InitStep::HeadFile,
            path: PathBuf::from(".got/HEAD"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.step(), Some(InitStep::HeadFile));
        assert_eq!(err.to_string(), "failed to create HEAD file at .got/HEAD");
        assert_eq!(std::error::Error::source(&err).unwrap().to_string(), "denied");
    }

    #[test]
    fn test_already_initialized_has_no_step() {
        let err = GotError::AlreadyInitialized(PathBuf::from(".got"));
        assert_eq!(err.step(), None);
        assert!(err.to_string().starts_with("repository already initialized"));
    }
}
