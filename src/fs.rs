//! Filesystem capability used by repository initialization.
//!
//! The initializer only ever needs a handful of primitives, so they are
//! collected behind [`Filesystem`]. [`StdFilesystem`] maps them onto
//! `std::fs` and applies unix permission bits where available.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub trait Filesystem {
    /// Create a single directory. Fails with `AlreadyExists` if anything
    /// is already at `path`.
    fn create_dir(&self, path: &Path, mode: u32) -> io::Result<()>;

    /// Create a directory and any missing parents.
    fn create_dir_all(&self, path: &Path, mode: u32) -> io::Result<()>;

    /// Create a new file holding `contents`. Fails with `AlreadyExists`
    /// if the file is already there.
    fn write_new(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()>;

    /// Recursively remove a directory tree.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// [`Filesystem`] backed by the host operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFilesystem;

impl StdFilesystem {
    fn dir_builder(mode: u32, recursive: bool) -> fs::DirBuilder {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(recursive);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;
        builder
    }
}

impl Filesystem for StdFilesystem {
    fn create_dir(&self, path: &Path, mode: u32) -> io::Result<()> {
        Self::dir_builder(mode, false).create(path)
    }

    fn create_dir_all(&self, path: &Path, mode: u32) -> io::Result<()> {
        Self::dir_builder(mode, true).create(path)
    }

    fn write_new(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let mut file = options.open(path)?;
        file.write_all(contents)?;
        file.sync_all()
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_dir_is_exclusive() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("d");

        StdFilesystem.create_dir(&dir, 0o755).unwrap();
        let err = StdFilesystem.create_dir(&dir, 0o755).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_create_dir_all_nested() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a/b/c");

        StdFilesystem.create_dir_all(&dir, 0o755).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_write_new_writes_exact_bytes() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f");

        StdFilesystem.write_new(&file, b"hello", 0o644).unwrap();
        assert_eq!(fs::read(&file).unwrap(), b"hello");
    }

    #[test]
    fn test_write_new_refuses_existing_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f");
        fs::write(&file, "old").unwrap();

        let err = StdFilesystem.write_new(&file, b"new", 0o644).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&file).unwrap(), "old");
    }

    #[cfg(unix)]
    #[test]
    fn test_modes_applied() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("d");
        let file = temp.path().join("f");

        StdFilesystem.create_dir(&dir, 0o700).unwrap();
        StdFilesystem.write_new(&file, b"", 0o600).unwrap();

        // umask can only clear bits, never add them
        let dir_mode = fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
        let file_mode = fs::metadata(&file).unwrap().permissions().mode() & 0o777;
        assert_eq!(dir_mode & !0o700, 0);
        assert_eq!(file_mode & !0o600, 0);
    }
}
