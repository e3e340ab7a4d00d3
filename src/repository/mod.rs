pub mod head;
pub mod options;

use crate::error::{GotError, InitStep, Result};
use crate::fs::{Filesystem, StdFilesystem};
use crate::layout::{DIR_MODE, FILE_MODE, RepoLayout, validate_branch_name};
pub use head::Head;
use log::{debug, info, warn};
pub use options::InitOptions;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A got repository rooted at a working directory
#[derive(Debug)]
pub struct Repository {
    layout: RepoLayout,
    head: Head,
}

impl Repository {
    /// Initialize a new repository in `work_dir` on the host filesystem
    pub fn init(work_dir: &Path, options: &InitOptions) -> Result<Self> {
        Self::init_with(&StdFilesystem, work_dir, options)
    }

    /// Initialize a new repository in `work_dir`.
    ///
    /// The `.got` directory is created exclusively, so an existing entry of
    /// any type (including one created concurrently) yields
    /// [`GotError::AlreadyInitialized`] and nothing is touched. If a later
    /// step fails, the partially built `.got` tree is removed before the
    /// error is returned.
    pub fn init_with<F: Filesystem>(
        fs: &F,
        work_dir: &Path,
        options: &InitOptions,
    ) -> Result<Self> {
        info!("Initializing repository at: {}", work_dir.display());

        validate_branch_name(&options.initial_branch)?;
        let layout = RepoLayout::new(work_dir);
        let head = Head::branch(&options.initial_branch);

        let root = layout.got_dir();
        fs.create_dir(root, DIR_MODE).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                GotError::AlreadyInitialized(root.to_path_buf())
            } else {
                GotError::CreateDir {
                    step: InitStep::RootDir,
                    path: root.to_path_buf(),
                    source: e,
                }
            }
        })?;
        debug!("Created {}", root.display());

        if let Err(e) = Self::populate(fs, &layout, &head) {
            warn!(
                "Initialization failed, cleaning up partial repository at {}",
                root.display()
            );
            if let Err(cleanup_err) = fs.remove_dir_all(root) {
                warn!("Failed to cleanup partial repository: {}", cleanup_err);
            }
            return Err(e);
        }

        info!(
            "Repository initialized at {} (HEAD -> {})",
            root.display(),
            head.target()
        );

        Ok(Self { layout, head })
    }

    /// Everything under the root marker, in creation order
    fn populate<F: Filesystem>(fs: &F, layout: &RepoLayout, head: &Head) -> Result<()> {
        let objects = layout.objects_dir();
        fs.create_dir(&objects, DIR_MODE)
            .map_err(|source| GotError::CreateDir {
                step: InitStep::ObjectsDir,
                path: objects.clone(),
                source,
            })?;
        debug!("Created {}", objects.display());

        let heads = layout.heads_dir();
        fs.create_dir_all(&heads, DIR_MODE)
            .map_err(|source| GotError::CreateDir {
                step: InitStep::RefsDir,
                path: heads.clone(),
                source,
            })?;
        debug!("Created {}", heads.display());

        let head_path = layout.head_path();
        fs.write_new(&head_path, head.to_string().as_bytes(), FILE_MODE)
            .map_err(|source| GotError::WriteFile {
                step: InitStep::HeadFile,
                path: head_path.clone(),
                source,
            })?;
        debug!("Wrote {}", head_path.display());

        let index_path = layout.index_path();
        fs.write_new(&index_path, &[], FILE_MODE)
            .map_err(|source| GotError::WriteFile {
                step: InitStep::IndexFile,
                path: index_path.clone(),
                source,
            })?;
        debug!("Wrote {}", index_path.display());

        Ok(())
    }

    /// Open the repository whose `.got` directory sits directly in `work_dir`
    pub fn open(work_dir: &Path) -> Result<Self> {
        let layout = RepoLayout::new(work_dir);
        let root = layout.got_dir();

        if !root.is_dir() {
            return Err(GotError::NotARepository(work_dir.to_path_buf()));
        }

        let invalid = |reason: &str| GotError::InvalidRepository {
            path: root.to_path_buf(),
            reason: reason.to_string(),
        };

        if !layout.objects_dir().is_dir() {
            return Err(invalid("missing objects directory"));
        }
        if !layout.heads_dir().is_dir() {
            return Err(invalid("missing refs/heads directory"));
        }
        let head_path = layout.head_path();
        if !head_path.is_file() {
            return Err(invalid("missing HEAD file"));
        }

        let raw = fs::read_to_string(&head_path)?;
        let head = Head::parse(&raw).ok_or_else(|| invalid("malformed HEAD"))?;

        Ok(Self { layout, head })
    }

    /// Find the repository containing `start`, searching upwards through
    /// its ancestors
    pub fn discover(start: &Path) -> Result<Self> {
        let start = start
            .canonicalize()
            .map_err(|_| GotError::NotARepository(start.to_path_buf()))?;

        for dir in start.ancestors() {
            match Self::open(dir) {
                Ok(repo) => {
                    debug!("Discovered repository at {}", dir.display());
                    return Ok(repo);
                }
                Err(GotError::NotARepository(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(GotError::NotARepository(start))
    }

    pub fn work_dir(&self) -> &Path {
        self.layout.work_dir()
    }

    /// Get the `.got` directory path
    pub fn got_dir(&self) -> &Path {
        self.layout.got_dir()
    }

    pub fn objects_dir(&self) -> PathBuf {
        self.layout.objects_dir()
    }

    pub fn heads_dir(&self) -> PathBuf {
        self.layout.heads_dir()
    }

    pub fn head_path(&self) -> PathBuf {
        self.layout.head_path()
    }

    pub fn index_path(&self) -> PathBuf {
        self.layout.index_path()
    }

    pub fn head(&self) -> &Head {
        &self.head
    }

    /// Ref HEAD points at, e.g. `refs/heads/main`
    pub fn head_ref(&self) -> &str {
        self.head.target()
    }

    /// Name of the checked out branch, e.g. `main`
    pub fn current_branch(&self) -> Option<&str> {
        self.head.branch_name()
    }
}
