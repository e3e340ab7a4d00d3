pub mod cli;
pub mod commands;
pub mod error;
pub mod fs;
pub mod layout;
pub mod repository;

pub use error::{GotError, InitStep, Result};
pub use fs::{Filesystem, StdFilesystem};
pub use layout::RepoLayout;
pub use repository::{Head, InitOptions, Repository};
