use crate::error::Result;
use crate::repository::{InitOptions, Repository};
use std::path::Path;

pub fn init(work_dir: &Path, options: &InitOptions) -> Result<Repository> {
    let repo = Repository::init(work_dir, options)?;
    println!(
        "Initialized empty got repository in {}",
        repo.got_dir().display()
    );
    Ok(repo)
}
