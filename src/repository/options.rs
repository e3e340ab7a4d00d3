use crate::layout::DEFAULT_BRANCH;

/// Per-call choices for [`Repository::init`](super::Repository::init)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    /// Branch HEAD points at in the new repository
    pub initial_branch: String,
}

impl InitOptions {
    pub fn new() -> Self {
        Self {
            initial_branch: DEFAULT_BRANCH.to_string(),
        }
    }

    pub fn with_initial_branch(mut self, branch: impl Into<String>) -> Self {
        self.initial_branch = branch.into();
        self
    }
}

impl Default for InitOptions {
    fn default() -> Self {
        Self::new()
    }
}
