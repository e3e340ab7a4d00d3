use crate::layout::{HEADS_DIR, REFS_DIR, branch_ref};
use std::fmt;

const SYMREF_PREFIX: &str = "ref: ";

/// Contents of the HEAD file: a symbolic reference to the current branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    target: String,
}

impl Head {
    /// HEAD pointing at `refs/heads/<branch>`
    pub fn branch(name: &str) -> Self {
        Self {
            target: branch_ref(name),
        }
    }

    /// Parse HEAD file contents. A single trailing newline is tolerated
    /// so files edited by hand still open.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.strip_suffix('\n').unwrap_or(raw);
        let target = raw.strip_prefix(SYMREF_PREFIX)?;
        if target.is_empty() || target.contains('\n') {
            return None;
        }
        Some(Self {
            target: target.to_string(),
        })
    }

    /// Referenced ref path, e.g. `refs/heads/main`
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Branch name when HEAD points into `refs/heads/`
    pub fn branch_name(&self) -> Option<&str> {
        self.target
            .strip_prefix(REFS_DIR)?
            .strip_prefix('/')?
            .strip_prefix(HEADS_DIR)?
            .strip_prefix('/')
            .filter(|name| !name.is_empty())
    }
}

impl fmt::Display for Head {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SYMREF_PREFIX}{}", self.target)
    }
}
