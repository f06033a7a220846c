use thiserror::Error;

/// Failure to run the git executable at all. A non-zero git exit is not an
/// error at this level; callers check [`crate::GitOutput::success`].
#[derive(Error, Debug)]
pub enum GitError {
    #[error("failed to spawn git: {0}")]
    Spawn(std::io::Error),

    #[error("git {args} timed out after {timeout_ms}ms")]
    Timeout { args: String, timeout_ms: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum RepoError {
    #[error(transparent)]
    Git(#[from] GitError),

    /// git ran but exited non-zero: repository missing, corrupt, or otherwise
    /// unreadable. Distinct from a repository with zero tracked files.
    #[error("git exited with status {status:?}: {stderr}")]
    Unavailable { status: Option<i32>, stderr: String },
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("file not found: {path}")]
    NotFound { path: String },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
