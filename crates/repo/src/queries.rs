use std::path::PathBuf;

use crate::error::{ReadError, RepoError};
use crate::{GitClient, RepoLocation};

/// The two read queries the tool surface is built on.
#[derive(Clone, Debug)]
pub struct Dotfiles {
    git: GitClient,
}

impl Dotfiles {
    pub fn new(location: RepoLocation) -> Self {
        Self {
            git: GitClient::new(location),
        }
    }

    pub fn location(&self) -> &RepoLocation {
        self.git.location()
    }

    /// Paths tracked by the repository, in the order git reports them,
    /// trimmed and with empty lines dropped.
    ///
    /// A repository with zero tracked files yields an empty list; a
    /// repository git cannot read at all yields [`RepoError::Unavailable`]
    /// carrying the exit status and stderr.
    pub async fn tracked_files(&self) -> Result<Vec<String>, RepoError> {
        let output = self.git.run(&["ls-files"]).await?;
        if !output.success() {
            return Err(RepoError::Unavailable {
                status: output.status.code(),
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Current on-disk content of a tracked file, decoded as UTF-8.
    ///
    /// The path is joined against the work tree root and read directly from
    /// disk rather than through the git index, so uncommitted edits to a
    /// tracked file are visible.
    pub async fn read_file(&self, path: &str) -> Result<String, ReadError> {
        let full_path: PathBuf = self.location().work_tree().join(path);
        if !tokio::fs::try_exists(&full_path).await.unwrap_or(false) {
            return Err(ReadError::NotFound {
                path: path.to_string(),
            });
        }
        Ok(tokio::fs::read_to_string(&full_path).await?)
    }
}
