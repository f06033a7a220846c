use std::path::{Path, PathBuf};

const GIT_DIR_ENV: &str = "DOTFILES_GIT_DIR";
const WORK_TREE_ENV: &str = "DOTFILES_WORK_TREE";
const DEFAULT_GIT_DIR_NAME: &str = ".cfg";

/// Where the dotfiles repository lives: the git metadata directory and the
/// work tree its files are checked out into.
///
/// Resolved once at startup and passed by reference from then on; tool calls
/// never supply their own location.
#[derive(Clone, Debug)]
pub struct RepoLocation {
    git_dir: PathBuf,
    work_tree: PathBuf,
}

impl RepoLocation {
    pub fn new(git_dir: impl Into<PathBuf>, work_tree: impl Into<PathBuf>) -> Self {
        Self {
            git_dir: git_dir.into(),
            work_tree: work_tree.into(),
        }
    }

    /// Conventional layout: metadata in `~/.cfg`, work tree `~`.
    ///
    /// `DOTFILES_GIT_DIR` / `DOTFILES_WORK_TREE` override either path, which
    /// lets tests and scratch setups point the server at a throwaway
    /// repository. Returns `None` only when no home directory can be
    /// determined and no override is set.
    pub fn resolve() -> Option<Self> {
        let home = dirs::home_dir();
        let git_dir = env_path(GIT_DIR_ENV)
            .or_else(|| home.as_deref().map(|h| h.join(DEFAULT_GIT_DIR_NAME)))?;
        let work_tree = env_path(WORK_TREE_ENV).or(home)?;
        Some(Self { git_dir, work_tree })
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
