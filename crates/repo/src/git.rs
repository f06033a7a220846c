use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::process::Command;

use crate::error::GitError;
use crate::RepoLocation;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of one git invocation: exit status plus captured output as text.
/// Immutable once produced. Non-zero exit (e.g. repository not initialized)
/// is an expected outcome reported here, not an error.
#[derive(Debug)]
pub struct GitOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Runs git subcommands pinned to one [`RepoLocation`] via the
/// `--git-dir`/`--work-tree` overrides.
#[derive(Clone, Debug)]
pub struct GitClient {
    location: RepoLocation,
    timeout: Duration,
}

impl GitClient {
    pub fn new(location: RepoLocation) -> Self {
        Self {
            location,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn location(&self) -> &RepoLocation {
        &self.location
    }

    /// Run `git --git-dir=<dir> --work-tree=<tree> <args...>` and wait for it
    /// to exit, bounded by the client timeout. A git binary that cannot be
    /// started yields [`GitError::Spawn`]; an expired wait kills the child and
    /// yields [`GitError::Timeout`].
    pub async fn run(&self, args: &[&str]) -> Result<GitOutput, GitError> {
        let mut cmd = Command::new("git");
        cmd.arg(format!("--git-dir={}", self.location.git_dir().display()))
            .arg(format!("--work-tree={}", self.location.work_tree().display()))
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(GitError::Spawn)?;
        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| GitError::Timeout {
                args: args.join(" "),
                timeout_ms: self.timeout.as_millis() as u64,
            })??;

        let result = GitOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        log::debug!("git {} exited with {}", args.join(" "), result.status);
        Ok(result)
    }
}
