use std::path::Path;
use std::process::Command;

use dotfiles_repo::{GitClient, RepoLocation};
use tempfile::TempDir;

fn location_for(home: &Path) -> RepoLocation {
    RepoLocation::new(home.join(".cfg"), home)
}

#[tokio::test]
async fn run_captures_stdout_on_success() {
    let home = TempDir::new().expect("tempdir");
    let client = GitClient::new(location_for(home.path()));

    let output = client.run(&["version"]).await.unwrap();
    assert!(output.success());
    assert!(output.stdout.starts_with("git version"));
    assert!(output.stderr.is_empty());
}

#[tokio::test]
async fn run_reports_nonzero_exit_as_a_normal_output() {
    let home = TempDir::new().expect("tempdir");
    let status = Command::new("git")
        .args(["init", "--bare", ".cfg"])
        .current_dir(home.path())
        .status()
        .expect("run git");
    assert!(status.success());

    // No commits yet: rev-parse fails, but run() still returns Ok.
    let client = GitClient::new(location_for(home.path()));
    let output = client.run(&["rev-parse", "HEAD"]).await.unwrap();
    assert!(!output.success());
    assert!(!output.stderr.is_empty());
}

#[tokio::test]
async fn run_on_a_missing_git_dir_is_still_ok_with_nonzero_exit() {
    let home = TempDir::new().expect("tempdir");
    let client = GitClient::new(location_for(home.path()));

    let output = client.run(&["ls-files"]).await.unwrap();
    assert!(!output.success());
}
