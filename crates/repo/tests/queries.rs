use std::path::Path;
use std::process::Command;

use dotfiles_repo::{Dotfiles, ReadError, RepoError, RepoLocation};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// A throwaway home directory with a bare repository at `<home>/.cfg` and the
/// home itself as the work tree, matching the conventional dotfiles layout.
struct Fixture {
    home: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let home = TempDir::new().expect("tempdir");
        git(home.path(), &["init", "--bare", ".cfg"]);
        Self { home }
    }

    fn location(&self) -> RepoLocation {
        RepoLocation::new(self.home.path().join(".cfg"), self.home.path())
    }

    fn dotfiles(&self) -> Dotfiles {
        Dotfiles::new(self.location())
    }

    fn track(&self, relative: &str, content: &str) {
        let path = self.home.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("mkdir");
        }
        std::fs::write(&path, content).expect("write tracked file");

        let git_dir = format!("--git-dir={}", self.home.path().join(".cfg").display());
        let work_tree = format!("--work-tree={}", self.home.path().display());
        git(self.home.path(), &[&git_dir, &work_tree, "add", relative]);
        git(
            self.home.path(),
            &[
                &git_dir,
                &work_tree,
                "-c",
                "user.email=test@example.com",
                "-c",
                "user.name=test",
                "commit",
                "-m",
                "track",
                "--quiet",
            ],
        );
    }
}

fn git(cwd: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .status()
        .expect("run git");
    assert!(status.success(), "git {args:?} failed");
}

#[tokio::test]
async fn tracked_files_lists_committed_paths() {
    let fixture = Fixture::new();
    fixture.track(".bashrc", "export X=1\n");
    fixture.track(".config/nvim/init.lua", "-- nvim\n");
    fixture.track(".gitconfig", "[user]\n");

    let files = fixture.dotfiles().tracked_files().await.unwrap();
    assert_eq!(
        files,
        vec![
            ".bashrc".to_string(),
            ".config/nvim/init.lua".to_string(),
            ".gitconfig".to_string(),
        ]
    );
}

#[tokio::test]
async fn tracked_files_empty_repository_is_ok_and_empty() {
    let fixture = Fixture::new();
    let files = fixture.dotfiles().tracked_files().await.unwrap();
    assert!(files.is_empty());
}

#[tokio::test]
async fn tracked_files_missing_repository_is_unavailable() {
    let home = TempDir::new().expect("tempdir");
    let dotfiles = Dotfiles::new(RepoLocation::new(
        home.path().join("does-not-exist"),
        home.path(),
    ));

    let err = dotfiles.tracked_files().await.unwrap_err();
    match err {
        RepoError::Unavailable { status, stderr } => {
            assert_ne!(status, Some(0));
            assert!(!stderr.is_empty(), "expected git stderr to be captured");
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn read_file_returns_current_disk_state_not_the_committed_one() {
    let fixture = Fixture::new();
    fixture.track(".bashrc", "export X=1\n");
    std::fs::write(fixture.home.path().join(".bashrc"), "export X=2\n").unwrap();

    let content = fixture.dotfiles().read_file(".bashrc").await.unwrap();
    assert_eq!(content, "export X=2\n");
}

#[tokio::test]
async fn read_file_missing_is_not_found() {
    let fixture = Fixture::new();
    let err = fixture.dotfiles().read_file("nope.txt").await.unwrap_err();
    match err {
        ReadError::NotFound { path } => assert_eq!(path, "nope.txt"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn read_file_on_a_directory_is_an_io_error() {
    let fixture = Fixture::new();
    fixture.track(".config/nvim/init.lua", "-- nvim\n");

    let err = fixture.dotfiles().read_file(".config").await.unwrap_err();
    assert!(matches!(err, ReadError::Io(_)), "got {err:?}");
}

#[tokio::test]
async fn read_file_repeated_reads_are_identical() {
    let fixture = Fixture::new();
    fixture.track(".gitconfig", "[user]\n\tname = test\n");

    let dotfiles = fixture.dotfiles();
    let first = dotfiles.read_file(".gitconfig").await.unwrap();
    let second = dotfiles.read_file(".gitconfig").await.unwrap();
    assert_eq!(first, second);
}
