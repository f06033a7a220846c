//! Read-only access to a bare-repository dotfiles setup.
//!
//! A dotfiles repository keeps its git metadata in a separate directory
//! (conventionally `~/.cfg`) with the user's home directory as the work tree.
//! This crate wraps that layout behind two queries: enumerate the tracked
//! files and read one tracked file's current on-disk content.

mod error;
mod git;
mod location;
mod queries;

pub use error::{GitError, ReadError, RepoError};
pub use git::{GitClient, GitOutput};
pub use location::RepoLocation;
pub use queries::Dotfiles;
