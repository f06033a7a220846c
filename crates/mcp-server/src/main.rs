//! Dotfiles MCP Server
//!
//! Exposes a bare-repo dotfiles setup (metadata in `~/.cfg`, work tree `~`)
//! to AI agents via the MCP protocol.
//!
//! ## Tools
//!
//! - `list_dotfiles` - List all files tracked by the dotfiles repository
//! - `get_dotfile_content` - Read one tracked file's current content
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "dotfiles": {
//!       "command": "dotfiles-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod tools;

use dotfiles_repo::RepoLocation;
use tools::DotfilesService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let location =
        RepoLocation::resolve().context("no home directory to resolve the dotfiles repo against")?;
    log::info!(
        "Starting dotfiles MCP server (git dir {}, work tree {})",
        location.git_dir().display(),
        location.work_tree().display()
    );

    let service = DotfilesService::new(location);
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::info!("Dotfiles MCP server stopped");
    Ok(())
}
