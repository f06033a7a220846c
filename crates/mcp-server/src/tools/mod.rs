//! Dotfiles MCP tool surface.

pub(crate) mod catalog;
mod dispatch;
mod schemas;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler};

use dotfiles_repo::{Dotfiles, RepoLocation};

/// Dotfiles MCP service.
///
/// `tools/list` is served from the static catalog; `tools/call` goes through
/// [`dispatch`]. Tool names are routed by hand rather than through the macro
/// router so an unknown name comes back as an ordinary text response instead
/// of a protocol error.
#[derive(Clone)]
pub struct DotfilesService {
    dotfiles: Dotfiles,
}

impl DotfilesService {
    pub fn new(location: RepoLocation) -> Self {
        Self {
            dotfiles: Dotfiles::new(location),
        }
    }

    pub(crate) fn dotfiles(&self) -> &Dotfiles {
        &self.dotfiles
    }
}

impl ServerHandler for DotfilesService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: catalog::tools(),
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        let outcome = dispatch::dispatch(self, &request.name, arguments).await;
        Ok(outcome.into_call_tool_result())
    }
}
