//! Tool-call dispatch.
//!
//! Every failure mode is encoded in the response text, so the transport never
//! observes a dispatch error. The tagged [`ToolOutcome`] keeps success and
//! failure distinguishable internally; rendering is the only place the tag
//! collapses into the wire text, with the MCP `is_error` flag carrying the
//! machine-readable side of the split.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

use dotfiles_repo::ReadError;

use super::schemas::GetDotfileContentRequest;
use super::DotfilesService;

pub(crate) type Arguments = serde_json::Map<String, Value>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FailureKind {
    RepoUnavailable,
    MissingArgument,
    FileNotFound,
    ReadFailed,
    UnknownTool,
}

/// Tagged result of one tool call.
#[derive(Debug)]
pub(crate) enum ToolOutcome {
    Success(String),
    Failure { kind: FailureKind, message: String },
}

impl ToolOutcome {
    fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    /// Render to the wire shape: exactly one text segment, always.
    pub(crate) fn into_call_tool_result(self) -> CallToolResult {
        match self {
            Self::Success(text) => CallToolResult::success(vec![Content::text(text)]),
            Self::Failure { message, .. } => CallToolResult::error(vec![Content::text(message)]),
        }
    }
}

const NO_DOTFILES: &str = "No dotfiles found or git repository not accessible.";

pub(crate) async fn dispatch(
    service: &DotfilesService,
    name: &str,
    arguments: Arguments,
) -> ToolOutcome {
    match name {
        "list_dotfiles" => list_dotfiles(service).await,
        "get_dotfile_content" => get_dotfile_content(service, arguments).await,
        other => ToolOutcome::failure(FailureKind::UnknownTool, format!("Unknown tool: {other}")),
    }
}

async fn list_dotfiles(service: &DotfilesService) -> ToolOutcome {
    let files = match service.dotfiles().tracked_files().await {
        Ok(files) => files,
        Err(err) => {
            // Unreadable repo and empty repo share one wire text; the
            // distinction lives in the log line and the failure tag.
            log::warn!("list_dotfiles: {err}");
            return ToolOutcome::failure(FailureKind::RepoUnavailable, NO_DOTFILES);
        }
    };

    if files.is_empty() {
        return ToolOutcome::Success(NO_DOTFILES.to_string());
    }
    ToolOutcome::Success(format!(
        "Found {} dotfiles:\n\n{}",
        files.len(),
        files.join("\n")
    ))
}

async fn get_dotfile_content(service: &DotfilesService, arguments: Arguments) -> ToolOutcome {
    let request: GetDotfileContentRequest = match serde_json::from_value(Value::Object(arguments)) {
        Ok(request) => request,
        Err(_) => {
            return ToolOutcome::failure(FailureKind::MissingArgument, "Error: filepath is required")
        }
    };
    if request.filepath.is_empty() {
        return ToolOutcome::failure(FailureKind::MissingArgument, "Error: filepath is required");
    }

    let filepath = request.filepath;
    match service.dotfiles().read_file(&filepath).await {
        Ok(content) => ToolOutcome::Success(format!("Content of {filepath}:\n\n{content}")),
        Err(ReadError::NotFound { .. }) => ToolOutcome::failure(
            FailureKind::FileNotFound,
            format!("Content of {filepath}:\n\nFile not found: {filepath}"),
        ),
        Err(ReadError::Io(err)) => ToolOutcome::failure(
            FailureKind::ReadFailed,
            format!("Content of {filepath}:\n\nError reading file: {err}"),
        ),
    }
}
