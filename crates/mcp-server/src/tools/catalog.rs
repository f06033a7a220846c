use std::sync::Arc;

use rmcp::model::Tool;

use super::schemas::{input_schema_for, GetDotfileContentRequest, ListDotfilesRequest};

#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "list_dotfiles",
        summary: "List all dotfiles managed by the repository",
    },
    ToolDescriptor {
        name: "get_dotfile_content",
        summary: "Get the content of a specific dotfile",
    },
];

/// The fixed tool list served for `tools/list`; identical on every call.
pub(crate) fn tools() -> Vec<Tool> {
    TOOL_CATALOG
        .iter()
        .map(|descriptor| {
            let schema = match descriptor.name {
                "get_dotfile_content" => input_schema_for::<GetDotfileContentRequest>(),
                _ => input_schema_for::<ListDotfilesRequest>(),
            };
            Tool::new(descriptor.name, descriptor.summary, Arc::new(schema))
        })
        .collect()
}

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "Read-only access to the user's dotfiles repository (bare repo with work tree)."
            .to_string(),
        "Tools:".to_string(),
    ];
    for tool in TOOL_CATALOG {
        lines.push(format!("- {}: {}", tool.name, tool.summary));
    }
    lines.join("\n")
}
