use rmcp::schemars;
use serde::Deserialize;
use serde_json::Value;

/// `list_dotfiles` takes no arguments.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub(crate) struct ListDotfilesRequest {}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub(crate) struct GetDotfileContentRequest {
    /// Path to the dotfile, relative to the work tree root
    #[schemars(description = "Path to the dotfile")]
    pub(crate) filepath: String,
}

/// JSON schema object for a request type, as advertised in `tools/list`.
pub(crate) fn input_schema_for<T: schemars::JsonSchema>() -> serde_json::Map<String, Value> {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    }
}
