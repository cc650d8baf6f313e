use serde::Deserialize;
use strkit_core::Suggestions;

use super::{CallToolParams, CallToolResult, Content, JsonRpcError};
use crate::mcp::Server;

pub fn handle_tools_call(
    params: Option<serde_json::Value>,
    server: &Server,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize, Default)]
    struct ConvertArgs {
        #[serde(default)]
        input: Option<String>,
    }

    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid params: {e}"),
            data: None,
        })?;

    let args: ConvertArgs = match params.arguments {
        Some(arguments) => serde_json::from_value(arguments).map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid arguments: {e}"),
            data: None,
        })?,
        None => ConvertArgs::default(),
    };

    if server.global.verbose {
        anstream::eprintln!("Calling {}: input={:?}", params.name, args.input);
    }

    let suggestions = server.plugin.suggest(&params.name, args.input.as_deref());
    let is_error = suggestions.is_error().then_some(true);

    let content = match suggestions {
        Suggestions::Error(error) => vec![Content::Text {
            text: error.description,
        }],
        Suggestions::Results(results) => results
            .into_iter()
            .map(|entry| Content::Text {
                text: format!("{}\t{}", entry.target, entry.description),
            })
            .collect(),
    };

    let result = CallToolResult { content, is_error };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}
