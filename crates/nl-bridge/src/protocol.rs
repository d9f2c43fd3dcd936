//! Wire frames of the JSON-lines channel.
//!
//! One request per input line, one response per output line. Events share
//! the output stream and are told apart by their `event` key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::commands::CommandError;

/// `{"id": 1, "command": "filter_projects", "args": {...}}`
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// Echoed back untouched.
    #[serde(default)]
    pub id: Value,
    pub command: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub id: Value,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl Response {
    pub fn success(id: Value, data: Value) -> Self {
        Self {
            id,
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(id: Value, error: CommandError) -> Self {
        Self {
            id,
            ok: false,
            data: None,
            error: Some(error),
        }
    }
}

/// `{"event": "submission_changed", "payload": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct EventFrame<'a, T: Serialize> {
    pub event: &'a str,
    pub payload: T,
}

/// Parses one input line. Malformed input still yields a response frame.
pub fn parse_request(line: &str) -> Result<Request, Response> {
    serde_json::from_str(line).map_err(|e| {
        let id = serde_json::from_str::<Value>(line)
            .ok()
            .and_then(|v| v.get("id").cloned())
            .unwrap_or(Value::Null);
        Response::failure(id, CommandError::bad_request(format!("malformed request: {e}")))
    })
}
