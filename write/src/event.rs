use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// An API Gateway proxy event
///
/// Only `body` is interpreted. Every other field is kept as-is so the
/// event can be echoed back in the response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Event {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// An API Gateway proxy response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    pub fn forbidden() -> Self {
        Response {
            status_code: 403,
            body: json!({
                "errorMessage": "Sorry but you are not Slack"
            })
            .to_string(),
        }
    }

    pub fn ok(message: String, input: &Event) -> Self {
        Response {
            status_code: 200,
            body: json!({
                "message": message,
                "input": input,
            })
            .to_string(),
        }
    }
}
