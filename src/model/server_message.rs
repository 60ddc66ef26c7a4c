use hyper::StatusCode;
use serde_json::Value;

/// The human readable fields of a sign-up or unregister response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerMessage {
    pub detail: Option<String>,
    pub message: Option<String>,
}

impl ServerMessage {
    pub fn from_value(value: &Value) -> ServerMessage {
        ServerMessage {
            detail: text_field(value, "detail"),
            message: text_field(value, "message"),
        }
    }

    pub fn detail_or(&self, fallback: &str) -> String {
        self.detail.clone().unwrap_or_else(|| fallback.to_string())
    }

    /// `detail`, then `message`, then `fallback`.
    pub fn reason_or(&self, fallback: &str) -> String {
        self.detail
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| fallback.to_string())
    }
}

fn text_field(value: &Value, name: &str) -> Option<String> {
    match value.get(name)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: ServerMessage,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
