//! The JSON wrapper every bespoke endpoint responds with

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `{ "status": bool, "data": any, "message": string }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayEnvelope {
    /// Any JSON value; `1` or `"ok"` count as success just like `true`
    #[serde(deserialize_with = "truthy")]
    pub status: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GatewayEnvelope {
    /// Unwrap the payload, or the gateway's message when `status` is false
    pub fn into_result(self) -> std::result::Result<Value, String> {
        if self.status {
            Ok(self.data)
        } else {
            Err(self.message.unwrap_or_default())
        }
    }
}

/// The gateway is loosely typed about `status`
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    })
}
