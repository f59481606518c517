//! The bespoke API dispatcher
//!
//! Every remote call goes through [`FirstChekoutClient::dispatch`]: one request, one
//! envelope, no retries.

use super::FirstChekoutClient;
use crate::error::UnknownProblem;
use crate::types::constants::{API_KEY_HEADER, VALID_METHODS};
use crate::types::GatewayEnvelope;
use crate::{FirstChekoutError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

/// Map a verb onto the methods the bespoke API accepts
pub fn parse_method(method: &str) -> Result<Method> {
    if !VALID_METHODS.contains(&method) {
        return Err(FirstChekoutError::invalid_method(method));
    }

    Method::from_bytes(method.as_bytes()).map_err(|_| FirstChekoutError::invalid_method(method))
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

impl FirstChekoutClient {
    /// Send a request to the bespoke API and unwrap the response envelope
    ///
    /// `path` is joined onto the bespoke base URI. A non-empty `body` is sent as
    /// `{"data": body}`. Returns the envelope's `data` when `status` is true.
    pub async fn dispatch(&self, method: &str, path: &str, body: Option<&Value>) -> Result<Value> {
        let method = parse_method(method)?;

        if self.config.active_secret.is_empty() {
            return Err(FirstChekoutError::config(format!(
                "merchant {} secret is not configured",
                self.config.mode.as_str()
            )));
        }

        let url = self.base_url.join(path)?;
        tracing::debug!("Sending {} request to: {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, self.config.active_secret.as_str());

        if let Some(body) = body.filter(|body| !is_empty_body(body)) {
            request = request.json(&json!({ "data": body }));
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Bespoke {} {} failed to send: {}", method, url, e);
            UnknownProblem::Transport(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let response_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            tracing::error!(
                "Bespoke {} {} failed with status: {}. Response body: {}",
                method,
                url,
                status,
                response_body
            );
            return Err(UnknownProblem::UnexpectedStatus {
                status,
                body: response_body,
            }
            .into());
        }

        let text = response.text().await.map_err(UnknownProblem::Transport)?;
        let envelope: GatewayEnvelope = serde_json::from_str(&text).map_err(|e| {
            tracing::error!("Bespoke {} {} returned a malformed envelope: {}", method, url, e);
            UnknownProblem::MalformedEnvelope(e)
        })?;

        envelope.into_result().map_err(|message| {
            tracing::error!("Bespoke {} {} rejected: {}", method, url, message);
            FirstChekoutError::remote(message)
        })
    }
}
