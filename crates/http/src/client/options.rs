//! Per-request options accepted by the gateway

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::Serialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::error::ApiError;

/// Request body: either pre-serialized text or a value serialized to JSON
/// just before sending
#[derive(Debug, Clone)]
pub enum RequestBody {
    Raw(String),
    Json(serde_json::Value),
}

impl RequestBody {
    /// Serialize a value into the JSON variant
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    pub(crate) fn into_text(self) -> Result<String, ApiError> {
        match self {
            Self::Raw(text) => Ok(text),
            Self::Json(value) => Ok(serde_json::to_string(&value)?),
        }
    }
}

/// Options for a gateway request.
///
/// Caller-supplied headers are applied first; `Content-Type` and
/// `Authorization` are always re-applied by the gateway afterwards, so
/// overrides of those two are not honored.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP verb; GET when omitted
    pub method: Option<Method>,
    /// Extra headers merged into the request
    pub headers: HeaderMap,
    /// Optional request body
    pub body: Option<RequestBody>,
    /// Per-request timeout; `None` preserves run-to-completion behavior.
    /// Not supported by the browser transport.
    #[cfg(not(target_arch = "wasm32"))]
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// GET with no body
    pub fn get() -> Self {
        Self::default()
    }

    /// Verb with no body
    pub fn method(method: Method) -> Self {
        Self {
            method: Some(method),
            ..Self::default()
        }
    }

    /// Verb with a JSON body
    pub fn with_json<T: Serialize>(method: Method, body: &T) -> Result<Self, ApiError> {
        Ok(Self {
            method: Some(method),
            body: Some(RequestBody::json(body)?),
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_bodies_are_sent_verbatim() {
        let body = RequestBody::Raw("{\"already\":\"encoded\"}".into());
        assert_eq!(body.into_text().unwrap(), "{\"already\":\"encoded\"}");
    }

    #[test]
    fn json_bodies_are_serialized_once() {
        let body = RequestBody::Json(json!({"name": "Global Health Fund"}));
        assert_eq!(
            body.into_text().unwrap(),
            "{\"name\":\"Global Health Fund\"}"
        );
    }

    #[test]
    fn method_defaults_to_get() {
        assert!(RequestOptions::get().method.is_none());
    }
}
